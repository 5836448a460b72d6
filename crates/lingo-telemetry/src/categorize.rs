//! Coarse buckets for telemetry values.
//!
//! Raw counts, durations, sizes and colors are never reported; only the
//! bucket label is.

/// What a size value measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Font,
    Stroke,
}

pub fn categorize_count(count: u64) -> &'static str {
    match count {
        0 => "0",
        1..=5 => "1-5",
        6..=20 => "6-20",
        _ => "20+",
    }
}

pub fn categorize_duration(seconds: f64) -> &'static str {
    if seconds < 60.0 {
        "0-1min"
    } else if seconds < 300.0 {
        "1-5min"
    } else if seconds < 900.0 {
        "5-15min"
    } else if seconds < 1800.0 {
        "15-30min"
    } else {
        "30min+"
    }
}

pub fn categorize_size(size: f64, kind: SizeKind) -> &'static str {
    match kind {
        SizeKind::Font if size < 20.0 => "small",
        SizeKind::Font if size < 40.0 => "medium",
        SizeKind::Font => "large",
        SizeKind::Stroke if size < 3.0 => "thin",
        SizeKind::Stroke if size < 10.0 => "medium",
        SizeKind::Stroke => "thick",
    }
}

const PALETTE: [(&str, &str); 9] = [
    ("#000000", "black"),
    ("#FFFFFF", "white"),
    ("#FF0000", "red"),
    ("#0000FF", "blue"),
    ("#FFFF00", "yellow"),
    ("#00FF00", "green"),
    ("#FFA500", "orange"),
    ("#800080", "purple"),
    ("#FFC0CB", "pink"),
];

/// Name of a palette color, case-insensitive. Only the first seven
/// characters count, so `#RRGGBBAA` matches its opaque color.
pub fn categorize_color(color: &str) -> &'static str {
    let head: String = color.chars().take(7).collect::<String>().to_uppercase();
    PALETTE
        .iter()
        .find(|(hex, _)| *hex == head)
        .map(|(_, name)| *name)
        .unwrap_or("other")
}

pub fn categorize_text_length(length: u64) -> &'static str {
    match length {
        0 => "0",
        1..=10 => "1-10",
        11..=50 => "11-50",
        51..=100 => "51-100",
        _ => "100+",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_buckets() {
        assert_eq!(categorize_count(0), "0");
        assert_eq!(categorize_count(1), "1-5");
        assert_eq!(categorize_count(5), "1-5");
        assert_eq!(categorize_count(6), "6-20");
        assert_eq!(categorize_count(20), "6-20");
        assert_eq!(categorize_count(21), "20+");
    }

    #[test]
    fn test_duration_buckets() {
        assert_eq!(categorize_duration(0.0), "0-1min");
        assert_eq!(categorize_duration(59.9), "0-1min");
        assert_eq!(categorize_duration(60.0), "1-5min");
        assert_eq!(categorize_duration(299.0), "1-5min");
        assert_eq!(categorize_duration(300.0), "5-15min");
        assert_eq!(categorize_duration(900.0), "15-30min");
        assert_eq!(categorize_duration(1800.0), "30min+");
    }

    #[test]
    fn test_size_buckets() {
        assert_eq!(categorize_size(12.0, SizeKind::Font), "small");
        assert_eq!(categorize_size(20.0, SizeKind::Font), "medium");
        assert_eq!(categorize_size(40.0, SizeKind::Font), "large");
        assert_eq!(categorize_size(2.5, SizeKind::Stroke), "thin");
        assert_eq!(categorize_size(3.0, SizeKind::Stroke), "medium");
        assert_eq!(categorize_size(10.0, SizeKind::Stroke), "thick");
    }

    #[test]
    fn test_color_names() {
        assert_eq!(categorize_color("#ff0000"), "red");
        assert_eq!(categorize_color("#FF0000"), "red");
        assert_eq!(categorize_color("#ffa500cc"), "orange");
        assert_eq!(categorize_color("#123456"), "other");
        assert_eq!(categorize_color(""), "other");
        assert_eq!(categorize_color("red"), "other");
    }

    #[test]
    fn test_text_length_buckets() {
        assert_eq!(categorize_text_length(0), "0");
        assert_eq!(categorize_text_length(10), "1-10");
        assert_eq!(categorize_text_length(11), "11-50");
        assert_eq!(categorize_text_length(100), "51-100");
        assert_eq!(categorize_text_length(101), "100+");
    }
}
