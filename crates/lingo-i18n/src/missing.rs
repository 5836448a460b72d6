//! Missing-translation report for catalog maintainers.

use std::fmt::Write as _;

use crate::catalog::StringCatalog;

/// `(key, reference value)` pairs present in `reference` but missing or
/// empty in `target`, sorted by key.
pub fn missing_translations(
    catalog: &StringCatalog,
    reference: &str,
    target: &str,
) -> Vec<(String, String)> {
    let Some(slice) = catalog.slice(reference) else {
        return Vec::new();
    };
    let mut missing: Vec<(String, String)> = slice
        .iter()
        .filter(|(key, _)| catalog.get(target, key).is_none())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    missing.sort();
    missing
}

/// One reference → target comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSection {
    pub reference: String,
    pub target: String,
    pub entries: Vec<(String, String)>,
}

/// Result of comparing catalog slices pairwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingReport {
    pub sections: Vec<MissingSection>,
}

impl MissingReport {
    /// The standard comparisons: Hebrew → English, Hebrew → Arabic,
    /// English → Hebrew.
    pub fn build(catalog: &StringCatalog) -> Self {
        Self::for_pairs(catalog, &[("he", "en"), ("he", "ar"), ("en", "he")])
    }

    pub fn for_pairs(catalog: &StringCatalog, pairs: &[(&str, &str)]) -> Self {
        let sections = pairs
            .iter()
            .map(|(reference, target)| MissingSection {
                reference: reference.to_string(),
                target: target.to_string(),
                entries: missing_translations(catalog, reference, target),
            })
            .collect();
        Self { sections }
    }

    pub fn is_complete(&self) -> bool {
        self.sections.iter().all(|s| s.entries.is_empty())
    }

    /// Render as paste-ready JSON lines under one heading per section.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            let _ = writeln!(out, "Missing in {}:", language_name(&section.target));
            for (key, value) in &section.entries {
                let _ = writeln!(out, "{}:{},", json_string(key), json_string(value));
            }
        }
        out
    }
}

fn language_name(tag: &str) -> &str {
    match tag {
        "he" => "Hebrew",
        "ar" => "Arabic",
        "en" => "English",
        other => other,
    }
}

fn json_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}
