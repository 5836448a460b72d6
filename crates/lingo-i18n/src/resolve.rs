//! Locale resolution: user setting plus device locales → active language.

use lingo_core::language::{language_code, CurrentLanguage, LanguageSetting};
use tracing::{debug, warn};

/// Resolve the active language.
///
/// `setting` is the persisted [`LanguageSetting`] code. `None` or the
/// device-default code scans `device_locales` in order and picks the first
/// English, Hebrew or Arabic entry, defaulting to English. An explicit
/// setting maps to its fixed language; an unknown code means Hebrew.
pub fn resolve_language<S: AsRef<str>>(
    setting: Option<i64>,
    device_locales: &[S],
) -> CurrentLanguage {
    debug!("resolving language: setting={setting:?}");
    let resolved = match setting.map(|code| (code, LanguageSetting::from_code(code))) {
        None | Some((_, Some(LanguageSetting::DeviceDefault))) => from_device(device_locales),
        Some((_, Some(explicit))) => explicit
            .fixed_language()
            .unwrap_or_else(CurrentLanguage::hebrew),
        Some((code, None)) => {
            warn!("unrecognized language setting {code}, using Hebrew");
            CurrentLanguage::hebrew()
        }
    };
    debug!(
        "language resolved: tag={} rtl={}",
        resolved.language_tag(),
        resolved.is_rtl()
    );
    resolved
}

/// First supported device locale, or English.
fn from_device<S: AsRef<str>>(device_locales: &[S]) -> CurrentLanguage {
    device_locales
        .iter()
        .find_map(|locale| match language_code(locale.as_ref()).as_str() {
            "en" => Some(CurrentLanguage::english()),
            "he" => Some(CurrentLanguage::hebrew()),
            "ar" => Some(CurrentLanguage::arabic()),
            _ => None,
        })
        .unwrap_or_else(CurrentLanguage::english)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_explicit_settings_ignore_device() {
        let locales = ["en-US", "ar-EG"];
        let he = resolve_language(Some(LanguageSetting::Hebrew.code()), &locales);
        assert_eq!(he, CurrentLanguage::hebrew());
        let ar = resolve_language(Some(LanguageSetting::Arabic.code()), &["he-IL"]);
        assert_eq!(ar.language_tag().as_str(), "ar");
        assert!(ar.is_rtl());
        let en = resolve_language(Some(LanguageSetting::English.code()), &["he-IL"]);
        assert_eq!(en.language_tag().as_str(), "en");
        assert!(!en.is_rtl());
    }

    #[test]
    fn test_device_default_first_supported_wins() {
        let cur = resolve_language(Some(1), &["de-DE", "he-IL"]);
        assert_eq!(cur.language_tag().as_str(), "he");
        assert!(cur.is_rtl());

        let cur = resolve_language(Some(1), &["ar-SA", "en-GB"]);
        assert_eq!(cur.language_tag().as_str(), "ar");
    }

    #[test]
    fn test_device_default_no_match_is_english() {
        let cur = resolve_language(Some(1), &["fr-FR"]);
        assert_eq!(cur.language_tag().as_str(), "en");
        assert!(!cur.is_rtl());
        assert_eq!(resolve_language(None, &NONE), CurrentLanguage::english());
    }

    #[test]
    fn test_unset_setting_uses_device() {
        assert_eq!(resolve_language(None, &["he_IL.UTF-8"]), CurrentLanguage::hebrew());
    }

    #[test]
    fn test_unknown_setting_is_hebrew() {
        assert_eq!(resolve_language(Some(0), &["en-US"]), CurrentLanguage::hebrew());
        assert_eq!(resolve_language(Some(42), &["en-US"]), CurrentLanguage::hebrew());
    }
}
