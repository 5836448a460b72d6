//! Language identifiers, the active-language snapshot, and the persisted
//! language preference.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Tag of the language whose catalog slice is used when nothing better exists.
pub const DEFAULT_TAG: &str = "he";

/// Short code selecting a catalog slice (e.g. `"he"`, `"ar"`, `"en"`, `"en-US"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, lower-cased: `"en-US"` → `"en"`, `"he_IL.UTF-8"` → `"he"`.
    pub fn language_code(&self) -> String {
        language_code(&self.0)
    }

    /// Whether text in this language runs right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self.language_code().as_str(), "he" | "ar")
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LanguageTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for LanguageTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract the lower-cased language code from a locale string.
///
/// Drops any `.encoding` / `@modifier` suffix and everything after the
/// first `-` or `_`.
pub fn language_code(locale: &str) -> String {
    let raw = locale.trim();
    let raw = raw.split(&['.', '@'][..]).next().unwrap_or(raw);
    raw.split(&['-', '_'][..])
        .next()
        .unwrap_or(raw)
        .to_ascii_lowercase()
}

/// The active language: tag plus text direction.
///
/// Only constructible from a tag, so `is_rtl` always agrees with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentLanguage {
    language_tag: LanguageTag,
    is_rtl: bool,
}

impl CurrentLanguage {
    /// Build the snapshot for `tag`, deriving the direction from it.
    pub fn for_tag(tag: impl Into<LanguageTag>) -> Self {
        let language_tag = tag.into();
        let is_rtl = language_tag.is_rtl();
        Self {
            language_tag,
            is_rtl,
        }
    }

    pub fn hebrew() -> Self {
        Self::for_tag("he")
    }

    pub fn arabic() -> Self {
        Self::for_tag("ar")
    }

    pub fn english() -> Self {
        Self::for_tag("en")
    }

    pub fn language_tag(&self) -> &LanguageTag {
        &self.language_tag
    }

    pub fn is_rtl(&self) -> bool {
        self.is_rtl
    }
}

impl Default for CurrentLanguage {
    fn default() -> Self {
        Self::hebrew()
    }
}

/// User language preference as persisted by the host app.
///
/// Stored as a small integer; see [`LanguageSetting::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageSetting {
    /// Follow the device locale list.
    DeviceDefault,
    Hebrew,
    Arabic,
    English,
}

impl LanguageSetting {
    /// Name under which the host app persists this preference.
    pub const STORAGE_KEY: &'static str = "language";

    /// Persisted integer code.
    pub fn code(self) -> i64 {
        match self {
            Self::DeviceDefault => 1,
            Self::Hebrew => 2,
            Self::Arabic => 3,
            Self::English => 4,
        }
    }

    /// Decode a persisted integer. Unknown codes return `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::DeviceDefault),
            2 => Some(Self::Hebrew),
            3 => Some(Self::Arabic),
            4 => Some(Self::English),
            _ => None,
        }
    }

    /// Fixed language for an explicit setting; `None` for `DeviceDefault`.
    pub fn fixed_language(self) -> Option<CurrentLanguage> {
        match self {
            Self::DeviceDefault => None,
            Self::Hebrew => Some(CurrentLanguage::hebrew()),
            Self::Arabic => Some(CurrentLanguage::arabic()),
            Self::English => Some(CurrentLanguage::english()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_strips_region_and_encoding() {
        assert_eq!(language_code("en-US"), "en");
        assert_eq!(language_code("he_IL.UTF-8"), "he");
        assert_eq!(language_code("AR"), "ar");
        assert_eq!(language_code("de@euro"), "de");
        assert_eq!(language_code(""), "");
    }

    #[test]
    fn test_current_language_direction_follows_tag() {
        assert!(CurrentLanguage::hebrew().is_rtl());
        assert!(CurrentLanguage::arabic().is_rtl());
        assert!(!CurrentLanguage::english().is_rtl());
        assert!(CurrentLanguage::for_tag("he-IL").is_rtl());
        assert!(!CurrentLanguage::for_tag("fr").is_rtl());
    }

    #[test]
    fn test_default_is_hebrew() {
        let cur = CurrentLanguage::default();
        assert_eq!(cur.language_tag().as_str(), "he");
        assert!(cur.is_rtl());
    }

    #[test]
    fn test_setting_codes_round_trip() {
        for s in [
            LanguageSetting::DeviceDefault,
            LanguageSetting::Hebrew,
            LanguageSetting::Arabic,
            LanguageSetting::English,
        ] {
            assert_eq!(LanguageSetting::from_code(s.code()), Some(s));
        }
        assert_eq!(LanguageSetting::from_code(0), None);
        assert_eq!(LanguageSetting::from_code(7), None);
    }

    #[test]
    fn test_fixed_language_table() {
        assert_eq!(LanguageSetting::DeviceDefault.fixed_language(), None);
        assert_eq!(
            LanguageSetting::Arabic.fixed_language(),
            Some(CurrentLanguage::arabic())
        );
    }
}
