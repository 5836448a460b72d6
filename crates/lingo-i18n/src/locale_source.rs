//! Device locale sources.

use lingo_core::traits::LocaleSource;

/// Locales reported by the operating system, most preferred first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocales;

impl LocaleSource for SystemLocales {
    fn locales(&self) -> Vec<String> {
        sys_locale::get_locales().collect()
    }
}

/// A fixed locale list (CLI overrides, tests).
#[derive(Debug, Clone, Default)]
pub struct FixedLocales(pub Vec<String>);

impl FixedLocales {
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(locales.into_iter().map(Into::into).collect())
    }
}

impl LocaleSource for FixedLocales {
    fn locales(&self) -> Vec<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_locales_keep_order() {
        let src = FixedLocales::new(["de-DE", "he-IL"]);
        assert_eq!(src.locales(), vec!["de-DE".to_string(), "he-IL".to_string()]);
    }
}
