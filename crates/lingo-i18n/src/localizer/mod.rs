//! The active language and the strings that go with it.
//!
//! A [`Localizer`] owns the catalog, the [`CurrentLanguage`] and the
//! selected catalog slice behind one lock, so a language change replaces
//! all three in a single write and readers never see a mix.

mod format;


pub use format::replace_args;

use lingo_core::language::{CurrentLanguage, LanguageTag, DEFAULT_TAG};
use lingo_core::traits::LocaleSource;
use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

use crate::catalog::StringCatalog;
use crate::direction::{FlexAlign, RowDirection, RowDirections};
use crate::resolve::resolve_language;

struct State {
    catalog: Arc<StringCatalog>,
    current: CurrentLanguage,
    /// Slice chosen for `current`; `None` when the catalog has neither
    /// the language nor the default.
    active: Option<LanguageTag>,
    default_tag: LanguageTag,
    prefix: String,
}

impl State {
    fn select(&mut self) {
        let tag = self.current.language_tag().as_str();
        self.active = self.catalog.select_slice(tag, self.default_tag.as_str());
    }
}

/// Process-wide localization state with a read-mostly accessor API.
pub struct Localizer {
    state: RwLock<State>,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(StringCatalog::builtin(), CurrentLanguage::default())
    }
}

impl Localizer {
    pub fn new(catalog: StringCatalog, current: CurrentLanguage) -> Self {
        let mut state = State {
            catalog: Arc::new(catalog),
            current,
            active: None,
            default_tag: LanguageTag::new(DEFAULT_TAG),
            prefix: String::new(),
        };
        state.select();
        Self {
            state: RwLock::new(state),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the catalog and the current language together.
    pub fn init(&self, catalog: StringCatalog, current: CurrentLanguage) {
        let mut state = self.write();
        state.catalog = Arc::new(catalog);
        state.current = current;
        state.select();
        info!(
            "localizer initialized: {} languages, current={}",
            state.catalog.tags().len(),
            state.current.language_tag()
        );
    }

    /// Change the slice consulted when the active language lacks a key.
    pub fn set_default_tag(&self, tag: impl Into<LanguageTag>) {
        let mut state = self.write();
        state.default_tag = tag.into();
        state.select();
    }

    /// Set the marker prepended to every translated string.
    pub fn set_display_prefix(&self, prefix: impl Into<String>) {
        self.write().prefix = prefix.into();
    }

    /// Make `current` the active language.
    pub fn apply(&self, current: CurrentLanguage) {
        let mut state = self.write();
        state.current = current;
        state.select();
        debug!(
            "language applied: tag={} slice={:?}",
            state.current.language_tag(),
            state.active.as_ref().map(LanguageTag::as_str)
        );
    }

    /// Resolve the language from `setting` and the device locales, then apply it.
    pub fn load_language(
        &self,
        setting: Option<i64>,
        locales: &dyn LocaleSource,
    ) -> CurrentLanguage {
        let resolved = resolve_language(setting, &locales.locales());
        self.apply(resolved.clone());
        resolved
    }

    pub fn current(&self) -> CurrentLanguage {
        self.read().current.clone()
    }

    /// Tag of the catalog slice currently consulted first.
    pub fn active_slice(&self) -> Option<LanguageTag> {
        self.read().active.clone()
    }

    pub fn catalog(&self) -> Arc<StringCatalog> {
        Arc::clone(&self.read().catalog)
    }

    /// Localized string for `key`.
    ///
    /// Tries the active slice, then the default-language slice, then
    /// returns the key itself. Never fails.
    pub fn translate(&self, key: impl AsRef<str>) -> String {
        let key = key.as_ref();
        let state = self.read();
        let found = state
            .active
            .as_ref()
            .and_then(|tag| state.catalog.get(tag.as_str(), key))
            .or_else(|| state.catalog.get(state.default_tag.as_str(), key))
            .unwrap_or(key);
        format!("{}{found}", state.prefix)
    }

    /// [`translate`](Self::translate) followed by `{N}` substitution.
    pub fn f_translate<A: AsRef<str>>(&self, key: impl AsRef<str>, args: &[A]) -> String {
        replace_args(&self.translate(key), args)
    }

    pub fn is_rtl(&self) -> bool {
        self.read().current.is_rtl()
    }

    pub fn row_direction(&self) -> RowDirection {
        RowDirection::for_rtl(self.is_rtl())
    }

    pub fn row_reverse_direction(&self) -> RowDirection {
        self.row_direction().reversed()
    }

    pub fn row_directions(&self) -> RowDirections {
        RowDirections::for_rtl(self.is_rtl())
    }

    pub fn flex_start(&self) -> FlexAlign {
        FlexAlign::start(self.is_rtl())
    }

    pub fn flex_end(&self) -> FlexAlign {
        FlexAlign::end(self.is_rtl())
    }
}

static GLOBAL: Lazy<Localizer> = Lazy::new(Localizer::default);

/// The process-wide localizer.
pub fn global() -> &'static Localizer {
    &GLOBAL
}

pub fn translate(key: impl AsRef<str>) -> String {
    global().translate(key)
}

pub fn f_translate<A: AsRef<str>>(key: impl AsRef<str>, args: &[A]) -> String {
    global().f_translate(key, args)
}

pub fn is_rtl() -> bool {
    global().is_rtl()
}

pub fn get_row_direction() -> RowDirection {
    global().row_direction()
}

pub fn get_row_reverse_direction() -> RowDirection {
    global().row_reverse_direction()
}

pub fn get_row_directions() -> RowDirections {
    global().row_directions()
}

pub fn get_flex_start() -> FlexAlign {
    global().flex_start()
}

pub fn get_flex_end() -> FlexAlign {
    global().flex_end()
}
