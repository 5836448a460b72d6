//! # lingo-i18n
//!
//! Localized strings with a fallback chain, language resolution from the
//! user setting or the device locale list, and RTL-aware layout tokens.
//!
//! Most apps use the process-wide [`Localizer`] through the free
//! functions re-exported here (`translate`, `f_translate`, `is_rtl`, ...).
//! Tests and embedders that need isolation create their own `Localizer`.

pub mod catalog;
pub mod direction;
pub mod keys;
pub mod locale_source;
pub mod localizer;
pub mod missing;
pub mod resolve;

pub use catalog::StringCatalog;
pub use direction::{FlexAlign, RowDirection, RowDirections, TextAlign, TextDirection};
pub use keys::FeedbackKey;
pub use locale_source::{FixedLocales, SystemLocales};
pub use localizer::{
    f_translate, get_flex_end, get_flex_start, get_row_direction, get_row_directions,
    get_row_reverse_direction, global, is_rtl, translate, Localizer,
};
pub use missing::{missing_translations, MissingReport};
pub use resolve::resolve_language;
