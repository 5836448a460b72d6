//! String catalog: language tag → (key → localized string).

use lingo_core::error::LingoError;
use lingo_core::language::LanguageTag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::keys::FeedbackKey;

/// Key → string mapping for one language.
pub type CatalogSlice = HashMap<String, String>;

/// All localized strings, grouped by language tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringCatalog {
    slices: HashMap<LanguageTag, CatalogSlice>,
}

impl StringCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the strings the library itself displays, in Hebrew,
    /// Arabic and English.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for key in FeedbackKey::ALL {
            let [he, ar, en] = key.builtin();
            catalog.insert("he", key.as_str(), he);
            catalog.insert("ar", key.as_str(), ar);
            catalog.insert("en", key.as_str(), en);
        }
        catalog
    }

    /// Parse a JSON object of the form `{"he": {"Key": "Value"}, ...}`.
    pub fn from_json_str(json: &str) -> Result<Self, LingoError> {
        serde_json::from_str(json)
            .map_err(|e| LingoError::Catalog(format!("failed to parse catalog: {e}")))
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LingoError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LingoError::Catalog(format!("failed to read {}: {e}", path.display()))
        })?;
        let catalog = Self::from_json_str(&content)?;
        debug!(
            "catalog: loaded {} languages from {}",
            catalog.slices.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Add or replace one string.
    pub fn insert(
        &mut self,
        tag: impl Into<LanguageTag>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.slices
            .entry(tag.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Layer `other` on top of this catalog; its strings win.
    pub fn merge(&mut self, other: StringCatalog) {
        for (tag, slice) in other.slices {
            self.slices.entry(tag).or_default().extend(slice);
        }
    }

    pub fn slice(&self, tag: &str) -> Option<&CatalogSlice> {
        self.slices.get(tag)
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.slice(tag).is_some()
    }

    /// Tags present in the catalog, sorted.
    pub fn tags(&self) -> Vec<&LanguageTag> {
        let mut tags: Vec<_> = self.slices.keys().collect();
        tags.sort();
        tags
    }

    /// Non-empty string for `key` in the slice for `tag`.
    ///
    /// Empty strings count as missing so the fallback chain continues.
    pub fn get(&self, tag: &str, key: &str) -> Option<&str> {
        self.slice(tag)?
            .get(key)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Pick the slice to use for `tag`: exact match, then the tag with its
    /// region removed (`"en-US"` → `"en"`), then `default_tag`.
    ///
    /// Returns `None` when even the default slice is absent.
    pub fn select_slice(&self, tag: &str, default_tag: &str) -> Option<LanguageTag> {
        if self.contains_tag(tag) {
            return Some(LanguageTag::new(tag));
        }
        let parts: Vec<&str> = tag.split('-').collect();
        if parts.len() == 2 && self.contains_tag(parts[0]) {
            debug!("catalog: no slice for {tag}, using {}", parts[0]);
            return Some(LanguageTag::new(parts[0]));
        }
        if self.contains_tag(default_tag) {
            debug!("catalog: no slice for {tag}, using default {default_tag}");
            return Some(LanguageTag::new(default_tag));
        }
        None
    }
}
