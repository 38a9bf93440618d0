//! Translation entry type

use crate::formatting::contains_formatting;

/// Subcategory used when a key has no second dotted segment.
pub const GENERAL_SUBCATEGORY: &str = "general";

/// A single key in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: String,
    /// Name of the directory the key was loaded from
    pub category: String,
    /// Second dotted segment of the key, or "general"
    pub subcategory: String,
    /// Value of the same key in the base language
    pub english_text: String,
    pub translated_text: String,
}

impl TranslationEntry {
    pub fn new(key: &str, category: &str, translated_text: &str) -> Self {
        Self {
            key: key.to_string(),
            category: category.to_string(),
            subcategory: subcategory_of(key),
            english_text: String::new(),
            translated_text: translated_text.to_string(),
        }
    }

    /// True if the translation has any non-whitespace content.
    pub fn is_translated(&self) -> bool {
        !self.translated_text.trim().is_empty()
    }

    /// True if the translation contains at least one formatting code.
    pub fn has_formatting(&self) -> bool {
        contains_formatting(&self.translated_text)
    }
}

/// Derive the subcategory from a dotted key.
///
/// `item.sword.name` belongs to `sword`; keys without a dot belong to
/// `general`.
pub fn subcategory_of(key: &str) -> String {
    key.split('.')
        .nth(1)
        .unwrap_or(GENERAL_SUBCATEGORY)
        .to_string()
}
