//! Plain-text report of untranslated keys

use std::fmt::Write as _;

use super::entry::TranslationEntry;
use crate::formatting::strip_formatting;

/// Build the untranslated-keys report for `language`.
///
/// Entries are expected in (category, key) order, as returned by
/// `TranslationStore::untranslated`. English text is written without
/// formatting codes since the report is plain text.
pub fn untranslated_report(language: &str, entries: &[&TranslationEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Untranslated keys for {}", language);
    let _ = writeln!(out, "{}", "=".repeat(50));
    out.push('\n');

    let mut current_category: Option<&str> = None;
    for entry in entries {
        if current_category != Some(entry.category.as_str()) {
            current_category = Some(entry.category.as_str());
            let _ = write!(out, "\n## {}\n\n", entry.category);
        }
        let _ = writeln!(out, "Key: {}", entry.key);
        let _ = writeln!(out, "English: {}", strip_formatting(&entry.english_text));
        let _ = write!(out, "Translation: [TODO]\n\n");
    }
    out
}
