//! Translation progress statistics

use super::entry::TranslationEntry;

/// Progress counters for one language
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationStats {
    pub total: usize,
    pub translated: usize,
    pub untranslated: usize,
    /// Entries whose translation contains formatting codes
    pub formatted: usize,
    /// Share of translated entries, rounded to one decimal
    pub percentage: f64,
}

impl TranslationStats {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a TranslationEntry>) -> Self {
        let mut total = 0;
        let mut translated = 0;
        let mut formatted = 0;
        for entry in entries {
            total += 1;
            if entry.is_translated() {
                translated += 1;
            }
            if entry.has_formatting() {
                formatted += 1;
            }
        }

        let percentage = if total > 0 {
            (translated as f64 / total as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        Self {
            total,
            translated,
            untranslated: total - translated,
            formatted,
            percentage,
        }
    }

    /// Short progress line, e.g. `12/40 (30.0%)`
    pub fn progress(&self) -> String {
        format!("{}/{} ({:.1}%)", self.translated, self.total, self.percentage)
    }
}
