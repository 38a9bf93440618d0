//! Translation store for a language workspace
//!
//! A workspace is a directory of categories, each holding one flat JSON
//! dictionary per language: `<root>/<category>/<language>.json`.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::entry::TranslationEntry;
use super::error::{Result, TranslationError};
use super::stats::TranslationStats;
use super::validate::{validate_entry, ValidationIssue};

/// Default base language code
pub const DEFAULT_BASE_LANGUAGE: &str = "en_us";

/// Optional filters for listing entries
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    /// Only entries whose translation contains formatting codes
    pub formatted_only: bool,
    /// Only entries without a translation
    pub untranslated_only: bool,
}

impl EntryFilter {
    pub fn matches(&self, entry: &TranslationEntry) -> bool {
        if let Some(category) = &self.category {
            if entry.category != *category {
                return false;
            }
        }
        if let Some(subcategory) = &self.subcategory {
            if entry.subcategory != *subcategory {
                return false;
            }
        }
        if self.formatted_only && !entry.has_formatting() {
            return false;
        }
        if self.untranslated_only && entry.is_translated() {
            return false;
        }
        true
    }
}

/// A search result: the entry and the language it was found in
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub language: &'a str,
    pub entry: &'a TranslationEntry,
}

/// In-memory view of every language in a workspace
#[derive(Debug, Clone)]
pub struct TranslationStore {
    root: PathBuf,
    base_language: String,
    /// language -> key -> entry
    translations: BTreeMap<String, BTreeMap<String, TranslationEntry>>,
    /// (language, category) -> values that are not strings, written back on save
    passthrough: BTreeMap<(String, String), Map<String, Value>>,
    categories: BTreeSet<String>,
    languages: BTreeSet<String>,
}

impl TranslationStore {
    /// Create an empty store for the workspace at `root`. Call [`scan`](Self::scan) to load it.
    pub fn new(root: impl Into<PathBuf>, base_language: &str) -> Self {
        Self {
            root: root.into(),
            base_language: base_language.to_string(),
            translations: BTreeMap::new(),
            passthrough: BTreeMap::new(),
            categories: BTreeSet::new(),
            languages: BTreeSet::new(),
        }
    }

    /// Create a store and load the workspace.
    pub fn open(root: impl Into<PathBuf>, base_language: &str) -> Result<Self> {
        let mut store = Self::new(root, base_language);
        store.scan()?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base_language(&self) -> &str {
        &self.base_language
    }

    /// Reload every category and language from disk.
    ///
    /// Files that cannot be read or parsed are logged and skipped so one
    /// broken dictionary does not hide the rest of the workspace.
    pub fn scan(&mut self) -> Result<()> {
        self.translations.clear();
        self.passthrough.clear();
        self.categories.clear();
        self.languages.clear();

        if !self.root.is_dir() {
            return Err(TranslationError::WorkspaceNotFound {
                path: self.root.clone(),
            });
        }

        for category_dir in sorted_dir_entries(&self.root)? {
            if !category_dir.is_dir() {
                continue;
            }
            let category = file_name_of(&category_dir);
            self.categories.insert(category.clone());

            for file in sorted_dir_entries(&category_dir)? {
                if !file.is_file() || file.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(language) = file.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let language = language.to_string();
                self.languages.insert(language.clone());

                match read_dictionary(&file) {
                    Ok(dictionary) => self.load_dictionary(&language, &category, &file, dictionary),
                    Err(e) => warn!(error = %e, "Skipping unreadable language file"),
                }
            }
        }

        self.link_english_text();

        debug!(
            root = %self.root.display(),
            categories = self.categories.len(),
            languages = self.languages.len(),
            "Scanned translation workspace"
        );
        Ok(())
    }

    fn load_dictionary(
        &mut self,
        language: &str,
        category: &str,
        file: &Path,
        dictionary: Map<String, Value>,
    ) {
        let entries = self.translations.entry(language.to_string()).or_default();
        for (key, value) in dictionary {
            match value {
                Value::String(text) => {
                    entries.insert(key.clone(), TranslationEntry::new(&key, category, &text));
                }
                other => {
                    warn!(
                        file = %file.display(),
                        key = %key,
                        value = %other,
                        "Keeping non-string translation value as is"
                    );
                    self.passthrough
                        .entry((language.to_string(), category.to_string()))
                        .or_default()
                        .insert(key, other);
                }
            }
        }
    }

    /// Fill every entry's english text from the base language.
    fn link_english_text(&mut self) {
        let base: BTreeMap<String, String> = self
            .translations
            .get(&self.base_language)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(key, entry)| (key.clone(), entry.translated_text.clone()))
                    .collect()
            })
            .unwrap_or_default();

        for entries in self.translations.values_mut() {
            for (key, entry) in entries.iter_mut() {
                entry.english_text = base.get(key).cloned().unwrap_or_default();
            }
        }
    }

    /// All category names, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(String::as_str).collect()
    }

    /// Subcategories seen in a category across all languages, sorted
    pub fn subcategories(&self, category: &str) -> Vec<&str> {
        let found: BTreeSet<&str> = self
            .translations
            .values()
            .flat_map(|entries| entries.values())
            .filter(|entry| entry.category == category)
            .map(|entry| entry.subcategory.as_str())
            .collect();
        found.into_iter().collect()
    }

    /// All language codes, sorted
    pub fn languages(&self) -> Vec<&str> {
        self.languages.iter().map(String::as_str).collect()
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    /// Entries of a language that pass `filter`, sorted by key.
    ///
    /// Unknown languages yield an empty list.
    pub fn entries(&self, language: &str, filter: &EntryFilter) -> Vec<&TranslationEntry> {
        self.translations
            .get(language)
            .map(|entries| entries.values().filter(|e| filter.matches(e)).collect())
            .unwrap_or_default()
    }

    pub fn entry(&self, language: &str, key: &str) -> Option<&TranslationEntry> {
        self.translations.get(language)?.get(key)
    }

    /// Replace the translated text of one entry.
    pub fn update(&mut self, language: &str, key: &str, text: &str) -> Result<()> {
        if language == self.base_language {
            return Err(TranslationError::BaseLanguageReadOnly(language.to_string()));
        }
        let entries = self
            .translations
            .get_mut(language)
            .ok_or_else(|| TranslationError::UnknownLanguage(language.to_string()))?;
        let entry = entries
            .get_mut(key)
            .ok_or_else(|| TranslationError::UnknownKey {
                language: language.to_string(),
                key: key.to_string(),
            })?;
        entry.translated_text = text.to_string();
        Ok(())
    }

    /// Add a language containing every base key with an empty translation.
    pub fn add_language(&mut self, code: &str) -> Result<()> {
        if self.languages.contains(code) {
            return Err(TranslationError::LanguageExists(code.to_string()));
        }
        let base = self
            .translations
            .get(&self.base_language)
            .ok_or_else(|| TranslationError::MissingBaseLanguage(self.base_language.clone()))?;

        let entries: BTreeMap<String, TranslationEntry> = base
            .iter()
            .map(|(key, base_entry)| {
                let entry = TranslationEntry {
                    english_text: base_entry.translated_text.clone(),
                    translated_text: String::new(),
                    ..base_entry.clone()
                };
                (key.clone(), entry)
            })
            .collect();

        debug!(language = code, keys = entries.len(), "Added language");
        self.translations.insert(code.to_string(), entries);
        self.languages.insert(code.to_string());
        Ok(())
    }

    /// Write one language (or all of them) back to disk.
    ///
    /// Each category gets `<root>/<category>/<language>.json` with keys
    /// sorted and two-space indentation. Non-string values found by the
    /// last scan are written back unchanged. Returns the files written.
    pub fn save(&self, language: Option<&str>) -> Result<Vec<PathBuf>> {
        let languages: Vec<&str> = match language {
            Some(code) if !self.languages.contains(code) => {
                return Err(TranslationError::UnknownLanguage(code.to_string()));
            }
            Some(code) => vec![code],
            None => self.languages(),
        };

        let mut written = Vec::new();
        for code in languages {
            let Some(entries) = self.translations.get(code) else {
                continue;
            };

            let mut by_category: BTreeMap<&str, Map<String, Value>> = BTreeMap::new();
            for ((passthrough_language, category), values) in &self.passthrough {
                if passthrough_language == code {
                    by_category.insert(category.as_str(), values.clone());
                }
            }
            for entry in entries.values() {
                by_category
                    .entry(entry.category.as_str())
                    .or_default()
                    .insert(entry.key.clone(), Value::String(entry.translated_text.clone()));
            }

            for (category, data) in by_category {
                let dir = self.root.join(category);
                fs::create_dir_all(&dir).map_err(|source| TranslationError::Io {
                    path: dir.clone(),
                    source,
                })?;
                let path = dir.join(format!("{}.json", code));
                let contents =
                    serde_json::to_string_pretty(&data).map_err(|source| TranslationError::Json {
                        path: path.clone(),
                        source,
                    })?;
                fs::write(&path, contents).map_err(|source| TranslationError::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), keys = data.len(), "Saved translations");
                written.push(path);
            }
        }
        Ok(written)
    }

    /// Case-insensitive search over keys, english text and translations.
    pub fn search(&self, query: &str, language: Option<&str>) -> Vec<SearchHit<'_>> {
        let query = query.to_lowercase();
        self.translations
            .iter()
            .filter(|(code, _)| language.map_or(true, |wanted| wanted == code.as_str()))
            .flat_map(|(code, entries)| {
                entries.values().map(move |entry| SearchHit {
                    language: code.as_str(),
                    entry,
                })
            })
            .filter(|hit| {
                hit.entry.key.to_lowercase().contains(&query)
                    || hit.entry.english_text.to_lowercase().contains(&query)
                    || hit.entry.translated_text.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Progress statistics, or None for an unknown language.
    pub fn stats(&self, language: &str) -> Option<TranslationStats> {
        self.translations
            .get(language)
            .map(|entries| TranslationStats::from_entries(entries.values()))
    }

    /// Check every entry of a language, in key order.
    pub fn validate(&self, language: &str) -> Vec<ValidationIssue> {
        let Some(entries) = self.translations.get(language) else {
            return Vec::new();
        };
        let base = self.translations.get(&self.base_language);
        entries
            .values()
            .flat_map(|entry| validate_entry(entry, base.and_then(|b| b.get(&entry.key))))
            .collect()
    }

    /// Entries without a translation, sorted by category then key.
    pub fn untranslated(&self, language: &str) -> Vec<&TranslationEntry> {
        let filter = EntryFilter {
            untranslated_only: true,
            ..EntryFilter::default()
        };
        let mut entries = self.entries(language, &filter);
        entries.sort_by(|a, b| (&a.category, &a.key).cmp(&(&b.category, &b.key)));
        entries
    }
}

fn sorted_dir_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read = fs::read_dir(dir).map_err(|source| TranslationError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths: Vec<PathBuf> = read.flatten().map(|entry| entry.path()).collect();
    paths.sort();
    Ok(paths)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn read_dictionary(path: &Path) -> Result<Map<String, Value>> {
    let contents = fs::read_to_string(path).map_err(|source| TranslationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| TranslationError::Json {
        path: path.to_path_buf(),
        source,
    })
}
