//! Translation store errors.

use std::path::PathBuf;

/// Errors that can occur while loading, editing or saving translations.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("Language folder not found: {}", path.display())]
    WorkspaceNotFound { path: PathBuf },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown key '{key}' in language {language}")]
    UnknownKey { language: String, key: String },

    #[error("The base language ({0}) is read-only")]
    BaseLanguageReadOnly(String),

    #[error("Language already exists: {0}")]
    LanguageExists(String),

    #[error("Base language {0} is not loaded")]
    MissingBaseLanguage(String),
}

pub type Result<T> = std::result::Result<T, TranslationError>;
