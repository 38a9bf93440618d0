//! Translation workspace management
//!
//! Loads per-language JSON dictionaries grouped into categories, and
//! provides editing, search, statistics, validation and reporting on top.
//! Formatting-code handling is delegated to [`crate::formatting`].

mod entry;
mod error;
mod report;
mod stats;
mod store;
mod validate;

pub use entry::{subcategory_of, TranslationEntry, GENERAL_SUBCATEGORY};
pub use error::{Result, TranslationError};
pub use report::untranslated_report;
pub use stats::TranslationStats;
pub use store::{EntryFilter, SearchHit, TranslationStore, DEFAULT_BASE_LANGUAGE};
pub use validate::{placeholders, validate_entry, IssueKind, ValidationIssue};
