//! Translation validation.
//!
//! Checks a translated entry against its base-language entry:
//! - the translation must not be blank
//! - placeholders (`%1$s`, `%2$d`, `{player}`) must match the base text
//! - every `§` pair must be a known formatting code
//!
//! Placeholders are compared after formatting codes are stripped, so a
//! code glued to a placeholder never hides or invents one.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::entry::TranslationEntry;
use crate::formatting::{strip_formatting, unknown_codes};

/// What is wrong with an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Empty,
    PlaceholderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    UnknownFormatCode {
        token: String,
        /// Offset of the sentinel, in characters
        offset: usize,
    },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Empty => write!(f, "Empty translation"),
            IssueKind::PlaceholderMismatch { expected, found } => write!(
                f,
                "Placeholder mismatch: expected [{}], got [{}]",
                expected.join(", "),
                found.join(", ")
            ),
            IssueKind::UnknownFormatCode { token, offset } => {
                write!(f, "Unknown formatting code {} at position {}", token, offset)
            }
        }
    }
}

/// A validation problem attached to a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub key: String,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.kind)
    }
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"%\d+\$[sd]|\{[^}]+\}").expect("placeholder pattern is valid")
    })
}

/// Placeholders in order of appearance, after removing formatting codes.
pub fn placeholders(text: &str) -> Vec<String> {
    let plain = strip_formatting(text);
    placeholder_regex()
        .find_iter(&plain)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Validate one entry against its base-language counterpart.
///
/// A blank translation reports only `Empty`.
pub fn validate_entry(
    entry: &TranslationEntry,
    base: Option<&TranslationEntry>,
) -> Vec<ValidationIssue> {
    let issue = |kind| ValidationIssue {
        key: entry.key.clone(),
        kind,
    };

    if !entry.is_translated() {
        return vec![issue(IssueKind::Empty)];
    }

    let mut issues = Vec::new();

    if let Some(base) = base {
        let expected = placeholders(&base.translated_text);
        let found = placeholders(&entry.translated_text);
        let expected_set: BTreeSet<&String> = expected.iter().collect();
        let found_set: BTreeSet<&String> = found.iter().collect();
        if expected_set != found_set {
            issues.push(issue(IssueKind::PlaceholderMismatch { expected, found }));
        }
    }

    for unknown in unknown_codes(&entry.translated_text) {
        issues.push(issue(IssueKind::UnknownFormatCode {
            token: unknown.token(),
            offset: unknown.offset,
        }));
    }

    issues
}
