//! Single-pass scanner for `§` formatting codes.
//!
//! The scanner walks the text once with one character of lookahead,
//! accumulating literal characters and switching style whenever a code
//! is met. All operations are total: malformed or truncated codes are
//! given a defined meaning instead of being rejected.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::codes::{is_code_suffix, lookup, SENTINEL};
use super::types::{Segment, TextStyle};

/// How the scanner treats a sentinel followed by a character that is not
/// in the code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCodePolicy {
    /// Consume both characters as a zero-width no-op.
    #[default]
    Swallow,
    /// Keep the sentinel as literal text and continue with the next character.
    Literal,
}

impl UnknownCodePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownCodePolicy::Swallow => "swallow",
            UnknownCodePolicy::Literal => "literal",
        }
    }
}

/// A sentinel pair whose suffix is not a known code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCode {
    /// Offset of the sentinel, in characters
    pub offset: usize,
    pub suffix: char,
}

impl UnknownCode {
    /// The two-character token as it appears in the text.
    pub fn token(&self) -> String {
        format!("{}{}", SENTINEL, self.suffix)
    }
}

/// Splits text into styled segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    policy: UnknownCodePolicy,
}

impl Scanner {
    pub fn new(policy: UnknownCodePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownCodePolicy {
        self.policy
    }

    /// Split `text` into maximal runs of literal characters sharing a style.
    ///
    /// Style starts as white with no decorations for every call. Codes
    /// between two runs never produce an empty segment.
    ///
    /// A code does not by itself end a run: the run is only cut when the
    /// style actually changes. A redundant code (`§lA§lB`, `A§fB`) or an
    /// unknown one (`A§zB`) therefore leaves a single segment `"AB"`, where
    /// flushing at every sentinel pair would give two.
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut style = TextStyle::default();
        let mut run = String::new();
        let mut run_style = style;
        let mut chars = text.chars().enumerate().peekable();

        while let Some((offset, c)) = chars.next() {
            if c == SENTINEL {
                if let Some(&(_, suffix)) = chars.peek() {
                    match lookup(suffix) {
                        Some(code) => {
                            code.apply(&mut style);
                            chars.next();
                            continue;
                        }
                        None if self.policy == UnknownCodePolicy::Swallow => {
                            trace!(offset, suffix = %suffix, "Swallowed unknown formatting code");
                            chars.next();
                            continue;
                        }
                        None => {}
                    }
                }
            }

            if run.is_empty() {
                run_style = style;
            } else if run_style != style {
                segments.push(Segment::new(std::mem::take(&mut run), run_style));
                run_style = style;
            }
            run.push(c);
        }

        if !run.is_empty() {
            segments.push(Segment::new(run, run_style));
        }
        segments
    }
}

/// Check if text contains at least one valid formatting code.
pub fn contains_formatting(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == SENTINEL && chars.peek().is_some_and(|&next| is_code_suffix(next)) {
            return true;
        }
    }
    false
}

/// Remove every valid formatting code, leaving all other characters alone.
///
/// Codes are removed left to right without overlap; unknown sentinel pairs
/// and a trailing sentinel are kept verbatim.
pub fn strip_formatting(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == SENTINEL && chars.peek().is_some_and(|&next| is_code_suffix(next)) {
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

/// Segment text with the default (swallowing) policy.
pub fn segment(text: &str) -> Vec<Segment> {
    Scanner::default().segment(text)
}

/// List every sentinel pair whose suffix is not a known code.
///
/// Pairs are consumed the way the swallowing scanner consumes them, so
/// `"§§l"` reports `§§` at offset 0 and nothing else.
pub fn unknown_codes(text: &str) -> Vec<UnknownCode> {
    let mut found = Vec::new();
    let mut chars = text.chars().enumerate().peekable();
    while let Some((offset, c)) = chars.next() {
        if c != SENTINEL {
            continue;
        }
        if let Some((_, suffix)) = chars.next() {
            if !is_code_suffix(suffix) {
                found.push(UnknownCode { offset, suffix });
            }
        }
    }
    found
}
