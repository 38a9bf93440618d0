//! Subcommand handlers, one module per command.
//!
//! Handlers print to stdout and return `anyhow::Result`; `main.rs`
//! dispatches to them and turns errors into exit status 1.

pub mod add_language;
pub mod browse;
pub mod categories;
pub mod codes;
pub mod completions;
pub mod config;
pub mod export;
pub mod languages;
pub mod list;
pub mod preview;
pub mod search;
pub mod set;
pub mod stats;
pub mod validate;

use anyhow::{bail, Context, Result};
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use mclang::formatting::{plain_text, render, Scanner, Segment, TextStyle};
use mclang::theme::colors_enabled;
use mclang::{Config, TranslationStore};

/// Load the config and open the workspace it (or --workspace) points to.
pub fn open_store(workspace: Option<&Path>) -> Result<(Config, TranslationStore)> {
    let config = Config::load()?;
    let root = config.workspace_directory(workspace)?;
    let store = TranslationStore::open(&root, &config.workspace.base_language)
        .with_context(|| format!("Failed to open workspace {}", root.display()))?;
    Ok((config, store))
}

/// Fail with a helpful message when `code` is not a language of the store.
pub fn require_language(store: &TranslationStore, code: &str) -> Result<()> {
    if !store.has_language(code) {
        bail!(
            "Unknown language '{}'. Available: {}",
            code,
            store.languages().join(", ")
        );
    }
    Ok(())
}

/// Render formatted text for terminal output.
///
/// Uses ANSI colors when enabled, otherwise the text without its codes.
pub fn render_text(scanner: &Scanner, text: &str) -> String {
    render_segments(&scanner.segment(text))
}

/// Like [`render_text`], cut to `max_width` terminal columns.
pub fn render_truncated(scanner: &Scanner, text: &str, max_width: usize) -> String {
    render_segments(&truncate_segments(scanner.segment(text), max_width))
}

fn render_segments(segments: &[Segment]) -> String {
    if colors_enabled() {
        render::to_ansi(segments)
    } else {
        plain_text(segments)
    }
}

/// Keep as much segment text as fits in `max_width` display columns.
///
/// Codes are already gone, so they never count and are never split. Wide
/// characters count two columns. A shortened text ends in `...` drawn in
/// the style it was cut in.
pub fn truncate_segments(segments: Vec<Segment>, max_width: usize) -> Vec<Segment> {
    let total: usize = segments.iter().map(|s| s.text.width()).sum();
    if total <= max_width {
        return segments;
    }

    let target_width = max_width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut kept = Vec::new();
    'segments: for segment in segments {
        let mut text = String::new();
        for c in segment.text.chars() {
            let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
            if used + char_width > target_width {
                if !text.is_empty() {
                    kept.push(Segment::new(text, segment.style));
                }
                break 'segments;
            }
            text.push(c);
            used += char_width;
        }
        kept.push(Segment::new(text, segment.style));
    }
    match kept.last_mut() {
        Some(last) => last.text.push_str(ELLIPSIS),
        None => kept.push(Segment::new(ELLIPSIS, TextStyle::default())),
    }
    kept
}

const ELLIPSIS: &str = "...";
