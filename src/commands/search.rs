//! Search command handler

use anyhow::Result;
use std::path::Path;

use mclang::theme::current_theme;

use super::{open_store, render_truncated, require_language};

/// Search keys, base texts and translations.
#[cfg(not(tarpaulin_include))]
pub fn handle(workspace: Option<&Path>, query: &str, language: Option<&str>) -> Result<()> {
    let (config, store) = open_store(workspace)?;
    if let Some(code) = language {
        require_language(&store, code)?;
    }
    let theme = current_theme();
    let scanner = config.scanner();

    let hits = store.search(query, language);
    if hits.is_empty() {
        println!(
            "{}",
            theme.primary_text(&format!("No matches for '{}'.", query))
        );
        return Ok(());
    }

    println!(
        "{}",
        theme.accent_text(&format!("Matches for '{}': {}", query, hits.len()))
    );
    for hit in hits {
        let text = if hit.entry.is_translated() {
            render_truncated(&scanner, &hit.entry.translated_text, 60)
        } else {
            theme.warning_text("(untranslated)")
        };
        println!(
            "  {} {} {}",
            theme.secondary_text(&format!("[{}]", hit.language)),
            theme.primary_text(&hit.entry.key),
            text
        );
    }
    Ok(())
}
