//! List command handler

use anyhow::Result;
use std::path::Path;

use mclang::theme::current_theme;
use mclang::translations::EntryFilter;

use super::{open_store, render_text, require_language};

/// List entries of a language with their base text and translation.
#[cfg(not(tarpaulin_include))]
pub fn handle(workspace: Option<&Path>, code: &str, filter: &EntryFilter) -> Result<()> {
    let (config, store) = open_store(workspace)?;
    require_language(&store, code)?;
    let theme = current_theme();
    let scanner = config.scanner();

    let entries = store.entries(code, filter);
    if entries.is_empty() {
        println!("{}", theme.primary_text("No entries found."));
        return Ok(());
    }

    println!(
        "{}",
        theme.accent_text(&format!("Entries for {}: {}", code, entries.len()))
    );
    println!();

    let is_base = code == store.base_language();
    for entry in entries {
        println!(
            "{} {}",
            theme.accent_text(&entry.key),
            theme.secondary_text(&format!("({}/{})", entry.category, entry.subcategory))
        );
        if !is_base {
            println!(
                "    {} {}",
                theme.secondary_text(&format!("{}:", store.base_language())),
                render_text(&scanner, &entry.english_text)
            );
        }
        let translation = if entry.is_translated() {
            render_text(&scanner, &entry.translated_text)
        } else {
            theme.warning_text("(untranslated)")
        };
        println!(
            "    {} {}",
            theme.secondary_text(&format!("{}:", code)),
            translation
        );
    }
    Ok(())
}
