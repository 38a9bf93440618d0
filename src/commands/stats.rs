//! Stats command handler

use anyhow::Result;
use std::path::Path;

use mclang::theme::current_theme;
use mclang::translations::{EntryFilter, TranslationStats, TranslationStore};

use super::{open_store, require_language};

/// Show statistics for one language, or a summary of all of them.
#[cfg(not(tarpaulin_include))]
pub fn handle(workspace: Option<&Path>, code: Option<&str>) -> Result<()> {
    let (_config, store) = open_store(workspace)?;
    match code {
        Some(code) => {
            require_language(&store, code)?;
            show_language(&store, code);
        }
        None => show_summary(&store),
    }
    Ok(())
}

fn show_summary(store: &TranslationStore) {
    let theme = current_theme();
    let others: Vec<&str> = store
        .languages()
        .into_iter()
        .filter(|code| *code != store.base_language())
        .collect();

    if others.is_empty() {
        println!(
            "{}",
            theme.primary_text("No languages besides the base language.")
        );
        return;
    }

    println!("{}", theme.accent_text("Translation progress:"));
    for code in others {
        if let Some(stats) = store.stats(code) {
            println!(
                "  {} {}",
                theme.primary_text(&format!("{:<8}", code)),
                theme.primary_text(&stats.progress())
            );
        }
    }
}

fn show_language(store: &TranslationStore, code: &str) {
    let theme = current_theme();
    let Some(stats) = store.stats(code) else {
        return;
    };

    println!("{}", theme.accent_text(&format!("Statistics for {}:", code)));
    let rows = [
        ("Total keys", stats.total.to_string()),
        ("Translated", stats.translated.to_string()),
        ("Untranslated", stats.untranslated.to_string()),
        ("With formatting", stats.formatted.to_string()),
        ("Progress", format!("{:.1}%", stats.percentage)),
    ];
    for (label, value) in rows {
        println!("  {:<17}{}", format!("{}:", label), value);
    }
    println!();
    println!("{}", theme.accent_text("By category:"));
    for category in store.categories() {
        let filter = EntryFilter {
            category: Some(category.to_string()),
            ..EntryFilter::default()
        };
        let entries = store.entries(code, &filter);
        if entries.is_empty() {
            continue;
        }
        let per_category = TranslationStats::from_entries(entries);
        println!(
            "  {} {}",
            theme.primary_text(&format!("{:<16}", category)),
            theme.primary_text(&per_category.progress())
        );
    }
}
