//! Languages command handler

use anyhow::Result;
use std::path::Path;

use mclang::theme::current_theme;

use super::open_store;

/// List every language with its translation progress.
#[cfg(not(tarpaulin_include))]
pub fn handle(workspace: Option<&Path>) -> Result<()> {
    let (_config, store) = open_store(workspace)?;
    let theme = current_theme();
    let languages = store.languages();

    if languages.is_empty() {
        println!("{}", theme.primary_text("No languages found."));
        return Ok(());
    }

    println!(
        "{}",
        theme.accent_text(&format!("Languages ({}):", languages.len()))
    );
    for code in languages {
        let Some(stats) = store.stats(code) else {
            continue;
        };
        if code == store.base_language() {
            println!(
                "  {} {}",
                theme.primary_text(&format!("{:<8}", code)),
                theme.secondary_text(&format!("base, {} keys", stats.total))
            );
        } else {
            println!(
                "  {} {}",
                theme.primary_text(&format!("{:<8}", code)),
                theme.primary_text(&stats.progress())
            );
        }
    }
    Ok(())
}
