//! Add-language command handler

use anyhow::Result;
use std::path::Path;

use mclang::theme::current_theme;

use super::open_store;

/// Create a language from the base language and write its dictionaries.
#[cfg(not(tarpaulin_include))]
pub fn handle(workspace: Option<&Path>, code: &str) -> Result<()> {
    let (_config, mut store) = open_store(workspace)?;
    let theme = current_theme();

    store.add_language(code)?;
    let written = store.save(Some(code))?;
    let total = store.stats(code).map_or(0, |s| s.total);

    println!(
        "{}",
        theme.success_text(&format!(
            "Added language {} with {} keys ({} files)",
            code,
            total,
            written.len()
        ))
    );
    for path in written {
        println!("  {}", theme.secondary_text(&path.display().to_string()));
    }
    Ok(())
}
