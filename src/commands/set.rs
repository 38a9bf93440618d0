//! Set command handler

use anyhow::Result;
use std::path::Path;

use mclang::theme::current_theme;

use super::{open_store, render_text};

/// Update one translation and save the language.
#[cfg(not(tarpaulin_include))]
pub fn handle(workspace: Option<&Path>, code: &str, key: &str, text: &str) -> Result<()> {
    let (config, mut store) = open_store(workspace)?;
    let theme = current_theme();

    store.update(code, key, text)?;
    store.save(Some(code))?;

    println!(
        "{} {}",
        theme.success_text(&format!("Updated {} [{}]:", key, code)),
        render_text(&config.scanner(), text)
    );
    Ok(())
}
