//! Validate command handler

use anyhow::{bail, Result};
use std::path::Path;

use mclang::theme::current_theme;

use super::{open_store, require_language};

/// Print validation issues for a language.
///
/// Returns an error when any issue is found so the process exits with 1.
#[cfg(not(tarpaulin_include))]
pub fn handle(workspace: Option<&Path>, code: &str) -> Result<()> {
    let (_config, store) = open_store(workspace)?;
    require_language(&store, code)?;
    let theme = current_theme();

    let issues = store.validate(code);
    if issues.is_empty() {
        println!("{}", theme.success_text("No validation issues"));
        return Ok(());
    }

    println!(
        "{}",
        theme.accent_text(&format!("Validation issues for {}:", code))
    );
    for issue in &issues {
        println!("  {}", theme.warning_text(&issue.to_string()));
    }
    bail!("{} validation issue(s) found", issues.len())
}
