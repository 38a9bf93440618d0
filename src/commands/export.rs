//! Export-untranslated command handler

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use mclang::theme::current_theme;
use mclang::translations::untranslated_report;

use super::{open_store, require_language};

/// Write the untranslated-keys report to `output`, or stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(workspace: Option<&Path>, code: &str, output: Option<&Path>) -> Result<()> {
    let (_config, store) = open_store(workspace)?;
    require_language(&store, code)?;

    let entries = store.untranslated(code);
    let report = untranslated_report(code, &entries);

    match output {
        Some(path) => {
            fs::write(path, &report)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            let theme = current_theme();
            println!(
                "{}",
                theme.success_text(&format!(
                    "Exported {} untranslated keys to {}",
                    entries.len(),
                    path.display()
                ))
            );
        }
        None => print!("{}", report),
    }
    Ok(())
}
