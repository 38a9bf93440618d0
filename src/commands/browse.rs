//! Browse command handler

use anyhow::{bail, Result};
use std::path::Path;

use mclang::theme::current_theme;
use mclang::tui::BrowseApp;

use super::{open_store, require_language};

/// Open the interactive browser for a language.
///
/// Without a language code the first non-base language is used, or the
/// base language when it is the only one.
#[cfg(not(tarpaulin_include))]
pub fn handle(workspace: Option<&Path>, code: Option<&str>) -> Result<()> {
    let (config, store) = open_store(workspace)?;

    let language = match code {
        Some(code) => {
            require_language(&store, code)?;
            code.to_string()
        }
        None => {
            let languages = store.languages();
            match languages
                .iter()
                .find(|lang| **lang != store.base_language())
                .or_else(|| languages.first())
            {
                Some(lang) => lang.to_string(),
                None => bail!("The workspace contains no languages"),
            }
        }
    };

    let app = BrowseApp::new(store, config.scanner(), &language)?;
    if let Some(stats) = app.run()? {
        let theme = current_theme();
        println!(
            "{}",
            theme.primary_text(&format!("{}: {}", language, stats.progress()))
        );
    }
    Ok(())
}
