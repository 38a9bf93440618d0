//! Config subcommands handler

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

use mclang::theme::current_theme;
use mclang::Config;

/// Print the effective configuration as TOML, followed by the workspace
/// it resolves to.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(workspace: Option<&Path>) -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    let config = Config::load()?;

    let origin = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not created yet, showing defaults)", path.display())
    };
    println!("{}", theme.secondary_text(&format!("# {}", origin)));

    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{}", theme.primary_text(toml_str.trim_end()));

    let resolved = match config.workspace_directory(workspace) {
        Ok(dir) => dir.display().to_string(),
        Err(_) => "not set".to_string(),
    };
    println!();
    println!(
        "{}",
        theme.secondary_text(&format!("# workspace in use: {}", resolved))
    );
    Ok(())
}

/// Open the config file in `$EDITOR` (default `vi`), writing the defaults
/// first if it does not exist, and check that it still parses afterwards.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    if !path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!(
        "{}",
        theme.secondary_text(&format!("Opening {} with {}", path.display(), editor))
    );

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to launch editor '{}'", editor))?;
    if !status.success() {
        bail!("Editor '{}' exited with {}", editor, status);
    }

    Config::load_from(&path).context("The edited configuration is invalid")?;
    println!("{}", theme.success_text("Configuration saved"));
    Ok(())
}
