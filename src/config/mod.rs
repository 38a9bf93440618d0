//! Configuration management for mclang

mod io;
mod types;

pub use io::CONFIG_ENV;
pub use types::*;

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::formatting::Scanner;

impl Config {
    /// Config file path: `$MCLANG_CONFIG` or ~/.config/mclang/config.toml
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/mclang)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Resolve the language folder.
    ///
    /// An explicit path (the --workspace flag) wins over the configured
    /// directory. `~/` is expanded in both.
    pub fn workspace_directory(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(expand_home(&path.to_string_lossy()));
        }
        match &self.workspace.directory {
            Some(dir) => Ok(expand_home(dir)),
            None => bail!(
                "No workspace given. Pass --workspace <DIR> or set [workspace].directory in {}",
                io::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "config.toml".to_string())
            ),
        }
    }

    /// Scanner configured with the unknown-code policy
    pub fn scanner(&self) -> Scanner {
        Scanner::new(self.formatting.unknown_codes)
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(dir: &str) -> PathBuf {
    if let Some(stripped) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(dir)
}
