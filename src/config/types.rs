//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::formatting::UnknownCodePolicy;
use crate::translations::DEFAULT_BASE_LANGUAGE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub formatting: FormattingConfig,
}

/// Workspace configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Language folder used when --workspace is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Language that all others are translated from (read-only)
    #[serde(default = "default_base_language")]
    pub base_language: String,
}

pub fn default_base_language() -> String {
    DEFAULT_BASE_LANGUAGE.to_string()
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            directory: None,
            base_language: default_base_language(),
        }
    }
}

/// Formatting code handling and preview output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingConfig {
    /// What to do with `§` followed by an unknown character
    #[serde(default)]
    pub unknown_codes: UnknownCodePolicy,
    /// Render previews with ANSI colors (NO_COLOR still wins)
    #[serde(default = "default_color")]
    pub color: bool,
}

pub fn default_color() -> bool {
    true
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            unknown_codes: UnknownCodePolicy::default(),
            color: default_color(),
        }
    }
}
