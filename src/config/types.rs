//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::filter::DEFAULT_MAX_LENGTH;

/// Main configuration structure (`~/.config/histclean/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub cleaner: CleanerConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Which history file to clean
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// History file path; falls back to `$HISTFILE`, then `~/.zsh_history`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Filter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Commands longer than this many characters are removed
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

pub fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
        }
    }
}

/// Rule file location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "default_rules_file")]
    pub file: String,
}

pub fn default_rules_file() -> String {
    "~/.config/histclean/rules.json".to_string()
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            file: default_rules_file(),
        }
    }
}
