//! Configuration management for histclean
//!
//! Settings live in `~/.config/histclean/config.toml`; keep/drop rules live
//! in a separate JSON rule file whose location the settings name.

mod io;
mod rules;
mod types;

pub use rules::{load_rules, read_rule_file, write_rule_file, LoadedRules, RuleSource};
pub use types::*;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::files::expand_tilde;

impl Config {
    /// Get the config file path (~/.config/histclean/config.toml)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/histclean)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        io::load()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        io::load_from(path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        io::save_to(self, path)
    }

    /// Rule file path with `~` expanded
    pub fn rules_file(&self) -> PathBuf {
        expand_tilde(&self.rules.file)
    }

    /// Configured history file with `~` expanded, if any
    pub fn history_file(&self) -> Option<PathBuf> {
        self.history.file.as_deref().map(expand_tilde)
    }
}
