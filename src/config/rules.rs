//! Rule file loading.
//!
//! A rule file named on the command line must load, otherwise the run stops
//! before anything is modified. The configured default rule file is best
//! effort: when missing it is created from the built-in rules, when broken
//! the built-in rules are used with a warning.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::rules::{RuleFile, RuleSet};

/// Where the active rules came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// `--rules PATH`
    Explicit(PathBuf),
    /// The configured rule file
    File(PathBuf),
    /// Built-in defaults (rule file missing or unreadable)
    Builtin,
}

impl fmt::Display for RuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSource::Explicit(path) | RuleSource::File(path) => {
                write!(f, "{}", path.display())
            }
            RuleSource::Builtin => f.write_str("built-in defaults"),
        }
    }
}

/// Rules ready for a run, with their origin.
#[derive(Debug, Clone)]
pub struct LoadedRules {
    pub rules: RuleSet,
    pub source: RuleSource,
}

/// Load the rule set for a run.
pub fn load_rules(explicit: Option<&Path>, default_path: &Path) -> Result<LoadedRules, ConfigError> {
    if let Some(path) = explicit {
        let rules = read_rule_file(path)?;
        tracing::info!("Loaded rules from: {}", path.display());
        return Ok(LoadedRules {
            rules,
            source: RuleSource::Explicit(path.to_path_buf()),
        });
    }

    if !default_path.exists() {
        match write_rule_file(default_path, &RuleFile::builtin(), true) {
            Ok(()) => tracing::info!("Created default rule file: {}", default_path.display()),
            Err(e) => tracing::warn!("Could not create default rule file: {}", e),
        }
        return Ok(LoadedRules {
            rules: RuleSet::builtin(),
            source: RuleSource::Builtin,
        });
    }

    match read_rule_file(default_path) {
        Ok(rules) => {
            tracing::info!("Loaded rules from: {}", default_path.display());
            Ok(LoadedRules {
                rules,
                source: RuleSource::File(default_path.to_path_buf()),
            })
        }
        Err(e) => {
            tracing::warn!("Error loading rule file, using defaults: {}", e);
            Ok(LoadedRules {
                rules: RuleSet::builtin(),
                source: RuleSource::Builtin,
            })
        }
    }
}

/// Read and parse a rule file.
pub fn read_rule_file(path: &Path) -> Result<RuleSet, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file = RuleFile::from_json(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(file.into_rule_set())
}

/// Write a rule file document, creating parent directories.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn write_rule_file(path: &Path, file: &RuleFile, overwrite: bool) -> Result<(), ConfigError> {
    if path.exists() && !overwrite {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = file
        .to_json_pretty()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    fs::write(path, json + "\n").map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
