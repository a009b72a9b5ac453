//! Configuration I/O operations

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::Config;

/// Get the config file path (~/.config/histclean/config.toml)
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get the config directory path (~/.config/histclean)
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home.join(".config").join("histclean"))
}

/// Load configuration from the default location
pub fn load() -> Result<Config, ConfigError> {
    load_from(&config_path()?)
}

/// Load configuration from file, or return defaults if not found
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    validate(&config)?;
    Ok(config)
}

/// Save configuration to file, creating the directory if needed
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| ConfigError::Invalid(e.to_string()))?;
    fs::write(path, contents).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.cleaner.max_length == 0 {
        return Err(ConfigError::Invalid(
            "cleaner.max_length must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
