//! Config subcommands handler

use anyhow::{Context, Result};

use histclean::error::ConfigError;
use histclean::theme::current_theme;
use histclean::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!(
        "{}",
        theme.secondary_text(&format!("# {}", Config::config_path()?.display()))
    );
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Write the default settings file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let theme = current_theme();
    let path = Config::config_path()?;
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists { path }.into());
    }
    Config::default()
        .save_to(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    println!(
        "{}",
        theme.success_text(&format!("Settings file created at: {}", path.display()))
    );
    Ok(())
}
