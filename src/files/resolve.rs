//! History and settings path resolution.
//!
//! The history file is picked in this order:
//! 1. `--file` on the command line
//! 2. `[history] file` in the settings file
//! 3. `$HISTFILE`
//! 4. `~/.zsh_history`

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Expand a leading `~` or `~/` to the home directory.
///
/// Other paths (and `~user` forms) are returned unchanged, as is everything
/// when the home directory is unknown.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Follow a symlinked history file to the file it points at.
///
/// Dotfile managers often link `~/.zsh_history` elsewhere; writes and
/// restores must replace the target, not the link. Non-links and paths that
/// cannot be resolved are returned unchanged.
pub fn follow_symlink(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Resolve the history file to clean.
pub fn resolve_history_path(
    cli: Option<&Path>,
    configured: Option<&Path>,
    histfile_env: Option<&str>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = cli {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }
    if let Some(histfile) = histfile_env.filter(|h| !h.trim().is_empty()) {
        return Ok(expand_tilde(histfile.trim()));
    }
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home.join(".zsh_history"))
}
