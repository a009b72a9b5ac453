//! Timestamped backups of the history file.
//!
//! A backup sits next to the original as `<name>.backup_YYYYmmdd_HHMMSS`.
//! Backups are never deleted by histclean.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::resolve::follow_symlink;
use crate::error::FileError;

/// strftime format of the backup suffix.
pub const BACKUP_STAMP: &str = "%Y%m%d_%H%M%S";

/// Get the backup path for a file at the given time.
///
/// When a backup with that name already exists (two runs within one second)
/// a numeric suffix is added so an older backup is never overwritten.
pub fn backup_path_for(path: &Path, at: DateTime<Local>) -> PathBuf {
    let mut base = path.as_os_str().to_owned();
    base.push(format!(".backup_{}", at.format(BACKUP_STAMP)));
    let candidate = PathBuf::from(&base);
    if !candidate.exists() {
        return candidate;
    }

    let mut n = 1u32;
    loop {
        let mut numbered = base.clone();
        numbered.push(format!("_{}", n));
        let numbered = PathBuf::from(numbered);
        if !numbered.exists() {
            return numbered;
        }
        n += 1;
    }
}

/// Create a verified backup of the given file, named after the current time.
pub fn create_backup(path: &Path) -> Result<PathBuf, FileError> {
    create_backup_at(path, Local::now())
}

/// Create a verified backup named after `at`.
///
/// The copy must exist and have the same length as the original, otherwise
/// the run must not go on to modify the original.
pub fn create_backup_at(path: &Path, at: DateTime<Local>) -> Result<PathBuf, FileError> {
    let backup = backup_path_for(path, at);

    let copied = fs::copy(path, &backup).map_err(|source| FileError::BackupCreate {
        backup: backup.clone(),
        source,
    })?;
    let expected = fs::metadata(path)
        .map_err(|source| FileError::BackupCreate {
            backup: backup.clone(),
            source,
        })?
        .len();
    let actual = fs::metadata(&backup).map(|m| m.len()).unwrap_or(0);

    if copied != expected || actual != expected {
        return Err(FileError::BackupVerify {
            backup,
            expected,
            actual,
        });
    }

    tracing::info!("Created backup: {}", backup.display());
    Ok(backup)
}

/// Restore a file from a backup.
///
/// Uses an atomic temp+rename pattern for crash safety. A symlinked `path`
/// is restored through to its target. The backup itself is kept.
pub fn restore_from_backup(path: &Path, backup: &Path) -> Result<(), FileError> {
    let path = follow_symlink(path);
    let path = path.as_path();
    let restore_err = |source| FileError::Restore {
        path: path.to_path_buf(),
        backup: backup.to_path_buf(),
        source,
    };

    let mut temp = path.as_os_str().to_owned();
    temp.push(".restore.tmp");
    let temp_path = PathBuf::from(temp);

    fs::copy(backup, &temp_path).map_err(restore_err)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(restore_err(e));
    }

    tracing::info!("Restored {} from {}", path.display(), backup.display());
    Ok(())
}
