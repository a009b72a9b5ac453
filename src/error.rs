//! Error types for configuration, history and file operations.
//!
//! Per-line and per-rule problems never show up here: a malformed history
//! line or an invalid rule is counted or skipped where it occurs. These
//! errors are the ones that stop a step of the run.

use std::path::PathBuf;

/// Errors raised while loading or writing settings and rule files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    HomeDirUnavailable,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} already exists (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Errors raised while reading the history file.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("History file does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read history file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by backup, restore and the final write.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Failed to create backup {backup}: {source}")]
    BackupCreate {
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Backup {backup} could not be verified ({expected} bytes expected, {actual} found)")]
    BackupVerify {
        backup: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Failed to restore {path} from {backup}: {source}")]
    Restore {
        path: PathBuf,
        backup: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Write failed, history restored from backup {backup}: {source}")]
    WriteRestored {
        backup: PathBuf,
        #[source]
        source: Box<FileError>,
    },

    #[error("Write failed and restore failed ({restore}); your original history is in {backup}: {source}")]
    WriteUnrestored {
        backup: PathBuf,
        restore: Box<FileError>,
        #[source]
        source: Box<FileError>,
    },
}
