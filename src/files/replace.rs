//! Back up, rewrite and, on failure, restore the history file.
//!
//! The content is read from the verified backup, never from an earlier read,
//! so commands appended by other shells before the backup was taken end up
//! in both the backup and the rewritten file.

use std::fs;
use std::path::{Path, PathBuf};

use super::backup::{create_backup, restore_from_backup};
use crate::error::FileError;

/// Outcome of a successful rewrite.
#[derive(Debug)]
pub struct Replaced<T> {
    pub backup: PathBuf,
    pub original_len: usize,
    pub written_len: usize,
    pub output: T,
}

/// Back up `path`, transform the backed-up bytes and write the result.
///
/// `transform` returns its own output alongside the new file contents.
/// When `write` fails the original is restored from the backup and the
/// error names the backup location either way.
pub fn replace_with_backup<T, F, W>(
    path: &Path,
    transform: F,
    write: W,
) -> Result<Replaced<T>, FileError>
where
    F: FnOnce(&[u8]) -> (T, Vec<u8>),
    W: FnOnce(&Path, &[u8]) -> Result<(), FileError>,
{
    let backup = create_backup(path)?;
    let bytes = fs::read(&backup).map_err(|source| FileError::Read {
        path: backup.clone(),
        source,
    })?;

    let (output, content) = transform(&bytes);

    if let Err(write_err) = write(path, &content) {
        tracing::warn!(
            "Write failed, restoring {} from {}",
            path.display(),
            backup.display()
        );
        return Err(match restore_from_backup(path, &backup) {
            Ok(()) => FileError::WriteRestored {
                backup,
                source: Box::new(write_err),
            },
            Err(restore_err) => FileError::WriteUnrestored {
                backup,
                restore: Box::new(restore_err),
                source: Box::new(write_err),
            },
        });
    }

    Ok(Replaced {
        backup,
        original_len: bytes.len(),
        written_len: content.len(),
        output,
    })
}
