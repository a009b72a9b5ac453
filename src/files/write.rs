//! Atomic replacement of the history file.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::resolve::follow_symlink;
use crate::error::FileError;

/// Write `content` to `path` atomically.
///
/// The data goes to a temp file in the same directory (same filesystem, so
/// the rename is atomic) which then replaces the target. A symlinked `path`
/// is written through to the file it points at. The target's permissions
/// are applied to the temp file before any data lands in it, and the data is
/// synced to disk before the rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), FileError> {
    let target = follow_symlink(path);
    let write_err = |source| FileError::Write {
        path: target.clone(),
        source,
    };

    let temp_path = temp_path_for(&target);
    let result =
        write_temp(&temp_path, &target, content).and_then(|()| fs::rename(&temp_path, &target));
    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(e));
    }

    tracing::info!("Wrote {} bytes to {}", content.len(), target.display());
    Ok(())
}

fn write_temp(temp_path: &Path, target: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = open_private(temp_path)?;
    if let Ok(meta) = fs::metadata(target) {
        file.set_permissions(meta.permissions())?;
    }
    file.write_all(content)?;
    file.sync_all()
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // A stale temp file keeps its old mode
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "history".to_string());
    let temp_name = format!(".{}.histclean.tmp", name);
    match path.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    }
}
