//! File handling for the history file: path resolution, backups and the
//! final write.

pub mod backup;
pub mod replace;
pub mod resolve;
pub mod write;

pub use backup::{backup_path_for, create_backup, restore_from_backup};
pub use replace::{replace_with_backup, Replaced};
pub use resolve::{expand_tilde, follow_symlink, resolve_history_path};
pub use write::atomic_write;
