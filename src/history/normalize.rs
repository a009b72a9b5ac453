//! Canonical form of a command for duplicate detection.

use std::fmt;

/// Deduplication key. Two commands with the same key are duplicates.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalizedKey({:?})", self.0)
    }
}

/// Normalize a command for duplicate comparison.
///
/// - Backslash-newline continuations become a space
/// - Whitespace runs collapse to a single space
/// - Leading/trailing whitespace is removed
/// - Case is folded
pub fn normalize(command: &str) -> NormalizedKey {
    let joined = command.replace("\\\r\n", " ").replace("\\\n", " ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    NormalizedKey(collapsed.to_lowercase())
}
