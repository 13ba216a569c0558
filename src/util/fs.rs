//! Filesystem utilities.

use std::path::{Component, Path, PathBuf};

/// Make a path absolute and fold away `.` and `..` components.
///
/// Purely lexical: only the current directory is consulted and symlinks
/// are not resolved. Returns the path as-is if the current directory is
/// unavailable.
pub fn absolute_path(path: &Path) -> PathBuf {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
