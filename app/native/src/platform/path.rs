//! Path utilities for user-supplied output locations.
//!
//! Output paths given on the command line may start with `~`; they are
//! expanded here. Saved files are reported by their absolute path.

use std::path::{Path, PathBuf};

/// Expands a leading tilde to the user's home directory.
///
/// Absolute and relative paths without a tilde are returned unchanged.
/// Surrounding whitespace is trimmed; an empty string yields an empty path.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

/// Returns `path` as an absolute path, anchored to the current directory.
///
/// Falls back to `path` itself when the current directory is unavailable.
#[must_use]
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
