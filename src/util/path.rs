//! Path helpers

use std::path::{Path, PathBuf};

/// Expand `~` and `$VAR` in a path-like string, leaving it unchanged on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// `expand_env_vars` for a path.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_env_vars(&path.to_string_lossy()))
}
