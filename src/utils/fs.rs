//! File system utilities

use std::path::{Component, Path, PathBuf};

use crate::core::config::REPO_MARKER;

/// Whether `dir` directly contains a repository marker
///
/// The marker may be a directory or a file (worktrees and submodules use a
/// `.git` file pointing at the real git dir).
pub fn has_repo_marker(dir: &Path) -> bool {
    dir.join(REPO_MARKER).metadata().is_ok()
}

/// Lexically removes `.` and `..` components and trailing separators
///
/// Does not touch the filesystem, so symlinks are not resolved. A `..` that
/// would climb above the root is dropped.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

/// Shortens long paths for display
pub fn shorten_path(path: &str, max_length: usize) -> String {
    if path.chars().count() <= max_length {
        return path.to_string();
    }

    let components: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if components.len() <= 2 {
        // Too few components to shorten meaningfully
        return path.to_string();
    }

    // Keep last 2 components with ellipsis prefix
    format!(
        ".../{}/{}",
        components[components.len() - 2],
        components[components.len() - 1]
    )
}
