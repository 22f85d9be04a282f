//! Directory tree walk that classifies every repository it meets
//!
//! The walk is depth-first and single threaded. Siblings are visited in file
//! name order, so two scans of an unchanged tree report identical lists.
//!
//! For each directory the walker applies, in order:
//! 1. direct children of the root with no repository anywhere beneath them are
//!    reported as "No Repo";
//! 2. pruned names (`node_modules`) are never descended into;
//! 3. repository roots are classified and not descended into;
//! 4. everything else is descended into.
//!
//! Directories between a direct child of the root and a deeper repository get
//! no result of their own.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use super::config::ScanConfig;
use super::error::{Result, ScanError};
use super::result::ScanResult;
use crate::git::{Inspector, RepoBackend};
use crate::utils::{clean_path, has_repo_marker};

/// What the walker does with a visited directory
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Walk into the directory's children
    Descend,
    /// Leave the subtree alone
    Skip,
    /// Hand the directory to the inspector and leave its subtree alone
    Classify,
}

/// Decides how to treat `dir`; pruning wins over classification
pub fn decide(dir: &Path, name: &OsStr, config: &ScanConfig) -> Visit {
    if name.to_str().is_some_and(|name| config.is_pruned(name)) {
        Visit::Skip
    } else if has_repo_marker(dir) {
        Visit::Classify
    } else {
        Visit::Descend
    }
}

/// Whether `dir` or any directory below it is a repository root
///
/// Looks arbitrarily deep and does not honour pruned names. Stops at the first
/// unreadable entry; the main walk reports that error itself.
pub fn subtree_has_repo(dir: &Path) -> bool {
    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let Ok(entry) = entry else {
            return false;
        };
        if entry.file_type().is_dir() && has_repo_marker(entry.path()) {
            return true;
        }
    }
    false
}

/// Makes `path` absolute and clean, and checks that it is a readable directory
///
/// `.` and `..` are removed lexically, so `work/..` names the parent of
/// `work` even when `work` is a symlink.
pub fn resolve_root(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let absolute = std::path::absolute(path)
        .map(|absolute| clean_path(&absolute))
        .map_err(|source| ScanError::InvalidRoot {
            path: path.to_path_buf(),
            source,
        })?;

    let metadata = absolute
        .metadata()
        .map_err(|source| ScanError::InvalidRoot {
            path: absolute.clone(),
            source,
        })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(absolute));
    }

    Ok(absolute)
}

/// Scans the tree under `config.root` and returns results in visit order
pub async fn scan<B: RepoBackend>(
    config: &ScanConfig,
    inspector: &Inspector<B>,
) -> Result<Vec<ScanResult>> {
    scan_with_progress(config, inspector, |_| {}).await
}

/// Like [`scan`], calling `on_visit` for every directory as it is reached
///
/// Any filesystem error aborts the whole scan; no partial list is returned.
pub async fn scan_with_progress<B, F>(
    config: &ScanConfig,
    inspector: &Inspector<B>,
    mut on_visit: F,
) -> Result<Vec<ScanResult>>
where
    B: RepoBackend,
    F: FnMut(&Path),
{
    let root = resolve_root(&config.root)?;
    let mut results = Vec::new();
    let mut entries = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        on_visit(dir);

        if entry.depth() == 1 && !subtree_has_repo(dir) {
            trace!(path = %dir.display(), "no repository beneath");
            results.push(ScanResult::no_repo(dir));
        }

        match decide(dir, entry.file_name(), config) {
            Visit::Descend => {}
            Visit::Skip => {
                trace!(path = %dir.display(), "pruned");
                entries.skip_current_dir();
            }
            Visit::Classify => {
                let status = inspector.classify(dir).await;
                debug!(path = %dir.display(), %status, "classified");
                results.push(ScanResult::new(dir, status));
                entries.skip_current_dir();
            }
        }
    }

    Ok(results)
}
