//! Read-only repository backend abstraction
//!
//! The inspector only needs five lookups from a repository. Any implementation
//! that can answer them (the `git` CLI, a library, an in-memory fake) can back
//! a scan.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::path::Path;

/// Hex object name of a git object
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The reference HEAD points at
///
/// For a checked-out branch this is the full branch ref (`refs/heads/main`);
/// for a detached HEAD it is `HEAD` itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadRef {
    pub name: String,
}

/// The parts of a commit object the inspector compares
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitInfo {
    pub id: ObjectId,
    pub committed_at: DateTime<FixedOffset>,
}

/// Git-compatible read API used by the inspector
#[async_trait]
pub trait RepoBackend: Send + Sync {
    /// Opens the repository rooted at `dir`, failing if it is not a usable git repository
    async fn open(&self, dir: &Path) -> Result<()>;

    /// Resolves HEAD; fails when the repository has no commits yet
    async fn head(&self, dir: &Path) -> Result<HeadRef>;

    /// Lists configured remote names
    async fn remotes(&self, dir: &Path) -> Result<Vec<String>>;

    /// Resolves a full reference name (`refs/heads/main`, `refs/remotes/origin/main`, `HEAD`)
    async fn resolve_reference(&self, dir: &Path, name: &str) -> Result<ObjectId>;

    /// Reads a commit object with its committer timestamp
    async fn commit(&self, dir: &Path, id: &ObjectId) -> Result<CommitInfo>;
}

/// Builds the full name of a remote tracking reference
pub fn remote_reference_name(remote: &str, branch: &str) -> String {
    format!("refs/remotes/{remote}/{branch}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_reference_name() {
        assert_eq!(
            remote_reference_name("origin", "main"),
            "refs/remotes/origin/main"
        );
    }

    #[test]
    fn test_object_id_display() {
        let id = ObjectId::new("a1b2c3");
        assert_eq!(id.to_string(), "a1b2c3");
        assert_eq!(id.as_str(), "a1b2c3");
    }
}
