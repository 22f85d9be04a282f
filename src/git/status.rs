//! Repository status enumeration and utilities

use std::fmt;

/// Synchronization status of a single repository relative to its remote
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RepoStatus {
    /// Local HEAD and the remote tracking commit share the same committer time
    Synced,
    /// Local HEAD is ahead of or behind the remote tracking commit
    NotSynced,
    /// Repository has no remote configured
    NoRemote,
    /// Repository has no commits yet
    NoCommits,
    /// Repository could not be opened or a lookup failed
    Error,
}

impl RepoStatus {
    /// Returns the emoji symbol for this status
    pub fn symbol(&self) -> &'static str {
        match self {
            RepoStatus::Synced => "🟢",
            RepoStatus::NotSynced | RepoStatus::NoRemote | RepoStatus::NoCommits => "🟡",
            RepoStatus::Error => "🔴",
        }
    }

    /// Returns the text representation of this status
    pub fn text(&self) -> &'static str {
        match self {
            RepoStatus::Synced => "Synced",
            RepoStatus::NotSynced => "Not Synced",
            RepoStatus::NoRemote => "No Remote",
            RepoStatus::NoCommits => "No Commits",
            RepoStatus::Error => "Error",
        }
    }
}

impl fmt::Display for RepoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
