//! Configuration constants and settings

use std::path::PathBuf;
use std::time::Duration;

// Repository detection
pub const REPO_MARKER: &str = ".git";
pub const TRACKED_REMOTE: &str = "origin";
// Tried in order; the first branch that exists on the remote wins
pub const TRACKED_BRANCHES: &[&str] = &["master", "main"];

// Timeout constants
pub const GIT_OPERATION_TIMEOUT_SECS: u64 = 180; // 3 minutes per git invocation

// Directories never descended into
pub const PRUNED_DIRECTORIES: &[&str] = &["node_modules"];

// UI Constants
pub const SCANNING_MESSAGE: &str = "🔍 Scanning for git repositories...";
pub const SPINNER_TEMPLATE: &str = "{spinner} {wide_msg}";
pub const SPINNER_TICK_MILLIS: u64 = 100;
pub const NO_RESULTS_MESSAGE: &str = "No directories found to report.";

/// Settings for one scan pass
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Directory the walk starts from
    pub root: PathBuf,
    /// Directory names that are never descended into
    pub pruned: Vec<String>,
    /// Upper bound for each git invocation
    pub git_timeout: Duration,
}

impl ScanConfig {
    /// Creates a configuration with the default pruned names and timeout
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pruned: PRUNED_DIRECTORIES.iter().map(|name| name.to_string()).collect(),
            git_timeout: Duration::from_secs(GIT_OPERATION_TIMEOUT_SECS),
        }
    }

    /// Adds extra directory names to prune, ignoring duplicates
    pub fn with_pruned<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.pruned.contains(&name) {
                self.pruned.push(name);
            }
        }
        self
    }

    /// Overrides the per-invocation git timeout (at least one second)
    pub fn with_git_timeout(mut self, secs: u64) -> Self {
        self.git_timeout = Duration::from_secs(secs.max(1));
        self
    }

    /// Whether a directory with this name is pruned
    pub fn is_pruned(&self, name: &str) -> bool {
        self.pruned.iter().any(|pruned| pruned == name)
    }
}
