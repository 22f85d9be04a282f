//! Per-directory scan results

use std::fmt;
use std::path::{Path, PathBuf};

use crate::git::RepoStatus;

const NO_REPO_TEXT: &str = "No Repo";

/// Outcome for one visited directory
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanStatus {
    /// Direct child of the scan root with no repository anywhere beneath it
    NoRepo,
    /// Repository root classified by the inspector
    Repo(RepoStatus),
}

impl ScanStatus {
    pub fn text(&self) -> &'static str {
        match self {
            ScanStatus::NoRepo => NO_REPO_TEXT,
            ScanStatus::Repo(status) => status.text(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ScanStatus::NoRepo => "🟡",
            ScanStatus::Repo(status) => status.symbol(),
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<RepoStatus> for ScanStatus {
    fn from(status: RepoStatus) -> Self {
        ScanStatus::Repo(status)
    }
}

/// One reported directory; created once and never modified
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    pub path: PathBuf,
    pub status: ScanStatus,
}

impl ScanResult {
    pub fn new(path: impl Into<PathBuf>, status: impl Into<ScanStatus>) -> Self {
        Self {
            path: path.into(),
            status: status.into(),
        }
    }

    pub fn no_repo(path: &Path) -> Self {
        Self::new(path, ScanStatus::NoRepo)
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line_format() {
        let result = ScanResult::new("/tmp/x/a", RepoStatus::Synced);
        assert_eq!(result.to_string(), "/tmp/x/a: Synced");

        let result = ScanResult::no_repo(Path::new("/tmp/x/b"));
        assert_eq!(result.to_string(), "/tmp/x/b: No Repo");
    }

    #[test]
    fn test_scan_status_delegates_to_repo_status() {
        assert_eq!(ScanStatus::Repo(RepoStatus::NoCommits).text(), "No Commits");
        assert_eq!(ScanStatus::Repo(RepoStatus::Error).symbol(), "🔴");
        assert_eq!(ScanStatus::NoRepo.symbol(), "🟡");
    }
}
