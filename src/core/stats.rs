//! Per-status counts for the optional summary footer

use std::time::Duration;

use super::result::{ScanResult, ScanStatus};
use crate::git::RepoStatus;

/// Counts of each reported status
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub synced: usize,
    pub not_synced: usize,
    pub no_remote: usize,
    pub no_commits: usize,
    pub errors: usize,
    pub no_repo: usize,
}

impl ScanSummary {
    /// Tallies a finished result list
    pub fn from_results(results: &[ScanResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.update(&result.status);
        }
        summary
    }

    /// Updates counts with one status
    pub fn update(&mut self, status: &ScanStatus) {
        match status {
            ScanStatus::NoRepo => self.no_repo += 1,
            ScanStatus::Repo(RepoStatus::Synced) => self.synced += 1,
            ScanStatus::Repo(RepoStatus::NotSynced) => self.not_synced += 1,
            ScanStatus::Repo(RepoStatus::NoRemote) => self.no_remote += 1,
            ScanStatus::Repo(RepoStatus::NoCommits) => self.no_commits += 1,
            ScanStatus::Repo(RepoStatus::Error) => self.errors += 1,
        }
    }

    /// Number of classified repositories
    pub fn repositories(&self) -> usize {
        self.synced + self.not_synced + self.no_remote + self.no_commits + self.errors
    }

    /// Generates the summary footer
    pub fn generate_summary(&self, duration: Duration) -> String {
        let repo_word = if self.repositories() == 1 {
            "repository"
        } else {
            "repositories"
        };

        let mut summary = format!(
            "✅ Scanned {} {} in {:.1}s • 🟢 {} synced • 🟡 {} not synced • 🟡 {} no remote • 🟡 {} no commits",
            self.repositories(),
            repo_word,
            duration.as_secs_f64(),
            self.synced,
            self.not_synced,
            self.no_remote,
            self.no_commits,
        );
        if self.errors > 0 {
            summary.push_str(&format!(" • 🔴 {} failed", self.errors));
        }
        if self.no_repo > 0 {
            summary.push_str(&format!(" • {} without repos", self.no_repo));
        }
        summary
    }
}
