//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::git::{add_git_remote, create_test_commit, set_remote_ref, setup_git_repo, BASE_COMMIT_TIME};

/// Where the fixture's `origin/<branch>` ref points
#[derive(Clone, Copy, Debug)]
pub enum RemoteTracking {
    /// Same commit as local HEAD
    AtHead,
    /// The commit before HEAD (local is ahead)
    BehindHead,
    /// A commit the local branch does not have, committed later (local is behind)
    AheadOfHead,
    /// Remote configured but no tracking refs at all
    Missing,
}

/// Builder for creating test repositories inside an existing directory
pub struct TestRepoBuilder {
    path: PathBuf,
    branch: String,
    commits: usize,
    remote: Option<(String, RemoteTracking)>,
}

impl TestRepoBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            branch: "main".to_string(),
            commits: 1,
            remote: None,
        }
    }

    pub fn on_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn with_commits(mut self, count: usize) -> Self {
        self.commits = count;
        self
    }

    /// Adds an `origin` remote whose `<remote_branch>` tracking ref is placed per `tracking`
    pub fn with_origin(mut self, remote_branch: impl Into<String>, tracking: RemoteTracking) -> Self {
        self.remote = Some((remote_branch.into(), tracking));
        self
    }

    pub fn build(self) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.path)?;
        setup_git_repo(&self.path, &self.branch)?;

        for i in 1..=self.commits {
            create_test_commit(
                &self.path,
                &format!("file{i}.txt"),
                &format!("Content {i}"),
                &format!("Commit {i}"),
                BASE_COMMIT_TIME + i as i64 * 60,
            )?;
        }

        if let Some((remote_branch, tracking)) = self.remote {
            add_git_remote(&self.path, "origin", "https://example.com/test/repo.git")?;
            match tracking {
                RemoteTracking::AtHead => set_remote_ref(&self.path, "origin", &remote_branch, "HEAD")?,
                RemoteTracking::BehindHead => {
                    set_remote_ref(&self.path, "origin", &remote_branch, "HEAD~1")?
                }
                RemoteTracking::AheadOfHead => advance_remote(&self.path, &remote_branch)?,
                RemoteTracking::Missing => {}
            }
        }

        Ok(self.path)
    }
}

/// Creates a later commit on a side branch, points the remote ref at it and
/// drops the side branch so only the tracking ref knows about it
fn advance_remote(path: &Path, remote_branch: &str) -> Result<()> {
    use super::git::git;

    let head = git(path, &["symbolic-ref", "--short", "HEAD"])?;
    git(path, &["checkout", "-q", "-b", "upstream-work"])?;
    create_test_commit(path, "upstream.txt", "upstream", "Upstream commit", BASE_COMMIT_TIME + 86_400)?;
    set_remote_ref(path, "origin", remote_branch, "HEAD")?;
    git(path, &["checkout", "-q", &head])?;
    git(path, &["branch", "-q", "-D", "upstream-work"])?;
    Ok(())
}
