//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Fixed committer time used by fixtures unless a test asks for another one
pub const BASE_COMMIT_TIME: i64 = 1_700_000_000;

/// Runs git in `path`, failing with stderr when the command fails
pub fn git(path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(path).output()?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Sets up a git repository with user config on the given branch
/// Returns Ok(()) on success, or an error if git is not available
pub fn setup_git_repo(path: &Path, branch: &str) -> Result<()> {
    // Initialize git repo
    let init_result = Command::new("git")
        .args(["init", "-q"])
        .current_dir(path)
        .output()?;

    if !init_result.status.success() {
        anyhow::bail!("Git not available - skipping test");
    }

    // Pin the unborn branch so tests don't depend on init.defaultBranch
    git(path, &["symbolic-ref", "HEAD", &format!("refs/heads/{branch}")])?;

    // Configure git user
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;

    // Disable commit signing for tests
    git(path, &["config", "commit.gpgsign", "false"])?;

    Ok(())
}

/// Creates a test commit with a fixed committer time (unix seconds, UTC)
pub fn create_test_commit(
    path: &Path,
    file_name: &str,
    content: &str,
    message: &str,
    committed_at: i64,
) -> Result<()> {
    // Write file
    std::fs::write(path.join(file_name), content)?;

    // Stage file
    git(path, &["add", file_name])?;

    // Commit
    let date = format!("{committed_at} +0000");
    let commit_result = Command::new("git")
        .args(["commit", "-q", "-m", message])
        .env("GIT_AUTHOR_DATE", &date)
        .env("GIT_COMMITTER_DATE", &date)
        .current_dir(path)
        .output()?;

    if !commit_result.status.success() {
        anyhow::bail!(
            "Failed to create commit: {}",
            String::from_utf8_lossy(&commit_result.stderr)
        );
    }

    Ok(())
}

/// Adds a git remote to a repository
pub fn add_git_remote(path: &Path, remote_name: &str, url: &str) -> Result<()> {
    git(path, &["remote", "add", remote_name, url]).map(|_| ())
}

/// Points a remote tracking ref at a revision without touching the network
pub fn set_remote_ref(path: &Path, remote: &str, branch: &str, rev: &str) -> Result<()> {
    git(
        path,
        &["update-ref", &format!("refs/remotes/{remote}/{branch}"), rev],
    )
    .map(|_| ())
}

/// Checks if git is available in the system
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
