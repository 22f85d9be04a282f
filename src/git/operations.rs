//! Basic git operations and command execution

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::trace;

use super::backend::{CommitInfo, HeadRef, ObjectId, RepoBackend};
use crate::core::config::GIT_OPERATION_TIMEOUT_SECS;

// Git command arguments
const GIT_OPEN_ARGS: &[&str] = &["rev-parse", "--git-dir"];
const GIT_VERIFY_HEAD_ARGS: &[&str] = &["rev-parse", "--verify", "--quiet", "HEAD"];
const GIT_SYMBOLIC_HEAD_ARGS: &[&str] = &["symbolic-ref", "--quiet", "HEAD"];
const GIT_REMOTE_ARGS: &[&str] = &["remote"];
const GIT_VERIFY_REF_ARGS: &[&str] = &["rev-parse", "--verify", "--quiet"];
const GIT_CAT_COMMIT_ARGS: &[&str] = &["cat-file", "commit"];

const DETACHED_HEAD_REF: &str = "HEAD";

// Inherited variables that would point git at some other repository
const GIT_LOCATION_VARS: &[&str] = &[
    "GIT_DIR",
    "GIT_WORK_TREE",
    "GIT_INDEX_FILE",
    "GIT_COMMON_DIR",
    "GIT_OBJECT_DIRECTORY",
    "GIT_ALTERNATE_OBJECT_DIRECTORIES",
    "GIT_NAMESPACE",
];

/// Runs a git command in the specified directory with a timeout
/// Returns (success, stdout, stderr)
///
/// Git always discovers the repository from `path`: location variables
/// inherited from the caller (hooks, aliases) are cleared, and discovery is
/// fenced at the parent of `path` so a broken `.git` marker can never make git
/// pick up an enclosing repository instead.
pub async fn run_git(path: &Path, args: &[&str], timeout: Duration) -> Result<(bool, String, String)> {
    let mut command = Command::new("git");
    command
        .args(args)
        .current_dir(path)
        .env("GIT_OPTIONAL_LOCKS", "0")
        .kill_on_drop(true);
    for var in GIT_LOCATION_VARS {
        command.env_remove(var);
    }
    if let Some(parent) = path.parent() {
        command.env("GIT_CEILING_DIRECTORIES", parent);
    }

    trace!(path = %path.display(), ?args, "running git");
    let result = tokio::time::timeout(timeout, command.output()).await;

    match result {
        Ok(Ok(output)) => Ok((
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        )),
        Ok(Err(e)) => Err(e).context("failed to run git"),
        Err(_) => Err(anyhow::anyhow!(
            "Git operation timed out after {} seconds",
            timeout.as_secs()
        )),
    }
}

/// Repository backend that shells out to the `git` executable
#[derive(Clone, Debug)]
pub struct GitCli {
    timeout: Duration,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(Duration::from_secs(GIT_OPERATION_TIMEOUT_SECS))
    }
}

impl GitCli {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Runs git and turns a non-zero exit into an error carrying stderr
    async fn git_checked(&self, dir: &Path, args: &[&str]) -> Result<String> {
        match run_git(dir, args, self.timeout).await? {
            (true, stdout, _) => Ok(stdout),
            (false, _, stderr) if stderr.is_empty() => {
                bail!("git {} failed", args.join(" "))
            }
            (false, _, stderr) => bail!("git {} failed: {}", args.join(" "), stderr),
        }
    }
}

#[async_trait]
impl RepoBackend for GitCli {
    async fn open(&self, dir: &Path) -> Result<()> {
        self.git_checked(dir, GIT_OPEN_ARGS).await.map(|_| ())
    }

    async fn head(&self, dir: &Path) -> Result<HeadRef> {
        if let (false, _, _) = run_git(dir, GIT_VERIFY_HEAD_ARGS, self.timeout).await? {
            bail!("HEAD does not point to a commit");
        }

        let name = match run_git(dir, GIT_SYMBOLIC_HEAD_ARGS, self.timeout).await? {
            (true, name, _) if !name.is_empty() => name,
            _ => DETACHED_HEAD_REF.to_string(),
        };
        Ok(HeadRef { name })
    }

    async fn remotes(&self, dir: &Path) -> Result<Vec<String>> {
        let output = self.git_checked(dir, GIT_REMOTE_ARGS).await?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn resolve_reference(&self, dir: &Path, name: &str) -> Result<ObjectId> {
        let mut args = Vec::from(GIT_VERIFY_REF_ARGS);
        args.push(name);

        match run_git(dir, &args, self.timeout).await? {
            (true, hex, _) if !hex.is_empty() => Ok(ObjectId::new(hex)),
            _ => bail!("reference {name} not found"),
        }
    }

    async fn commit(&self, dir: &Path, id: &ObjectId) -> Result<CommitInfo> {
        let mut args = Vec::from(GIT_CAT_COMMIT_ARGS);
        args.push(id.as_str());

        let raw = self.git_checked(dir, &args).await?;
        let committed_at = parse_committer_time(&raw)
            .with_context(|| format!("commit {id} has no readable committer line"))?;
        Ok(CommitInfo {
            id: id.clone(),
            committed_at,
        })
    }
}

/// Extracts the committer timestamp from a raw commit object
///
/// The committer header ends with `<unix seconds> <+|-HHMM>`.
pub(crate) fn parse_committer_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    let line = raw
        .lines()
        .take_while(|line| !line.is_empty())
        .find_map(|line| line.strip_prefix("committer "))?;

    let mut fields = line.rsplitn(3, ' ');
    let offset = parse_offset(fields.next()?)?;
    let seconds: i64 = fields.next()?.parse().ok()?;
    DateTime::from_timestamp(seconds, 0).map(|utc| utc.with_timezone(&offset))
}

fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, digits) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW_COMMIT: &str = "tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n\
        parent 2c4e1f0b9d6a7c3e8f5a1b2c3d4e5f60718293a4\n\
        author Test User <test@example.com> 1700000000 +0000\n\
        committer Test User <test@example.com> 1700003600 +0200\n\
        \n\
        committer line lookalike in the message 1 +0000\n";

    #[test]
    fn test_parse_committer_time_uses_committer_not_author() {
        let parsed = parse_committer_time(RAW_COMMIT).expect("committer line should parse");
        assert_eq!(parsed.timestamp(), 1_700_003_600);
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_parse_committer_time_ignores_message_body() {
        let raw = "tree abc\nauthor A <a@b> 1 +0000\n\ncommitter X <x@y> 5 +0000\n";
        assert!(parse_committer_time(raw).is_none());
    }

    #[test]
    fn test_parse_committer_time_negative_offset() {
        let raw = "tree abc\ncommitter Some One <s@o> 1600000000 -0530\n";
        let parsed = parse_committer_time(raw).expect("should parse");
        assert_eq!(parsed.offset().local_minus_utc(), -(5 * 3600 + 30 * 60));
    }

    #[test]
    fn test_parse_offset_rejects_malformed() {
        assert!(parse_offset("0200").is_none());
        assert!(parse_offset("+02").is_none());
        assert!(parse_offset("+02a0").is_none());
        assert_eq!(
            parse_offset("+0000").map(|o| o.local_minus_utc()),
            Some(0)
        );
    }

    #[test]
    fn test_same_instant_in_different_zones_compares_equal() {
        let utc = parse_committer_time("committer A <a@b> 1700000000 +0000\n").unwrap();
        let cest = parse_committer_time("committer A <a@b> 1700000000 +0200\n").unwrap();
        assert_eq!(utc, cest);
    }
}
