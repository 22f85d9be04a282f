//! Repository inspection: maps repository state to a [`RepoStatus`]

use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::backend::{remote_reference_name, ObjectId, RepoBackend};
use super::operations::GitCli;
use super::status::RepoStatus;
use crate::core::config::{TRACKED_BRANCHES, TRACKED_REMOTE};

/// Why a repository did not come out as synced or not synced
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("cannot open repository: {0:#}")]
    Open(anyhow::Error),

    #[error("no commits: {0:#}")]
    NoHead(anyhow::Error),

    #[error("no remote configured")]
    NoRemote,

    #[error("cannot resolve {name}: {cause:#}")]
    RefResolution { name: String, cause: anyhow::Error },

    #[error("cannot read commit {id}: {cause:#}")]
    CommitLookup { id: String, cause: anyhow::Error },
}

impl InspectError {
    /// The status label this failure is reported under
    pub fn status(&self) -> RepoStatus {
        match self {
            InspectError::NoHead(_) => RepoStatus::NoCommits,
            InspectError::NoRemote => RepoStatus::NoRemote,
            InspectError::Open(_)
            | InspectError::RefResolution { .. }
            | InspectError::CommitLookup { .. } => RepoStatus::Error,
        }
    }
}

/// Classifies repository roots using a read-only backend
#[derive(Clone, Debug, Default)]
pub struct Inspector<B = GitCli> {
    backend: B,
}

impl<B: RepoBackend> Inspector<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Classifies the repository rooted at `dir`
    ///
    /// Never fails: every failure collapses into its status label and the
    /// cause is logged at debug level.
    pub async fn classify(&self, dir: &Path) -> RepoStatus {
        match self.inspect(dir).await {
            Ok(status) => status,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "repository not comparable");
                e.status()
            }
        }
    }

    /// Compares local HEAD against the remote tracking branch
    ///
    /// Only [`RepoStatus::Synced`] and [`RepoStatus::NotSynced`] are returned
    /// as `Ok`; every other outcome is an [`InspectError`].
    pub async fn inspect(&self, dir: &Path) -> Result<RepoStatus, InspectError> {
        self.backend.open(dir).await.map_err(InspectError::Open)?;

        let head = self.backend.head(dir).await.map_err(InspectError::NoHead)?;

        match self.backend.remotes(dir).await {
            Ok(remotes) if !remotes.is_empty() => {}
            _ => return Err(InspectError::NoRemote),
        }

        let local_id = self
            .backend
            .resolve_reference(dir, &head.name)
            .await
            .map_err(|cause| InspectError::RefResolution {
                name: head.name.clone(),
                cause,
            })?;

        let remote_id = self.resolve_tracked_branch(dir).await?;

        let local = self
            .backend
            .commit(dir, &local_id)
            .await
            .map_err(|cause| InspectError::CommitLookup {
                id: local_id.to_string(),
                cause,
            })?;
        let remote = self
            .backend
            .commit(dir, &remote_id)
            .await
            .map_err(|cause| InspectError::CommitLookup {
                id: remote_id.to_string(),
                cause,
            })?;

        // Ahead and behind collapse into the same label
        if local.committed_at == remote.committed_at {
            Ok(RepoStatus::Synced)
        } else {
            debug!(
                path = %dir.display(),
                local = %local.id,
                local_time = %local.committed_at,
                remote = %remote.id,
                remote_time = %remote.committed_at,
                "committer times differ"
            );
            Ok(RepoStatus::NotSynced)
        }
    }

    /// Resolves the first tracked branch that exists on the tracked remote
    async fn resolve_tracked_branch(
        &self,
        dir: &Path,
    ) -> Result<ObjectId, InspectError> {
        let mut last = None;
        for branch in TRACKED_BRANCHES {
            let name = remote_reference_name(TRACKED_REMOTE, branch);
            match self.backend.resolve_reference(dir, &name).await {
                Ok(id) => return Ok(id),
                Err(cause) => last = Some(InspectError::RefResolution { name, cause }),
            }
        }

        Err(last.unwrap_or_else(|| InspectError::RefResolution {
            name: TRACKED_REMOTE.to_string(),
            cause: anyhow::anyhow!("no tracked branches configured"),
        }))
    }
}
