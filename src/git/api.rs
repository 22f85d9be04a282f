//! Public API for git inspection.
//!
//! This module provides the stable public API for repository inspection:
//! - Status classification of a single repository
//! - The read-only backend trait and its `git` CLI implementation
//!
//! ## Example: Classifying one repository
//!
//! ```rust,no_run
//! use repo_scanner::git::{GitCli, Inspector};
//! use std::path::Path;
//!
//! async fn check(path: &Path) {
//!     let inspector = Inspector::new(GitCli::default());
//!     println!("{}", inspector.classify(path).await);
//! }
//! ```

// Inspection
pub use super::inspect::{InspectError, Inspector};

// Status
pub use super::status::RepoStatus;

// Backend
pub use super::backend::{remote_reference_name, CommitInfo, HeadRef, ObjectId, RepoBackend};
pub use super::operations::{run_git, GitCli};
