//! # repo-scanner
//!
//! `repo-scanner` walks a directory tree, finds every git working copy and
//! reports whether each one is in sync with its `origin` remote. It powers the
//! `repo-scanner` CLI tool.
//!
//! ## Core Features
//!
//! - **Tree Walk**: Depth-first scan that reports repositories and empty top-level directories.
//! - **Status Classification**: Synced, not synced, no remote, no commits or error per repository.
//! - **Read-only**: Never fetches, pulls, pushes or writes repository config.
//!
//! ## Example
//!
//! ```rust,no_run
//! use repo_scanner::core::{scan, ScanConfig};
//! use repo_scanner::git::{GitCli, Inspector};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let results = scan(&ScanConfig::new("."), &Inspector::new(GitCli::default())).await?;
//!     for result in results {
//!         println!("{result}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod core;
pub mod git;
pub mod utils;
