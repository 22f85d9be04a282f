//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Tree walking and per-directory results
//! - Scan configuration
//! - Report rendering and summary statistics
//! - Logging setup
//!
//! Internal implementation details are not exposed through this API.

// Scanning
pub use super::walker::{decide, resolve_root, scan, scan_with_progress, subtree_has_repo, Visit};
pub use super::result::{ScanResult, ScanStatus};
pub use super::error::ScanError;

// Configuration
pub use super::config::ScanConfig;
pub use super::config::{GIT_OPERATION_TIMEOUT_SECS, PRUNED_DIRECTORIES, REPO_MARKER};

// User-facing messages
pub use super::config::{NO_RESULTS_MESSAGE, SCANNING_MESSAGE};

// Presentation
pub use super::report::{render_line, status_color};
pub use super::stats::ScanSummary;

// Logging
pub use super::logging::init_logging;

// Terminal utilities (re-exported from utils)
pub use crate::utils::{set_terminal_title, set_terminal_title_and_flush};

// Internal helpers for command modules
pub(crate) use super::progress::{create_scan_spinner, update_scan_spinner};
