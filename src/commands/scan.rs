//! Repository scan command implementation
//!
//! This module drives one scan pass - walking the tree, classifying each
//! repository and printing the report once the walk has finished.

use anyhow::Result;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::core::{
    create_scan_spinner, render_line, scan_with_progress, set_terminal_title,
    set_terminal_title_and_flush, update_scan_spinner, ScanConfig, ScanResult, ScanSummary,
    NO_RESULTS_MESSAGE,
};
use crate::git::{GitCli, Inspector};

/// Options for the scan command
#[derive(Clone, Debug)]
pub struct ScanOptions {
    pub config: ScanConfig,
    /// Colorize paths and status labels
    pub color: bool,
    /// Print per-status counts after the report
    pub summary: bool,
    /// Show a spinner on stderr during the walk
    pub progress: bool,
}

/// Handles the scan command
///
/// The report is printed only after the whole walk succeeded; a traversal
/// error returns before anything reaches stdout.
pub async fn handle_scan_command(options: &ScanOptions) -> Result<()> {
    // Set terminal title to indicate repo-scanner is running
    set_terminal_title("🔍 repo-scanner");

    let start_time = Instant::now();
    let inspector = Inspector::new(GitCli::new(options.config.git_timeout));

    let spinner = if options.progress {
        Some(create_scan_spinner()?)
    } else {
        None
    };

    let outcome = scan_with_progress(&options.config, &inspector, |dir| {
        if let Some(spinner) = &spinner {
            update_scan_spinner(spinner, dir);
        }
    })
    .await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    // Set terminal title to green checkbox to indicate completion
    set_terminal_title_and_flush("✅ repo-scanner");

    let results = outcome?;
    if results.is_empty() {
        eprintln!("{NO_RESULTS_MESSAGE}");
    }

    let summary_duration = options.summary.then(|| start_time.elapsed());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &results, options.color, summary_duration)?;
    out.flush()?;

    Ok(())
}

/// Writes one line per result, then the summary footer when a duration is given
pub fn write_report<W: Write>(
    out: &mut W,
    results: &[ScanResult],
    color: bool,
    summary_duration: Option<Duration>,
) -> Result<()> {
    for result in results {
        writeln!(out, "{}", render_line(result, color))?;
    }

    if let Some(duration) = summary_duration {
        let summary = ScanSummary::from_results(results);
        writeln!(out)?;
        writeln!(out, "{}", summary.generate_summary(duration))?;
    }

    Ok(())
}
