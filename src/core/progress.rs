//! Scan spinner management

use anyhow::Result;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use super::config::{SCANNING_MESSAGE, SPINNER_TEMPLATE, SPINNER_TICK_MILLIS};
use crate::utils::shorten_path;

const SPINNER_PATH_WIDTH: usize = 60;

/// Creates the spinner shown on stderr while the tree is walked
///
/// Hidden automatically when stderr is not a terminal.
pub fn create_scan_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    spinner.set_style(ProgressStyle::default_spinner().template(SPINNER_TEMPLATE)?);
    spinner.set_message(SCANNING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MILLIS));
    Ok(spinner)
}

/// Shows the directory currently being visited
pub fn update_scan_spinner(spinner: &ProgressBar, dir: &Path) {
    let display = dir.display().to_string();
    spinner.set_message(format!(
        "{SCANNING_MESSAGE} {}",
        shorten_path(&display, SPINNER_PATH_WIDTH)
    ));
}
