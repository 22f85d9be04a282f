//! Report rendering: status to color lookup and line formatting

use colored::{Color, Colorize};

use super::result::{ScanResult, ScanStatus};
use crate::git::RepoStatus;

const PATH_COLOR: Color = Color::Blue;

/// Color for a status label
pub fn status_color(status: &ScanStatus) -> Color {
    match status {
        ScanStatus::Repo(RepoStatus::Synced) => Color::Green,
        ScanStatus::Repo(RepoStatus::Error) => Color::Red,
        ScanStatus::Repo(RepoStatus::NotSynced | RepoStatus::NoRemote | RepoStatus::NoCommits)
        | ScanStatus::NoRepo => Color::Yellow,
    }
}

/// Renders `<path>: <label>`, colored when `color` is set
pub fn render_line(result: &ScanResult, color: bool) -> String {
    if !color {
        return result.to_string();
    }

    let path = result.path.display().to_string();
    format!(
        "{}: {}",
        path.color(PATH_COLOR),
        result.status.text().color(status_color(&result.status))
    )
}
