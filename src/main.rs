//! repo-scanner: report the sync status of every git repository under a path
//! This tool walks a directory tree and prints one line per repository (and per empty top-level directory).

use clap::{Arg, ArgAction, Command as ClapCommand};
use std::io::IsTerminal;
use std::process::ExitCode;

use repo_scanner::commands::scan::{handle_scan_command, ScanOptions};
use repo_scanner::core::{init_logging, ScanConfig, GIT_OPERATION_TIMEOUT_SECS};

fn build_cli() -> ClapCommand {
    ClapCommand::new("repo-scanner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool to recurse through directories and output the status of any git repos")
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .default_value(".")
                .help("Directory to start the search from"),
        )
        .arg(
            Arg::new("prune")
                .long("prune")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Extra directory name never descended into (node_modules is always pruned)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64))
                .help("Timeout for each git invocation [default: 180]"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print per-status counts after the report")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log why repositories are reported as errors (-vv for git tracing)")
                .action(ArgAction::Count),
        )
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    init_logging(matches.get_count("verbose"));

    let path = matches
        .get_one::<String>("path")
        .cloned()
        .unwrap_or_else(|| ".".to_string());
    let pruned: Vec<String> = matches
        .get_many::<String>("prune")
        .map(|names| names.cloned().collect())
        .unwrap_or_default();
    let timeout = matches
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(GIT_OPERATION_TIMEOUT_SECS);

    let color = !matches.get_flag("no-color")
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    let options = ScanOptions {
        config: ScanConfig::new(path)
            .with_pruned(pruned)
            .with_git_timeout(timeout),
        color,
        summary: matches.get_flag("summary"),
        progress: std::io::stderr().is_terminal(),
    };

    match handle_scan_command(&options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
