//! Identmoji CLI - stable emoji identifier for this machine

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use identmoji_cli::{report, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    let stdout = std::io::stdout();
    match identmoji_cli::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

/// `--help` and `--version` exit 0; anything else prints usage and exits 1.
fn parse_failure(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => {
            eprintln!("\n{}", Cli::command().render_help());
            ExitCode::FAILURE
        }
    }
}
