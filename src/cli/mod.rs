//! Command-line interface: argument parsing, dispatch, and reporting.

use std::ffi::OsString;

use anyhow::Result;
use clap::{Parser, error::ErrorKind};
use colored::Colorize;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, MessagesArgs, SettingsArgs};
pub use exit_status::ExitStatus;
pub use report::{print_collision_to, print_result_to};

/// Parse the raw command line.
///
/// `--help` and `--version` print and yield `Err(ExitStatus::Success)`. Any
/// other parse failure (wrong argument count, unknown command) prints the
/// usage description to stdout and yields `Err(ExitStatus::Failure)`.
pub fn parse_args<I, T>(raw: I) -> std::result::Result<Arguments, ExitStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();

    match Arguments::try_parse_from(&raw) {
        Ok(args) => Ok(args),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            Err(ExitStatus::Success)
        }
        Err(err) => {
            if let Some(reason) = err.kind().as_str() {
                eprintln!("{} {}", "error:".bold().red(), reason);
            }
            let raw: Vec<String> = raw
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect();
            print!("{}", Arguments::usage_for(&raw));
            Err(ExitStatus::Failure)
        }
    }
}

/// Run a parsed command line and report the outcome.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
