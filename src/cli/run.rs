use std::path::Path;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{extract, init::init},
    exit_status::ExitStatus,
};

/// Dispatch a parsed command line to its handler.
///
/// # Returns
/// - `Ok(ExitStatus)` describing how the command finished
/// - `Err` if the command failed (unreadable file, bad config, ...)
pub fn run(Arguments { command, verbose }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Messages(args)) => extract::messages(args, verbose),
        Some(Command::Settings(args)) => extract::settings(args, verbose),
        Some(Command::Init) => init(Path::new(".")),
        None => {
            print!("{}", Arguments::usage_for(&[]));
            Ok(ExitStatus::Failure)
        }
    }
}
