use std::process::ExitCode;

use crate::core::RunResult;

/// How a `tagdb` invocation ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every output database was written (exit 0).
    Success,
    /// Bad command line or a name collision; nothing was written (exit 1).
    Failure,
    /// Unreadable source, unwritable output, or a bad config file (exit 2).
    Error,
}

impl From<&RunResult> for ExitStatus {
    fn from(result: &RunResult) -> Self {
        if result.is_success() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        let code: u8 = match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        };
        ExitCode::from(code)
    }
}
