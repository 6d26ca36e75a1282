//! Process exit statuses.

use std::process::ExitCode;

/// How a single invocation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Output (and make rule, if requested) written.
    Success,
    /// Compile error, usage error, or an I/O failure writing results.
    Failure,
    /// The engine produced nothing, or standard input could not be read.
    Internal,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Internal => 2,
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
