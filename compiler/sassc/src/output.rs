//! Result dispatch.
//!
//! Turns a [`CompileOutcome`] into exactly one write (output sink or error
//! stream) and an [`ExitStatus`]:
//!
//! | Outcome                  | Written to            | Status   |
//! |--------------------------|-----------------------|----------|
//! | `Error(Some(msg))`       | stderr, verbatim      | Failure  |
//! | `Error(None)`            | stderr, generic note  | Failure  |
//! | `Success(css)`           | OUTFILE or stdout     | Success  |
//! | `Success` + write fails  | stderr, OS error      | Failure  |
//! | `SuccessEmpty`           | stderr, generic note  | Internal |

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use sass_engine::CompileOutcome;
use tracing::debug;

use crate::{Console, ExitStatus};

pub const NO_ERROR_MESSAGE: &str = "An error occured; no error message available.\n";
pub const UNKNOWN_INTERNAL_ERROR: &str = "Unknown internal error.\n";

/// Where compiled output goes. Resolved once per dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputSink<'a> {
    Stdout,
    File(&'a Path),
}

impl<'a> From<Option<&'a Path>> for OutputSink<'a> {
    fn from(out_file: Option<&'a Path>) -> Self {
        out_file.map_or(OutputSink::Stdout, OutputSink::File)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Error opening output file: {0}")]
    Open(#[source] io::Error),
    #[error("Error writing to output file: {0}")]
    Write(#[source] io::Error),
    #[error("Error writing to standard output: {0}")]
    Stdout(#[source] io::Error),
}

/// Write `text` to `sink`. A file sink is truncated first and closed on return.
pub fn write_output<O: Write, E: Write>(
    text: &str,
    sink: OutputSink<'_>,
    console: &mut Console<O, E>,
) -> Result<(), WriteError> {
    match sink {
        OutputSink::Stdout => console.write_out(text).map_err(WriteError::Stdout),
        OutputSink::File(path) => {
            let mut file = File::create(path).map_err(WriteError::Open)?;
            file.write_all(text.as_bytes()).map_err(WriteError::Write)?;
            debug!(path = %path.display(), bytes = text.len(), "output written");
            Ok(())
        }
    }
}

/// Route a compile outcome to its sink and compute the exit status.
pub fn dispatch<O: Write, E: Write>(
    outcome: &CompileOutcome,
    out_file: Option<&Path>,
    console: &mut Console<O, E>,
) -> ExitStatus {
    match outcome {
        CompileOutcome::Error(Some(message)) => {
            console.error(message);
            ExitStatus::Failure
        }
        CompileOutcome::Error(None) => {
            console.error(NO_ERROR_MESSAGE);
            ExitStatus::Failure
        }
        CompileOutcome::Success(css) => match write_output(css, out_file.into(), console) {
            Ok(()) => ExitStatus::Success,
            Err(err) => {
                console.error_line(err);
                ExitStatus::Failure
            }
        },
        CompileOutcome::SuccessEmpty => {
            console.error(UNKNOWN_INTERNAL_ERROR);
            ExitStatus::Internal
        }
    }
}
