//! The two compilation paths: from a file, and from standard input.

use std::io::{Read, Write};
use std::path::Path;

use sass_engine::{CompileOptions, CompileRequest, Engine};
use tracing::debug;

use crate::args::HELP_HINT;
use crate::input::accumulate;
use crate::make_rule;
use crate::output::dispatch;
use crate::{Console, ExitStatus, UsageError};

/// Compile the stylesheet at `input_path`.
///
/// When `deps_file` is given and output succeeded, also writes a make rule
/// with `out_file` as its target. A result without dependency data makes
/// that step a no-op. The make-rule status replaces the dispatch status.
pub fn compile_file<O: Write, E: Write>(
    engine: &impl Engine,
    options: CompileOptions,
    input_path: &Path,
    out_file: Option<&Path>,
    deps_file: Option<&Path>,
    console: &mut Console<O, E>,
) -> ExitStatus {
    let make_rule_target = match (deps_file, out_file) {
        (Some(deps_file), Some(out_file)) => Some((deps_file, out_file)),
        (Some(_), None) => {
            console.error_line(UsageError::MakeRuleWithoutOutput);
            console.error_line(HELP_HINT);
            return ExitStatus::Failure;
        }
        (None, _) => None,
    };

    debug!(path = %input_path.display(), "compiling file");
    let request = CompileRequest::from_path(input_path, options);
    let result = engine.compile(&request);

    let status = dispatch(&result.outcome, out_file, console);
    if !status.is_success() {
        return status;
    }

    let (Some((deps_file, target)), Some(dependencies)) = (make_rule_target, &result.dependencies)
    else {
        return status;
    };

    match make_rule::emit(dependencies, target, deps_file) {
        Ok(()) => ExitStatus::Success,
        Err(err) => {
            console.error_line(err);
            ExitStatus::Failure
        }
    }
}

/// Compile a stylesheet read in full from `stdin`.
///
/// A failure while reading is fatal: it is reported and `Internal` returned
/// without involving the engine. No make rule is ever written on this path.
pub fn compile_stdin<R: Read, O: Write, E: Write>(
    engine: &impl Engine,
    options: CompileOptions,
    stdin: R,
    out_file: Option<&Path>,
    console: &mut Console<O, E>,
) -> ExitStatus {
    let source = match accumulate(stdin) {
        Ok(source) => source,
        Err(err) => {
            console.error_line(err);
            return ExitStatus::Internal;
        }
    };

    debug!(bytes = source.len(), "compiling standard input");
    let request = CompileRequest::from_text(source, options);
    let result = engine.compile(&request);

    dispatch(&result.outcome, out_file, console)
}

#[cfg(test)]
mod tests;
