//! Command handlers for the sassc CLI.
//!
//! [`run`] picks the compilation path for a validated [`Invocation`]; the
//! paths themselves live in `compile`.

use std::io::{Read, Write};

use sass_engine::Engine;

use crate::{Console, ExitStatus, InputSource, Invocation};

mod compile;

pub use compile::{compile_file, compile_stdin};

/// Run one validated invocation to completion.
///
/// `stdin` is only read when the invocation asks for standard input.
pub fn run<R: Read, O: Write, E: Write>(
    invocation: Invocation,
    engine: &impl Engine,
    stdin: R,
    console: &mut Console<O, E>,
) -> ExitStatus {
    let Invocation {
        options,
        input,
        output,
        make_rule,
    } = invocation;

    match input {
        InputSource::File(path) => compile_file(
            engine,
            options,
            &path,
            output.as_deref(),
            make_rule.as_deref(),
            console,
        ),
        InputSource::Stdin => compile_stdin(engine, options, stdin, output.as_deref(), console),
    }
}
