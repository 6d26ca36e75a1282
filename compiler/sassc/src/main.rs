//! sassc CLI
//!
//! Compiles one Sass stylesheet per run with the grass engine.

use std::process::ExitCode;

use clap::Parser;
use sass_engine::GrassEngine;
use sassc::args::HELP_HINT;
use sassc::{Args, Console, ExitStatus, Invocation};

fn main() -> ExitCode {
    sassc::init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version requests come through here too
            let _ = err.print();
            if !err.use_stderr() {
                return ExitStatus::Success.into();
            }
            eprintln!("{HELP_HINT}");
            return ExitStatus::Failure.into();
        }
    };

    let invocation = match Invocation::from_args(args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{HELP_HINT}");
            return ExitStatus::Failure.into();
        }
    };

    let mut console = Console::std();
    sassc::run(invocation, &GrassEngine::new(), std::io::stdin().lock(), &mut console).into()
}
