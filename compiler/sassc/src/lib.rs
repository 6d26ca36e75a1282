//! sassc - command-line driver for Sass compilation
//!
//! Reads a stylesheet from a file or standard input, hands it to a
//! [`sass_engine::Engine`], and routes the result to the right place.
//!
//! # Architecture
//!
//! ```text
//! Invocation (args)
//!     │
//!     ├── file ──────────────────────► Engine ──► dispatch ──► make_rule::emit
//!     │                                  ▲           │
//!     └── stdin ──► input::accumulate ───┘           ▼
//!                                              stdout | OUTFILE | stderr
//! ```
//!
//! Every path returns an [`ExitStatus`]; nothing in the library exits the
//! process.
//!
//! # Debugging
//!
//! - `RUST_LOG=sassc=debug`: stage-level tracing on stderr.
//! - `RUST_LOG=sassc=trace,sass_engine=debug`: per-chunk input reads and
//!   engine option mapping.

use std::sync::Once;

pub mod args;
pub mod commands;
pub mod console;
pub mod exit;
pub mod input;
pub mod make_rule;
pub mod output;
pub mod testing;

pub use args::{Args, InputSource, Invocation, UsageError};
pub use commands::{compile_file, compile_stdin, run};
pub use console::Console;
pub use exit::ExitStatus;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is set,
/// and events always go to stderr so they never mix with compiled output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
