//! Standard output and error sinks.
//!
//! Generic over its writers so every dispatch path can run against in-memory
//! buffers in tests.

use std::io::{self, Stderr, Stdout, Write};

pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    /// Console bound to the process streams.
    pub fn std() -> Self {
        Console::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Console { out, err }
    }

    /// Write compiled output verbatim and flush it.
    pub fn write_out(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Write a diagnostic verbatim.
    ///
    /// Failures are ignored: there is nowhere left to report them.
    pub fn error(&mut self, text: &str) {
        let _ = self.err.write_all(text.as_bytes());
        let _ = self.err.flush();
    }

    /// Write a diagnostic followed by a newline.
    pub fn error_line(&mut self, message: impl std::fmt::Display) {
        self.error(&format!("{message}\n"));
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
