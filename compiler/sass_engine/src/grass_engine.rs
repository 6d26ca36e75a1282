//! The production engine, backed by the `grass` Sass compiler.
//!
//! grass has two output styles. `compressed` maps onto its compressed style and
//! every other style onto expanded. Line-number comments and the image path
//! have no grass equivalent; they are accepted and ignored.
//!
//! Import tracking works by routing every file read through [`RecordingFs`].
//! The order of first reads is the dependency order, main file first.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    CompileOptions, CompileOutcome, CompileRequest, CompileResult, DependencyList, Engine,
    OutputStyle, SourceOrigin,
};

/// Engine that compiles SCSS with `grass`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrassEngine;

impl GrassEngine {
    pub fn new() -> Self {
        GrassEngine
    }

    fn compile_path(path: &Path, options: &CompileOptions) -> CompileResult {
        let fs = RecordingFs::default();
        let outcome = {
            let grass_options = grass_options(options).fs(&fs);
            match grass::from_path(path, &grass_options) {
                Ok(css) => CompileOutcome::Success(css),
                Err(err) => CompileOutcome::Error(Some(error_text(&err.to_string()))),
            }
        };
        let dependencies = fs.into_dependencies();
        debug!(
            path = %path.display(),
            dependencies = dependencies.entries().filter(|e| !e.is_empty()).count(),
            "compiled file"
        );
        CompileResult {
            outcome,
            dependencies: Some(dependencies),
        }
    }

    fn compile_text(text: &[u8], options: &CompileOptions) -> CompileResult {
        let source = match std::str::from_utf8(text) {
            Ok(source) => source,
            Err(err) => {
                return CompileResult::error(format!("Error: stdin: invalid UTF-8 ({err})\n"));
            }
        };
        let outcome = match grass::from_string(source, &grass_options(options)) {
            Ok(css) => CompileOutcome::Success(css),
            Err(err) => CompileOutcome::Error(Some(error_text(&err.to_string()))),
        };
        debug!(bytes = text.len(), "compiled in-memory source");
        CompileResult {
            outcome,
            dependencies: None,
        }
    }
}

impl Engine for GrassEngine {
    fn compile(&self, request: &CompileRequest) -> CompileResult {
        match &request.origin {
            SourceOrigin::Path(path) => Self::compile_path(path, &request.options),
            SourceOrigin::Text(text) => Self::compile_text(text, &request.options),
        }
    }
}

/// Translate driver options into grass options.
fn grass_options<'a>(options: &CompileOptions) -> grass::Options<'a> {
    let style = match options.output_style {
        OutputStyle::Compressed => grass::OutputStyle::Compressed,
        OutputStyle::Nested | OutputStyle::Expanded | OutputStyle::Compact => {
            grass::OutputStyle::Expanded
        }
    };
    if options.source_comments {
        warn!("line-number comments are not supported by the grass engine; ignoring");
    }
    debug!(image_path = %options.image_path, style = %options.output_style, "engine options");

    std::env::split_paths(&options.include_paths)
        .filter(|path| !path.as_os_str().is_empty())
        .fold(grass::Options::default().style(style), |opts, path| {
            opts.load_path(path)
        })
}

/// grass messages carry no trailing newline; the error stream expects one.
fn error_text(message: &str) -> String {
    if message.ends_with('\n') {
        message.to_string()
    } else {
        format!("{message}\n")
    }
}

/// Filesystem that remembers every file grass reads.
#[derive(Debug, Default)]
struct RecordingFs {
    reads: RefCell<Vec<PathBuf>>,
}

impl RecordingFs {
    fn into_dependencies(self) -> DependencyList {
        let reads = self.reads.into_inner();
        DependencyList::from_paths(reads.iter().map(|path| path.to_string_lossy()))
    }
}

impl grass::Fs for RecordingFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let bytes = std::fs::read(path)?;
        let mut reads = self.reads.borrow_mut();
        if !reads.iter().any(|seen| seen == path) {
            reads.push(path.to_path_buf());
        }
        Ok(bytes)
    }
}
