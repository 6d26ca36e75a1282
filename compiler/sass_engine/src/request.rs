//! Requests into the engine and the results coming back out.

use std::path::PathBuf;

use crate::CompileOptions;

/// Separator between entries of a path list, as in `PATH`.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';
/// Separator between entries of a path list, as in `PATH`.
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

/// Where the stylesheet source comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceOrigin {
    /// A file on disk. Imports are resolved relative to it and tracked.
    Path(PathBuf),
    /// Source already held in memory, byte for byte as it was read.
    Text(Vec<u8>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileRequest {
    pub origin: SourceOrigin,
    pub options: CompileOptions,
}

impl CompileRequest {
    pub fn from_path(path: impl Into<PathBuf>, options: CompileOptions) -> Self {
        CompileRequest {
            origin: SourceOrigin::Path(path.into()),
            options,
        }
    }

    pub fn from_text(text: Vec<u8>, options: CompileOptions) -> Self {
        CompileRequest {
            origin: SourceOrigin::Text(text),
            options,
        }
    }
}

/// What the engine made of a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileOutcome {
    /// Compilation failed. The engine may not have a message to offer.
    Error(Option<String>),
    /// Compilation succeeded with output text.
    Success(String),
    /// The engine reported success but produced no output buffer.
    SuccessEmpty,
}

/// Files read while compiling a path-origin request, joined by
/// [`PATH_LIST_SEPARATOR`].
///
/// Never mutated once produced; consumers transform a copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencyList(String);

impl DependencyList {
    pub fn new(joined: impl Into<String>) -> Self {
        DependencyList(joined.into())
    }

    /// Join individual paths with [`PATH_LIST_SEPARATOR`].
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for (i, path) in paths.into_iter().enumerate() {
            if i > 0 {
                joined.push(PATH_LIST_SEPARATOR);
            }
            joined.push_str(path.as_ref());
        }
        DependencyList(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The individual entries, in order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_LIST_SEPARATOR)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileResult {
    pub outcome: CompileOutcome,
    /// Only ever present for [`SourceOrigin::Path`] requests.
    pub dependencies: Option<DependencyList>,
}

impl CompileResult {
    pub fn success(output: impl Into<String>) -> Self {
        CompileResult {
            outcome: CompileOutcome::Success(output.into()),
            dependencies: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        CompileResult {
            outcome: CompileOutcome::Error(Some(message.into())),
            dependencies: None,
        }
    }

    #[must_use]
    pub fn with_dependencies(mut self, dependencies: DependencyList) -> Self {
        self.dependencies = Some(dependencies);
        self
    }
}
