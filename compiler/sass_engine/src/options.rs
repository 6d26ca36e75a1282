//! Compile options passed through the driver to the engine.

use std::fmt;
use std::str::FromStr;

/// Output formatting style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputStyle {
    #[default]
    Nested,
    Expanded,
    Compact,
    Compressed,
}

impl OutputStyle {
    /// Every style, in the order they are listed to the user.
    pub const ALL: [OutputStyle; 4] = [
        OutputStyle::Nested,
        OutputStyle::Expanded,
        OutputStyle::Compact,
        OutputStyle::Compressed,
    ];

    /// The name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            OutputStyle::Nested => "nested",
            OutputStyle::Expanded => "expanded",
            OutputStyle::Compact => "compact",
            OutputStyle::Compressed => "compressed",
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A style name that is not one of [`OutputStyle::ALL`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid output style '{name}'. Allowed styles are: nested, expanded, compact, compressed")]
pub struct UnknownStyle {
    pub name: String,
}

impl FromStr for OutputStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| UnknownStyle {
                name: s.to_string(),
            })
    }
}

/// Options handed to the engine unmodified.
///
/// The driver fills these from the command line and never reads them again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    pub output_style: OutputStyle,
    /// Emit comments pointing back at original source lines.
    pub source_comments: bool,
    /// Import search paths, joined by [`crate::PATH_LIST_SEPARATOR`].
    pub include_paths: String,
    pub image_path: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            output_style: OutputStyle::Nested,
            source_comments: false,
            include_paths: String::new(),
            image_path: "images".to_string(),
        }
    }
}
