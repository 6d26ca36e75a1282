//! Command-line arguments and usage validation.
//!
//! [`Args`] is the raw clap surface. [`Invocation::from_args`] applies the
//! cross-flag rules and yields something that can run without further checks.

use std::path::PathBuf;

use clap::Parser;
use sass_engine::{CompileOptions, OutputStyle};

/// Pointer appended to every usage error.
pub const HELP_HINT: &str = "See 'sassc -h'";

#[derive(Debug, Parser)]
#[command(
    name = "sassc",
    version,
    about = "Compile a Sass stylesheet to CSS",
    override_usage = "sassc [OPTION]... [FILE]"
)]
pub struct Args {
    /// Write output to specified file.
    #[arg(short = 'o', long = "output", value_name = "OUTFILE")]
    pub output: Option<PathBuf>,

    /// Output style. Can be: nested, expanded, compact, compressed.
    #[arg(
        short = 't',
        long = "style",
        value_name = "NAME",
        default_value_t = OutputStyle::Nested,
        value_parser = parse_style
    )]
    pub style: OutputStyle,

    /// Emit comments showing original line numbers.
    #[arg(short = 'l', long = "line-comments")]
    pub line_comments: bool,

    /// Set Sass import path.
    #[arg(short = 'I', long = "load-path", value_name = "PATH")]
    pub load_path: Option<String>,

    /// Write a make rule describing the import dependencies.
    #[arg(short = 'M', long = "make-rule", value_name = "DEPS_FILE")]
    pub make_rule: Option<PathBuf>,

    /// Input stylesheet. Omit or use `-` to read standard input.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

fn parse_style(name: &str) -> Result<OutputStyle, sass_engine::UnknownStyle> {
    name.parse()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Flag combinations rejected before anything is compiled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("Error: When using the -M option you must also specify an output file with -o")]
    MakeRuleWithoutOutput,
    #[error("Error: When using the -M option you must specify an input file")]
    MakeRuleWithStdin,
}

/// A validated request to compile one stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub options: CompileOptions,
    pub input: InputSource,
    pub output: Option<PathBuf>,
    /// Only ever set together with `output` and a file input.
    pub make_rule: Option<PathBuf>,
}

impl Invocation {
    pub fn from_args(args: Args) -> Result<Self, UsageError> {
        let input = match args.input {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        };

        if args.make_rule.is_some() {
            if args.output.is_none() {
                return Err(UsageError::MakeRuleWithoutOutput);
            }
            if input == InputSource::Stdin {
                return Err(UsageError::MakeRuleWithStdin);
            }
        }

        let options = CompileOptions {
            output_style: args.style,
            source_comments: args.line_comments,
            include_paths: args.load_path.unwrap_or_default(),
            ..CompileOptions::default()
        };

        Ok(Invocation {
            options,
            input,
            output: args.output,
            make_rule: args.make_rule,
        })
    }
}
