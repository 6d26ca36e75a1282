use super::*;
use crate::input::CHUNK_SIZE;
use crate::testing::MockEngine;
use pretty_assertions::assert_eq;
use sass_engine::{CompileOutcome, CompileResult, DependencyList, SourceOrigin};
use std::io::{self, Cursor};
use tempfile::tempdir;

type BufferConsole = Console<Vec<u8>, Vec<u8>>;

fn console() -> BufferConsole {
    Console::new(Vec::new(), Vec::new())
}

fn streams(console: BufferConsole) -> (String, String) {
    let (out, err) = console.into_parts();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn three_deps() -> DependencyList {
    DependencyList::from_paths(["a.scss", "b.scss", "c.scss"])
}

struct BrokenStdin;

impl Read for BrokenStdin {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device gone"))
    }
}

#[test]
fn test_compile_file_to_stdout() {
    let engine = MockEngine::new(CompileResult::success("body{color:red}"));
    let mut console = console();

    let status = compile_file(
        &engine,
        CompileOptions::default(),
        Path::new("style.scss"),
        None,
        None,
        &mut console,
    );

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(streams(console), ("body{color:red}".to_string(), String::new()));
    let request = engine.last_request().unwrap();
    assert_eq!(request.origin, SourceOrigin::Path("style.scss".into()));
    assert_eq!(request.options, CompileOptions::default());
}

#[test]
fn test_compile_file_writes_make_rule() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.css");
    let deps = dir.path().join("out.d");
    let engine =
        MockEngine::new(CompileResult::success("a{b:c}").with_dependencies(three_deps()));
    let mut console = console();

    let status = compile_file(
        &engine,
        CompileOptions::default(),
        Path::new("a.scss"),
        Some(&out),
        Some(&deps),
        &mut console,
    );

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "a{b:c}");
    assert_eq!(
        std::fs::read_to_string(&deps).unwrap(),
        format!(
            "{} : a.scss b.scss c.scss\na.scss :\nb.scss :\nc.scss :\n",
            out.display()
        )
    );
    assert_eq!(streams(console), (String::new(), String::new()));
}

#[test]
fn test_compile_file_without_dependency_data_skips_make_rule() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.css");
    let deps = dir.path().join("out.d");

    for result in [
        CompileResult::success("a{}"),
        CompileResult::success("a{}").with_dependencies(DependencyList::default()),
    ] {
        let engine = MockEngine::new(result);
        let mut console = console();

        let status = compile_file(
            &engine,
            CompileOptions::default(),
            Path::new("a.scss"),
            Some(&out),
            Some(&deps),
            &mut console,
        );

        assert_eq!(status, ExitStatus::Success);
        assert!(!deps.exists());
        assert_eq!(streams(console).1, "");
    }
}

#[test]
fn test_compile_error_skips_make_rule() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.css");
    let deps = dir.path().join("out.d");
    let engine = MockEngine::new(
        CompileResult::error("line 3: unexpected token").with_dependencies(three_deps()),
    );
    let mut console = console();

    let status = compile_file(
        &engine,
        CompileOptions::default(),
        Path::new("a.scss"),
        Some(&out),
        Some(&deps),
        &mut console,
    );

    assert_eq!(status, ExitStatus::Failure);
    assert!(!out.exists());
    assert!(!deps.exists());
    assert_eq!(
        streams(console),
        (String::new(), "line 3: unexpected token".to_string())
    );
}

#[test]
fn test_make_rule_failure_overrides_status() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.css");
    let deps = dir.path().join("missing").join("out.d");
    let engine = MockEngine::new(CompileResult::success("a{}").with_dependencies(three_deps()));
    let mut console = console();

    let status = compile_file(
        &engine,
        CompileOptions::default(),
        Path::new("a.scss"),
        Some(&out),
        Some(&deps),
        &mut console,
    );

    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "a{}");
    assert!(streams(console)
        .1
        .starts_with("Error opening dependency file: "));
}

#[cfg(target_os = "linux")]
#[test]
fn test_make_rule_write_failure_overrides_status() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.css");
    let engine = MockEngine::new(CompileResult::success("a{}").with_dependencies(three_deps()));
    let mut console = console();

    let status = compile_file(
        &engine,
        CompileOptions::default(),
        Path::new("a.scss"),
        Some(&out),
        Some(Path::new("/dev/full")),
        &mut console,
    );

    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "a{}");
    let (stdout, stderr) = streams(console);
    assert_eq!(stdout, "");
    assert!(stderr.starts_with("Error writing to dependency file: "), "{stderr}");
}

#[test]
fn test_make_rule_without_output_fails_before_engine() {
    let engine = MockEngine::new(CompileResult::success("a{}").with_dependencies(three_deps()));
    let mut console = console();

    let status = compile_file(
        &engine,
        CompileOptions::default(),
        Path::new("a.scss"),
        None,
        Some(Path::new("out.d")),
        &mut console,
    );

    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(engine.calls(), 0);
    assert_eq!(
        streams(console).1,
        format!("{}\n{HELP_HINT}\n", UsageError::MakeRuleWithoutOutput)
    );
}

#[test]
fn test_compile_stdin_passes_bytes_through() {
    let source: Vec<u8> = (0..3 * CHUNK_SIZE + 5).map(|i| b'a' + (i % 26) as u8).collect();
    let engine = MockEngine::new(CompileResult::success("x{}"));
    let mut console = console();

    let status = compile_stdin(
        &engine,
        CompileOptions::default(),
        Cursor::new(source.clone()),
        None,
        &mut console,
    );

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(streams(console).0, "x{}");
    assert_eq!(engine.last_request().unwrap().origin, SourceOrigin::Text(source));
}

#[test]
fn test_compile_stdin_empty_input() {
    let engine = MockEngine::new(CompileResult::success(""));
    let mut console = console();

    let status = compile_stdin(
        &engine,
        CompileOptions::default(),
        io::empty(),
        None,
        &mut console,
    );

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(
        engine.last_request().unwrap().origin,
        SourceOrigin::Text(Vec::new())
    );
}

#[test]
fn test_compile_stdin_read_failure_is_fatal() {
    let engine = MockEngine::new(CompileResult::success("x{}"));
    let mut console = console();

    let status = compile_stdin(
        &engine,
        CompileOptions::default(),
        BrokenStdin,
        None,
        &mut console,
    );

    assert_eq!(status, ExitStatus::Internal);
    assert_eq!(engine.calls(), 0);
    let (out, err) = streams(console);
    assert_eq!(out, "");
    assert_eq!(err, "Error reading standard input: device gone\n");
}

#[test]
fn test_compile_stdin_unknown_result() {
    let engine = MockEngine::new(CompileResult {
        outcome: CompileOutcome::SuccessEmpty,
        dependencies: None,
    });
    let mut console = console();

    let status = compile_stdin(
        &engine,
        CompileOptions::default(),
        Cursor::new(b"a{}".to_vec()),
        None,
        &mut console,
    );

    assert_eq!(status, ExitStatus::Internal);
    assert_eq!(streams(console).1, crate::output::UNKNOWN_INTERNAL_ERROR);
}

#[test]
fn test_compile_stdin_to_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.css");
    let engine = MockEngine::new(CompileResult::success("y{}"));
    let mut console = console();

    let status = compile_stdin(
        &engine,
        CompileOptions::default(),
        Cursor::new(b"y{}".to_vec()),
        Some(&out),
        &mut console,
    );

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "y{}");
    assert_eq!(streams(console), (String::new(), String::new()));
}
