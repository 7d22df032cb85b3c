//! Integration tests for the cssscope binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Helper to run the binary with `args`, feeding `stdin` to it
fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cssscope"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start cssscope");
    // The binary may exit before reading stdin, e.g. on bad options.
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes());
    child.wait_with_output().expect("failed to wait for cssscope")
}

/// Helper to get a fresh path in the system temp directory
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cssscope-cli-{}-{name}", std::process::id()))
}

#[test]
fn test_stdin_to_stdout() {
    let output = run(&["--classname=class", "-", "-"], "table{}");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), ".class table{}");
}

#[test]
fn test_parse_errors_name_stdin() {
    let output = run(&["--classname", "c", "-", "-"], "a,");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "/*<parse-error> at <stdin>:1:2*/"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("<stdin>:1:2"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let output = run(&["--classname", "c", "--quiet", "-", "-"], "a,");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_nest_restricts_at_rules() {
    let output = run(
        &["--classname", "c", "--nest", "MEDIA", "-", "-"],
        "@media x { a {} } @layer y { a {} }",
    );
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "@media x { .c a {} } @layer y { a {} }"
    );
}

#[test]
fn test_files_and_report() {
    let input = temp_path("in.css");
    let output_path = temp_path("out.css");
    let report_path = temp_path("report.json");
    std::fs::write(&input, "a{}\nb").expect("failed to write input");

    let output = run(
        &[
            "--classname",
            "c",
            "--source-name",
            "in.css",
            "--report",
            report_path.to_str().expect("temp path is UTF-8"),
            input.to_str().expect("temp path is UTF-8"),
            output_path.to_str().expect("temp path is UTF-8"),
        ],
        "",
    );
    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(&output_path).expect("output written"),
        ".c a{}\n/*<parse-error> at in.css:2:1*/"
    );

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("report written"))
            .expect("report is JSON");
    assert_eq!(report[0]["line"], 2);
    assert_eq!(report[0]["source_name"], "in.css");

    for path in [input, output_path, report_path] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn test_empty_classname_fails() {
    let output = run(&["--classname", "", "-", "-"], "a{}");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("class name must not be empty"));
}

#[test]
fn test_unknown_encoding_fails() {
    let output = run(&["--classname", "c", "--encoding", "klingon", "-", "-"], "a{}");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("klingon"));
}

#[test]
fn test_missing_input_file_fails() {
    let missing = temp_path("missing.css");
    let output = run(
        &["--classname", "c", missing.to_str().expect("temp path is UTF-8"), "-"],
        "",
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}
