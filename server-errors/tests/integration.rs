use asserting::prelude::*;
use std::{io::Write, path::Path, process::Command};
use tempfile::NamedTempFile;

const OK_LINE: &str = r#"127.0.0.1 - - [10/Oct/2023:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 2326 "-" "Mozilla/5.0""#;
const ERR_500: &str = r#"10.0.0.1 - - [10/Oct/2023:13:56:01 -0700] "POST /api/orders HTTP/1.1" 500 87 "https://shop.example.com/" "Mozilla/5.0""#;
const ERR_503: &str = r#"10.0.0.2 - - [10/Oct/2023:13:57:12 -0700] "GET /api/stock HTTP/1.1" 503 0 "-" "curl/8.4.0""#;

fn log_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp log");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write temp log");
    }
    file
}

fn run(path: &Path) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_server-errors"))
        .arg(path)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to start server-errors");
    (
        output.status.success(),
        String::from_utf8(output.stdout).expect("stdout is UTF-8"),
    )
}

#[test]
fn reports_no_errors() {
    let file = log_file(&[OK_LINE]);
    let (ok, stdout) = run(file.path());

    assert_that!(ok).is_true();
    assert_that!(stdout).is_equal_to(
        "\n=== Server Error (5xx) Summary ===\nNo 5xx errors found.\n".to_string(),
    );
}

#[test]
fn reports_single_error() {
    let file = log_file(&[OK_LINE, ERR_500]);
    let (ok, stdout) = run(file.path());

    assert_that!(ok).is_true();
    let expected = "\n=== Server Error (5xx) Summary ===\n\
        \nError Code Distribution:\n\
        HTTP 500: 1 occurrences\n\
        \nDetailed Error Entries:\n\
        \nTimestamp: 10/Oct/2023:13:56:01 -0700\n\
        Status: 500\n\
        IP: 10.0.0.1\n\
        Request: POST /api/orders HTTP/1.1\n\
        \nTotal 5xx errors found: 1\n";
    assert_that!(stdout).is_equal_to(expected.to_string());
}

#[test]
fn sorts_distribution_but_keeps_file_order() {
    let file = log_file(&[ERR_503, ERR_500]);
    let (ok, stdout) = run(file.path());

    assert_that!(ok).is_true();
    let http_500 = stdout.find("HTTP 500: 1 occurrences").unwrap();
    let http_503 = stdout.find("HTTP 503: 1 occurrences").unwrap();
    assert!(http_500 < http_503);

    let status_503 = stdout.find("Status: 503").unwrap();
    let status_500 = stdout.find("Status: 500").unwrap();
    assert!(status_503 < status_500);
    assert!(stdout.ends_with("\nTotal 5xx errors found: 2\n"));
}

#[test]
fn missing_file_prints_message_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.log");
    let (ok, stdout) = run(&path);

    assert_that!(ok).is_false();
    assert_that!(stdout).is_equal_to(format!("Error: File '{}' not found.\n", path.display()));
    assert!(!stdout.contains("Summary"));
}

#[test]
fn unreadable_path_prints_message_only() {
    let dir = tempfile::tempdir().unwrap();
    let (ok, stdout) = run(dir.path());

    assert_that!(ok).is_false();
    assert!(stdout.starts_with("Error: Failed to read '"), "{stdout}");
    assert!(!stdout.contains("Summary"));
}

#[test]
fn malformed_line_does_not_stop_processing() {
    let truncated =
        r#"10.0.0.9 - - [10/Oct/2023:13:58:00 -0700] "GET /broken HTTP/1.1" 500 0 "-""#;
    let file = log_file(&[truncated, "garbage", "", ERR_503]);
    let (ok, stdout) = run(file.path());

    assert_that!(ok).is_true();
    assert!(!stdout.contains("10.0.0.9"));
    assert!(stdout.contains("HTTP 503: 1 occurrences"));
    assert!(stdout.ends_with("\nTotal 5xx errors found: 1\n"));
}

#[test]
fn requires_log_path() {
    let output = Command::new(env!("CARGO_BIN_EXE_server-errors"))
        .output()
        .expect("Failed to start server-errors");
    assert_that!(output.status.success()).is_false();
}
