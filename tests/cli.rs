//! 起動時エラーの終了コードとメッセージ

use std::io::Write;
use std::process::{Command, Output};

fn availmon(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_availmon"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("failed to run availmon")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_argument_prints_usage() {
    let output = availmon(&[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage:"), "{}", stderr(&output));
    assert!(output.stdout.is_empty());
}

#[test]
fn unreadable_config_exits_non_zero() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("missing.yaml");

    let output = availmon(&[path.to_str().unwrap()]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("failed to read config file"), "{}", err);
    assert!(err.contains("missing.yaml"), "{}", err);
}

#[test]
fn malformed_config_exits_non_zero() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("failed to create temp file");
    file.write_all(b"url: http://a.test\nmethod: GET\n")
        .expect("failed to write temp file");

    let output = availmon(&[file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("failed to parse config file"), "{}", err);
    assert!(output.stdout.is_empty());
}
