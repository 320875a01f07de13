//! Integration tests for the ya4ms-asm CLI.

use assembler as _;
use clap as _;
use isa_core as _;
use proptest as _;
use rstest as _;
use thiserror as _;
use tracing as _;
use tracing_subscriber as _;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ya4ms-asm"))
}

fn create_temp_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn build_simple_program() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = create_temp_file(temp_dir.path(), "simple.asm", "TIA 5\nAO\nCAL ENDS\n");
    let output = temp_dir.path().join("simple.hex");

    let status = Command::new(binary_path())
        .args([
            "build",
            source.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .status()
        .expect("failed to run ya4ms-asm");

    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "851E7\n");
}

#[test]
fn build_with_default_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = create_temp_file(temp_dir.path(), "test.asm", "KA\n");

    let status = Command::new(binary_path())
        .args(["build", source.to_str().unwrap()])
        .current_dir(temp_dir.path())
        .status()
        .expect("failed to run ya4ms-asm");

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("test.hex")).unwrap(),
        "0\n"
    );
}

#[test]
fn build_json_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = create_temp_file(temp_dir.path(), "loop.asm", "L1: KA\nJUMP L1\n");

    let status = Command::new(binary_path())
        .args(["build", source.to_str().unwrap(), "--format", "json"])
        .status()
        .expect("failed to run ya4ms-asm");

    assert!(status.success());
    let written = fs::read_to_string(temp_dir.path().join("loop.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["codes"], serde_json::json!([0, 15, 0, 0]));
    assert_eq!(value["labels"]["L1"], 0);
}

#[test]
fn build_reports_errors_with_location() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = create_temp_file(temp_dir.path(), "bad.asm", "KA\n\n  FOO\n");

    let output = Command::new(binary_path())
        .args(["build", source.to_str().unwrap()])
        .output()
        .expect("failed to run ya4ms-asm");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.asm:3: error:"), "stderr: {stderr}");
    assert!(stderr.contains("token 1 `FOO`"));
    assert!(stderr.contains("undefined mnemonic"));
    assert!(!temp_dir.path().join("bad.hex").exists());
}

#[test]
fn build_verbose_prints_listing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = create_temp_file(temp_dir.path(), "verbose.asm", "top: TIA 3\nJUMP top\n");
    let output = temp_dir.path().join("verbose.hex");

    let result = Command::new(binary_path())
        .args([
            "build",
            source.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--verbose",
        ])
        .output()
        .expect("failed to run ya4ms-asm");

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("00: 83"));
    assert!(stderr.contains("JUMP top (@0)"));
    assert!(stderr.contains("top: 0"));
}

#[test]
fn check_reports_success() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = create_temp_file(temp_dir.path(), "ok.asm", "TIA F ; max\nCAL SHTS\n");

    let result = Command::new(binary_path())
        .args(["check", source.to_str().unwrap()])
        .output()
        .expect("failed to run ya4ms-asm");

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("ok (2 instructions, 4 units)"));
    assert!(!temp_dir.path().join("ok.hex").exists());
}

#[test]
fn check_reports_truncated_operand() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = create_temp_file(temp_dir.path(), "short.asm", "KA\nAIA\n");

    let result = Command::new(binary_path())
        .args(["check", source.to_str().unwrap()])
        .output()
        .expect("failed to run ya4ms-asm");

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("end of token stream reached"));
}

#[test]
fn missing_input_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("absent.asm");

    let result = Command::new(binary_path())
        .args(["build", missing.to_str().unwrap()])
        .output()
        .expect("failed to run ya4ms-asm");

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("failed to read"));
}

#[test]
fn help_shows_usage() {
    let result = Command::new(binary_path())
        .args(["--help"])
        .output()
        .expect("failed to run ya4ms-asm");

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("build"));
    assert!(stdout.contains("check"));
}

#[test]
fn unknown_command_fails() {
    let result = Command::new(binary_path())
        .args(["unknown"])
        .output()
        .expect("failed to run ya4ms-asm");

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("unrecognized subcommand"));
}
