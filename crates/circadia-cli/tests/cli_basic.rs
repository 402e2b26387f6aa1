//! Basic CLI E2E tests.
//!
//! Tests invoke the CLI via cargo run and verify the help surface. Commands
//! that touch the record store are covered by unit tests instead, to avoid
//! writing into the developer's real configuration directory.

use std::process::Command;

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "circadia-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0, "--help failed");
    assert!(stdout.contains("energy forecasts"));
    assert!(stdout.contains("profile"));
    assert!(stdout.contains("recommend"));
}

#[test]
fn test_profile_help() {
    let (stdout, _, code) = run_cli(&["profile", "--help"]);
    assert_eq!(code, 0, "profile --help failed");
    assert!(stdout.contains("set"));
    assert!(stdout.contains("show"));
}

#[test]
fn test_cycle_help() {
    let (stdout, _, code) = run_cli(&["cycle", "--help"]);
    assert_eq!(code, 0, "cycle --help failed");
    assert!(stdout.contains("clear"));
}

#[test]
fn test_energy_help() {
    let (stdout, _, code) = run_cli(&["energy", "--help"]);
    assert_eq!(code, 0, "energy --help failed");
    assert!(stdout.contains("forecast"));
}

#[test]
fn test_profile_set_requires_arguments() {
    let (_, stderr, code) = run_cli(&["profile", "set"]);
    assert_ne!(code, 0, "profile set without args unexpectedly succeeded");
    assert!(stderr.contains("--chronotype") || stderr.contains("--wake"));
}

#[test]
fn test_invalid_chronotype_rejected() {
    let (_, stderr, code) = run_cli(&["profile", "set", "--chronotype", "lark"]);
    assert_ne!(code, 0, "invalid chronotype unexpectedly accepted");
    assert!(stderr.contains("lark"));
}
