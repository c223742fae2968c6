//! Integration tests for the onde CLI surface.
//!
//! These tests verify that the binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("onde").expect("Failed to find onde binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("onde").expect("Failed to find onde binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("onde"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("onde").expect("Failed to find onde binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Resolve path aliases from a YAML directory tree",
        ));
}

/// Test that an unknown subcommand fails with a clap error.
#[test]
fn test_cli_unknown_subcommand() {
    let mut cmd = Command::cargo_bin("onde").expect("Failed to find onde binary");

    cmd.arg("frobnicate");

    cmd.assert().failure();
}
