//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal UI starts are exercised.

use std::process::Command;

fn chipgrid_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_chipgrid"))
}

#[test]
fn test_help_lists_options() {
    let output = chipgrid_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--seed"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_version_matches_package() {
    let output = chipgrid_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_bad_seed_is_rejected() {
    let output = chipgrid_cmd()
        .args(["--seed", "not-a-number"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--seed"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let output = chipgrid_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"));
}
