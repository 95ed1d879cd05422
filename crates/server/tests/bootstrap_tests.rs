//! Integration tests for the `rmfake-server` bootstrap binary.
//!
//! Responsibilities:
//! - Verify exit codes for successful and failed configuration setup.
//! - Verify operator-facing warnings and the `LOGLEVEL` filter.
//!
//! Invariants:
//! - All tests use the hermetic `server_cmd()` helper, which clears the environment.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Returns a `rmfake-server` command with an empty environment and `DATADIR` set.
fn server_cmd(data_dir: &std::path::Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rmfake-server");
    cmd.env_clear();
    cmd.env("DATADIR", data_dir);
    cmd
}

#[test]
fn test_defaults_succeed_and_warn_about_ephemeral_secret() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("rmfake");

    server_cmd(&data_dir).assert().code(0).stderr(
        predicate::str::contains("You have to set JWT_SECRET_KEY with some content")
            .and(predicate::str::contains("becomes invalid after this program restarts"))
            .and(predicate::str::contains("runtime configuration loaded"))
            .and(predicate::str::contains(":3000")),
    );

    assert!(data_dir.join("trash").is_dir());
}

#[test]
fn test_pinned_secret_suppresses_warning() {
    let temp_dir = TempDir::new().unwrap();

    server_cmd(temp_dir.path())
        .env("JWT_SECRET_KEY", "00ff00ff")
        .env("STORAGE_URL", "https://rm.example.com")
        .assert()
        .code(0)
        .stderr(
            predicate::str::contains("You have to set")
                .not()
                .and(predicate::str::contains("https://rm.example.com")),
        );
}

#[test]
fn test_unwritable_data_dir_exits_with_setup_failure() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();

    server_cmd(&blocker)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to build configuration"))
        .stderr(predicate::str::contains("trash"));
}

#[test]
fn test_loglevel_error_hides_warnings() {
    let temp_dir = TempDir::new().unwrap();

    server_cmd(temp_dir.path())
        .env("LOGLEVEL", "error")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("You have to set").not());
}

#[test]
fn test_unknown_loglevel_falls_back_to_info() {
    let temp_dir = TempDir::new().unwrap();

    server_cmd(temp_dir.path())
        .env("LOGLEVEL", "chatty")
        .assert()
        .code(0)
        .stderr(
            predicate::str::contains("unknown LOGLEVEL value")
                .and(predicate::str::contains("runtime configuration loaded")),
        );
}

#[test]
fn test_collaborator_settings_are_reported_without_secrets() {
    let temp_dir = TempDir::new().unwrap();

    server_cmd(temp_dir.path())
        .env("JWT_SECRET_KEY", "0102")
        .env("RM_SMTP_SERVER", "smtp.example.com:587")
        .env("RM_SMTP_PASSWORD", "hunter2")
        .assert()
        .code(0)
        .stderr(
            predicate::str::contains("smtp_configured=true")
                .and(predicate::str::contains("hwr_configured=false"))
                .and(predicate::str::contains("hunter2").not()),
        );
}
