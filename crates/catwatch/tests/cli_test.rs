//! Integration tests for the `catwatch` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live controller.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `catwatch` binary with env isolation.
///
/// Clears all `CATWATCH_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn catwatch_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("catwatch");
    cmd.env("HOME", "/tmp/catwatch-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/catwatch-cli-test-nonexistent")
        .env_remove("CATWATCH_PROFILE")
        .env_remove("CATWATCH_CONTROLLER")
        .env_remove("CATWATCH_USERNAME")
        .env_remove("CATWATCH_PASSWORD")
        .env_remove("CATWATCH_OUTPUT")
        .env_remove("CATWATCH_INSECURE")
        .env_remove("CATWATCH_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = catwatch_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    catwatch_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Catalyst Center")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("interfaces"))
            .and(predicate::str::contains("report")),
    );
}

#[test]
fn test_version_flag() {
    catwatch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("catwatch"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    catwatch_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    catwatch_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    catwatch_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = catwatch_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_devices_list_no_controller() {
    catwatch_cmd()
        .args(["devices", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("controller"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_report_no_controller() {
    catwatch_cmd().arg("report").assert().failure().stderr(
        predicate::str::contains("config")
            .or(predicate::str::contains("Configuration"))
            .or(predicate::str::contains("controller"))
            .or(predicate::str::contains("profile")),
    );
}

#[test]
fn test_controller_flag_without_credentials() {
    // A controller URL alone is not enough: the failure must name the
    // missing credentials, not argument parsing.
    catwatch_cmd()
        .args(["--controller", "https://dnac.example.com", "devices", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("credentials").or(predicate::str::contains("Credentials")));
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    catwatch_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_invalid_output_format() {
    let output = catwatch_cmd()
        .args(["--output", "invalid", "devices", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values") || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly — the failure should be about
    // missing controller config, not about argument parsing.
    catwatch_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "devices",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("controller"))
                .or(predicate::str::contains("profile")),
        );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_devices_subcommands_exist() {
    catwatch_cmd()
        .args(["devices", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_interfaces_subcommands_exist() {
    catwatch_cmd()
        .args(["interfaces", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("errors"))
                .and(predicate::str::contains("stats")),
        );
}

#[test]
fn test_report_flags_exist() {
    catwatch_cmd()
        .args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--top").and(predicate::str::contains("--no-chart")));
}

#[test]
fn test_config_subcommands_exist() {
    catwatch_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-password")),
        );
}
