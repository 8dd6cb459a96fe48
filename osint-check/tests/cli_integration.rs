// osint-check/tests/cli_integration.rs
//
// End-to-end CLI tests. Everything here runs offline: phone lookups use
// bundled numbering-plan data, and the social tests only exercise argument
// and username validation, which fails before any request is issued.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a config file inside a fresh temp directory.
fn create_config_file(content: &str) -> (TempDir, String) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("test-config.toml");
    fs::write(&config_path, content).expect("Failed to write config file");
    let path_str = config_path.to_str().unwrap().to_string();
    (temp_dir, path_str)
}

#[test]
fn test_help_shows_subcommands() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("phone"))
        .stdout(predicate::str::contains("social"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_phone_help_shows_flags() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["phone", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--region"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--pretty"));
}

#[test]
fn test_social_help_shows_flags() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["social", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--delay"));
}

#[test]
fn test_no_subcommand_fails() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.assert().failure();
}

#[test]
fn test_phone_valid_number_json() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["phone", "+14155552671", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"raw\": \"+14155552671\""))
        .stdout(predicate::str::contains("\"e164\": \"+14155552671\""))
        .stdout(predicate::str::contains("\"valid\": true"))
        .stdout(predicate::str::contains("\"region\": \"US\""));
}

#[test]
fn test_phone_valid_number_text() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["phone", "+14155552671"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("E164: +14155552671"))
        .stdout(predicate::str::contains("Valid: true"))
        .stdout(predicate::str::contains("Region: US"));
}

#[test]
fn test_phone_region_flag_parses_national_format() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["phone", "020 7183 8750", "--region", "GB", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"e164\": \"+442071838750\""))
        .stdout(predicate::str::contains("\"region\": \"GB\""));
}

#[test]
fn test_phone_unparseable_number_fails() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["phone", "not-a-number"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid phone number"));
}

#[test]
fn test_phone_unknown_region_hint_fails() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["phone", "555-0100", "--region", "XQ"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_config_file_region_honored() {
    let (_temp_dir, config_path) = create_config_file(
        r#"
[defaults]
region = "GB"
"#,
    );

    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["--config", &config_path, "phone", "020 7183 8750", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"e164\": \"+442071838750\""));
}

#[test]
fn test_cli_region_overrides_config_file() {
    let (_temp_dir, config_path) = create_config_file(
        r#"
[defaults]
region = "GB"
"#,
    );

    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args([
        "--config",
        &config_path,
        "phone",
        "+14155552671",
        "--region",
        "US",
        "--json",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"region\": \"US\""));
}

#[test]
fn test_invalid_config_file_rejected() {
    let (_temp_dir, config_path) = create_config_file(
        r#"
[defaults]
timeout = -5.0
"#,
    );

    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["--config", &config_path, "phone", "+14155552671"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config file"));
}

#[test]
fn test_missing_config_file_rejected() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args([
        "--config",
        "/nonexistent/osint-check.toml",
        "phone",
        "+14155552671",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config file"));
}

#[test]
fn test_social_invalid_username_fails_before_probing() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["social", "bad user!"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username"));
}

#[test]
fn test_social_zero_timeout_rejected() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["social", "octocat", "--timeout", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Timeout must be a positive number"));
}

#[test]
fn test_social_oversized_timeout_rejected() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["social", "octocat", "--timeout", "1e20"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Timeout exceeds the supported range"));
}

#[test]
fn test_social_negative_delay_rejected() {
    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args(["social", "octocat", "--delay=-1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Delay must be zero or a positive"));
}

#[test]
fn test_verbose_reports_explicit_config() {
    let (_temp_dir, config_path) = create_config_file(
        r#"
[defaults]
region = "US"
"#,
    );

    let mut cmd = Command::cargo_bin("osint-check").unwrap();
    cmd.args([
        "--config",
        &config_path,
        "--verbose",
        "phone",
        "+14155552671",
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Using explicit config file"));
}
