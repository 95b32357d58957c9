use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const KEY_VAR: &str = "FOCUSPATH_TEST_API_KEY";

/// A binary that reads its API key from `KEY_VAR` only, so the developer's
/// own environment never leaks into a test.
fn focuspath(config_dir: &Path) -> Command {
    let config = config_dir.join("config.toml");
    fs::write(
        &config,
        format!("[classifier]\napi_key_env = \"{}\"\ntimeout_secs = 5\n", KEY_VAR),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("focuspath").unwrap();
    cmd.env("FOCUSPATH_CONFIG", &config)
        .env_remove(KEY_VAR)
        .env_remove("FOCUSPATH_MODEL")
        .env_remove("FOCUSPATH_ENDPOINT")
        .env_remove("FOCUSPATH_DEBUG_LOG");
    cmd
}

fn parse_error(stderr: &[u8]) -> Value {
    let text = String::from_utf8_lossy(stderr);
    let line = text
        .lines()
        .find(|line| line.starts_with('{'))
        .expect("no JSON error on stderr");
    serde_json::from_str(line).expect("Failed to parse JSON output")
}

#[test]
fn test_version_includes_commit() {
    let dir = tempdir().unwrap();
    focuspath(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("("));
}

#[test]
fn test_completions() {
    let dir = tempdir().unwrap();
    focuspath(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focuspath"));
}

#[test]
fn test_blank_input_is_rejected() {
    let dir = tempdir().unwrap();
    let output = focuspath(dir.path())
        .arg("analyze")
        .write_stdin("   \n\t\n")
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();

    let json = parse_error(&output);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("empty"));
}

#[test]
fn test_missing_api_key_names_variable() {
    let dir = tempdir().unwrap();
    let output = focuspath(dir.path())
        .arg("analyze")
        .write_stdin("Finish report by Friday\nBuy milk\n")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    let json = parse_error(&output);
    assert!(json["error"].as_str().unwrap().contains(KEY_VAR));
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let output = focuspath(dir.path())
        .args(["analyze", missing.to_str().unwrap()])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    let json = parse_error(&output);
    assert!(json["error"].as_str().unwrap().contains("Failed to read"));
}

#[test]
fn test_unreachable_endpoint_reports_network_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dump.txt");
    fs::write(&input, "Finish report by Friday").unwrap();

    let output = focuspath(dir.path())
        .env(KEY_VAR, "test-key")
        .args([
            "--endpoint",
            "http://127.0.0.1:1",
            "analyze",
            input.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    let json = parse_error(&output);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("Network error"));
}

#[test]
fn test_invalid_filter_arguments() {
    let dir = tempdir().unwrap();
    focuspath(dir.path())
        .args(["analyze", "--min-urgency", "11"])
        .assert()
        .failure();

    focuspath(dir.path())
        .args(["analyze", "--quadrant", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown quadrant"));
}
