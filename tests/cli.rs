//! Integration tests for CLI commands

#![allow(deprecated)]

mod common;

use assert_cmd::{assert::OutputAssertExt, cargo::CommandCargoExt};
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// `senti` isolated from the user's config and environment
fn senti(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("senti").unwrap();
    cmd.env_remove("SENTI_BASE_URL")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_help_lists_commands() {
    let tmp = TempDir::new().unwrap();
    senti(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("health"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_analyze_help_shows_modes() {
    let tmp = TempDir::new().unwrap();
    senti(&tmp)
        .args(["analyze", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sentence"))
        .stdout(predicate::str::contains("paragraph"));
}

#[test]
fn test_analyze_blank_text_is_rejected() {
    let tmp = TempDir::new().unwrap();
    senti(&tmp)
        .args(["--base-url", "http://127.0.0.1:9", "analyze", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter some text."));
}

#[test]
fn test_analyze_blank_stdin_is_rejected() {
    let tmp = TempDir::new().unwrap();
    assert_cmd::Command::from_std(senti(&tmp))
        .args(["--base-url", "http://127.0.0.1:9", "analyze"])
        .write_stdin("\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter some text."));
}

#[test]
fn test_analyze_unreachable_service_fails() {
    let tmp = TempDir::new().unwrap();
    senti(&tmp)
        .args(["--base-url", "http://127.0.0.1:9", "analyze", "khup chan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_config_prints_effective_toml() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("config.toml"),
        "[ui]\ndefault_mode = \"sentence\"\n",
    )
    .unwrap();

    senti(&tmp)
        .args(["--base-url", "http://svc.local:9000", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url = \"http://svc.local:9000\""))
        .stdout(predicate::str::contains("default_mode = \"sentence\""));
}

#[test]
fn test_config_save_writes_file() {
    let tmp = TempDir::new().unwrap();
    senti(&tmp)
        .args(["--base-url", "http://saved:8000", "config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let written = std::fs::read_to_string(tmp.path().join("config.toml")).unwrap();
    assert!(written.contains("base_url = \"http://saved:8000\""));

    senti(&tmp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://saved:8000"));
}

#[test]
fn test_env_base_url_is_used() {
    let tmp = TempDir::new().unwrap();
    senti(&tmp)
        .env("SENTI_BASE_URL", "http://from-env:8000")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://from-env:8000"));
}

#[test]
fn test_invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.toml"), "[service\nbase_url = 1").unwrap();

    senti(&tmp)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_analyze_json_against_service() {
    let (url, mock) = common::spawn_mock().await;
    let tmp = TempDir::new().unwrap();

    let output = senti(&tmp)
        .args(["--base-url", &url, "analyze", "--format", "json", "chan.", "vait."])
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "paragraph");
    assert_eq!(report["label"], "Neutral");
    assert_eq!(report["bucket"], "neutral");
    assert_eq!(report["breakdown"][1]["raw"], "Negative [-1]");
    assert_eq!(mock.requests()[0].1["paragraph"], "chan. vait.");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_analyze_sentence_text_output() {
    let (url, _mock) = common::spawn_mock().await;
    let tmp = TempDir::new().unwrap();

    let output = senti(&tmp)
        .args(["--base-url", &url, "analyze", "--mode", "sentence", "Khup Chan!"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sentiment: Positive"));
    assert!(stdout.contains("Processed text: khup chan!"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_service_error_detail_is_printed() {
    let (url, _mock) = common::spawn_mock().await;
    let tmp = TempDir::new().unwrap();

    let output = senti(&tmp)
        .args(["--base-url", &url, "analyze", "boom"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Model not trained"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_health_against_service() {
    let (url, _mock) = common::spawn_mock().await;
    let tmp = TempDir::new().unwrap();

    senti(&tmp)
        .args(["--base-url", &url, "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trained"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_health_reports_unavailable_model() {
    let url = common::spawn_unavailable().await;
    let tmp = TempDir::new().unwrap();

    let output = senti(&tmp)
        .args(["--base-url", &url, "health"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sentiment model is unavailable"), "{}", stderr);
    assert!(stderr.contains("Sentiment analyzer not available"), "{}", stderr);
}
