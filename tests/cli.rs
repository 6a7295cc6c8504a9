//! End-to-end tests for the `wealth` binary

mod common;

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use common::{affirmations_json, candidate_reply, serve_once};

const UNSET_KEY_ENV: &str = "WEALTH_ARCHITECT_TEST_KEY_NEVER_SET";

fn wealth(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wealth").unwrap();
    cmd.env("WEALTH_ARCHITECT_DATA_DIR", dir)
        .env_remove("WEALTH_LOG")
        .env_remove(UNSET_KEY_ENV)
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy");
    cmd
}

fn write_settings(dir: &Path, settings: serde_json::Value) {
    fs::write(dir.join("config.json"), settings.to_string()).unwrap();
}

#[test]
fn test_project_json_matches_closed_form() {
    let dir = TempDir::new().unwrap();
    let output = wealth(dir.path())
        .args(["project", "16,800,000,000", "--years", "10", "--rate", "10", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let points = value["points"].as_array().unwrap();
    assert_eq!(points.len(), 11);
    assert_eq!(points[0]["total"], 16_800_000_000.0);

    let expected = 16_800_000_000.0 * 1.1f64.powi(10);
    let last = points[10]["total"].as_f64().unwrap();
    assert!((last - expected).abs() < 1.0);
    assert_eq!(value["schema_version"], "1.0.0");
}

#[test]
fn test_project_zero_rate_is_flat() {
    let dir = TempDir::new().unwrap();
    wealth(dir.path())
        .args(["project", "1000000", "-y", "5", "-r", "0", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5,1000000.0,0.0,1000000.0"));
}

#[test]
fn test_project_table_shows_summary() {
    let dir = TempDir::new().unwrap();
    wealth(dir.path())
        .args(["project", "16800000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tài sản dự kiến sau 10 năm"))
        .stdout(predicate::str::contains("Gấp 2.59 lần vốn gốc"));
}

#[test]
fn test_project_rejects_years_out_of_range() {
    let dir = TempDir::new().unwrap();
    wealth(dir.path())
        .args(["project", "1000", "--years", "0"])
        .assert()
        .failure();
    wealth(dir.path())
        .args(["project", "1000", "--years", "101"])
        .assert()
        .failure();
}

#[test]
fn test_project_rejects_amount_without_digits() {
    let dir = TempDir::new().unwrap();
    wealth(dir.path())
        .args(["project", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_project_save_writes_export() {
    let dir = TempDir::new().unwrap();
    wealth(dir.path())
        .args(["project", "1000", "--format", "csv", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote projection to"));

    let exports: Vec<_> = fs::read_dir(dir.path().join("exports")).unwrap().collect();
    assert_eq!(exports.len(), 1);
}

#[test]
fn test_affirm_without_key_prints_error_message() {
    let dir = TempDir::new().unwrap();
    write_settings(dir.path(), serde_json::json!({ "api_key_env": UNSET_KEY_ENV }));

    wealth(dir.path())
        .args(["affirm", "16,800,000,000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Có lỗi xảy ra khi kết nối với vũ trụ AI. Vui lòng thử lại.",
        ));
}

#[test]
fn test_affirm_rejects_zero_amount() {
    let dir = TempDir::new().unwrap();
    wealth(dir.path())
        .args(["affirm", "000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn test_affirm_json_against_local_server() {
    let dir = TempDir::new().unwrap();
    let (base_url, server) = serve_once(200, &candidate_reply(&affirmations_json(3)));
    write_settings(
        dir.path(),
        serde_json::json!({ "api_base_url": base_url, "api_key_env": "WEALTH_TEST_KEY" }),
    );

    let output = wealth(dir.path())
        .env("WEALTH_TEST_KEY", "local-key")
        .args(["affirm", "16800000000", "--format", "json"])
        .output()
        .unwrap();
    server.join().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["amount"], "16,800,000,000");
    assert_eq!(value["affirmations"].as_array().unwrap().len(), 3);
}

#[test]
fn test_plan_keeps_projection_when_affirmations_fail() {
    let dir = TempDir::new().unwrap();
    write_settings(dir.path(), serde_json::json!({ "api_key_env": UNSET_KEY_ENV }));

    wealth(dir.path())
        .args(["plan", "1000000", "--years", "3"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Tài sản dự kiến sau 3 năm"))
        .stderr(predicate::str::contains("vũ trụ AI"));
}

#[test]
fn test_init_writes_settings_and_logs() {
    let dir = TempDir::new().unwrap();
    wealth(dir.path()).arg("init").assert().success();

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("logs").is_dir());

    wealth(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini-2.5-flash"));
}

#[test]
fn test_init_keeps_existing_settings() {
    let dir = TempDir::new().unwrap();
    write_settings(dir.path(), serde_json::json!({ "default_years": 25 }));

    wealth(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    let saved = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(saved.contains("25"));
    assert!(!saved.contains("gemini"));
}
