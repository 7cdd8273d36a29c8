//! Tests for `keepsake init`.

use crate::support::*;
use std::fs;

#[test]
fn test_init_creates_config_and_vault() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "initialized");

    let config = fs::read_to_string(t.home.path().join("config.toml")).unwrap();
    assert!(config.contains("[keepsake]"));
    assert!(config.contains("kdf_iterations = 1000"));

    let meta: serde_json::Value =
        serde_json::from_slice(&fs::read(t.data_file("vaultMeta")).unwrap()).unwrap();
    assert_eq!(meta["iterations"], ITERATIONS);
    assert!(!meta["check"].as_str().unwrap().contains(PASSPHRASE));
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init();

    let output = t.init_cmd();
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_custom_schedule() {
    let t = Test::new();
    t.cmd()
        .args([
            "init",
            "--iterations",
            "1000",
            "--interval-days",
            "14",
            "--hard-cutoff-days",
            "60",
        ])
        .assert()
        .success();

    let config = fs::read_to_string(t.home.path().join("config.toml")).unwrap();
    assert!(config.contains("interval_days = 14"));
    assert!(config.contains("hard_cutoff_days = 60"));
}

#[test]
fn test_init_rejects_cutoff_before_interval() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["init", "--interval-days", "10", "--hard-cutoff-days", "5"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "hard_cutoff_days");
    assert!(!t.home.path().join("config.toml").exists());
}

#[test]
fn test_init_rejects_empty_passphrase() {
    let t = Test::new();
    let output = t
        .cmd_with_passphrase("")
        .args(["init", "--iterations", "1000"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "passphrase cannot be empty");
    assert!(!t.home.path().join("config.toml").exists());
}

#[test]
fn test_init_rejects_unbounded_cutoff() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["init", "--iterations", "1000", "--hard-cutoff-days", "4000000000"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "must be at most 36500");
    assert!(!t.home.path().join("config.toml").exists());
}

#[test]
fn test_longest_schedule_status_and_confirm() {
    let t = Test::new();
    t.cmd()
        .args(["init", "--iterations", "1000", "--hard-cutoff-days", "36500"])
        .assert()
        .success();

    let output = t.confirm();
    assert_success(&output);
    assert_stdout_contains(&output, "next due");

    let json = stdout_json(&t.status_json());
    assert_eq!(json["status"], "alive");
    assert_eq!(json["hardCutoffDays"], 36500);
    assert!(json["unreachableAt"].is_string());
}
