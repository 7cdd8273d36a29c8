//! Tests for `keepsake confirm` and `keepsake status`.

use crate::support::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_status_before_first_confirmation() {
    let t = Test::init();
    let json = stdout_json(&t.status_json());
    assert_eq!(json["status"], "needs-first-confirmation");
    assert_eq!(json["signal"], "prompt-owner");
    assert_eq!(json["access"], "owner");
    assert!(json["lastConfirmedAt"].is_null());
}

#[test]
fn test_confirm_then_alive() {
    let t = Test::init();
    let output = t.confirm();
    assert_success(&output);
    assert_stdout_contains(&output, "life confirmed");

    let json = stdout_json(&t.status_json());
    assert_eq!(json["status"], "alive");
    assert_eq!(json["signal"], "quiet");
    assert!(json["lastConfirmedAt"].is_string());
    assert_eq!(json["intervalDays"], 7);
}

#[test]
fn test_status_needs_no_passphrase() {
    let t = Test::init();
    t.cmd()
        .env_remove("KEEPSAKE_PASSPHRASE")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keepsake Status"));
}

#[test]
fn test_confirm_requires_passphrase() {
    let t = Test::init();
    let output = t
        .cmd_with_passphrase("wrong")
        .arg("confirm")
        .output()
        .unwrap();
    assert_failure(&output);
    assert!(!t.data_file("lastLifeConfirmation").exists());
}

#[test]
fn test_overdue_and_unreachable_from_stored_timestamp() {
    let t = Test::init();
    let stamp = |days: i64| (chrono::Utc::now() - chrono::Duration::days(days)).to_rfc3339();

    fs::write(t.data_file("lastLifeConfirmation"), stamp(10)).unwrap();
    let json = stdout_json(&t.status_json());
    assert_eq!(json["status"], "overdue");
    assert_eq!(json["signal"], "prompt-owner");

    fs::write(t.data_file("lastLifeConfirmation"), stamp(31)).unwrap();
    let json = stdout_json(&t.status_json());
    assert_eq!(json["status"], "presumed-unreachable");
    assert_eq!(json["access"], "beneficiary-release");
    assert_eq!(json["signal"], "release-to-beneficiaries");

    assert_success(&t.confirm());
    let json = stdout_json(&t.status_json());
    assert_eq!(json["status"], "alive");
}

#[test]
fn test_garbage_timestamp_degrades_to_first_confirmation() {
    let t = Test::init();
    fs::write(t.data_file("lastLifeConfirmation"), "last tuesday").unwrap();
    let json = stdout_json(&t.status_json());
    assert_eq!(json["status"], "needs-first-confirmation");
}

#[test]
fn test_status_reports_progress() {
    let t = Test::with_entries("passwords", &[("A", "1")]);
    t.add("wishes", "B", "2");

    let json = stdout_json(&t.status_json());
    assert_eq!(json["progress"]["done"], 2);
    assert_eq!(json["progress"]["total"], 5);
    assert_eq!(json["progress"]["percent"], 40);
}
