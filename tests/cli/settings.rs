//! Tests for `keepsake settings`.

use crate::support::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_settings_defaults() {
    let t = Test::init();
    t.cmd()
        .env_remove("KEEPSAKE_PASSPHRASE")
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("biometrics  off"))
        .stdout(predicate::str::contains("weekly  on"));
}

#[test]
fn test_settings_update_persists_camel_case() {
    let t = Test::init();
    t.cmd()
        .args(["settings", "--biometrics", "on", "--weekly", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings saved"));

    let raw = fs::read(t.data_file("securitySettings")).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(json["biometricsEnabled"], true);
    assert_eq!(json["pushNotificationsEnabled"], false);
    assert_eq!(json["weeklyConfirmationEnabled"], false);
}

#[test]
fn test_weekly_off_silences_prompt() {
    let t = Test::init();
    t.cmd()
        .args(["settings", "--weekly", "off"])
        .assert()
        .success();

    let json = stdout_json(&t.status_json());
    assert_eq!(json["status"], "needs-first-confirmation");
    assert_eq!(json["signal"], "quiet");
}

#[test]
fn test_settings_change_requires_passphrase() {
    let t = Test::init();
    let output = t
        .cmd_with_passphrase("wrong")
        .args(["settings", "--push", "on"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert!(!t.data_file("securitySettings").exists());
}
