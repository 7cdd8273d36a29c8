//! Error reporting tests.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_commands_before_init_suggest_init() {
    let t = Test::new();
    for args in [
        vec!["list", "passwords"],
        vec!["status"],
        vec!["confirm"],
        vec!["rm", "wishes", "0"],
    ] {
        let output = t.cmd().args(&args).output().unwrap();
        assert_failure(&output);
        assert_stderr_contains(&output, "not initialized");
        assert_stderr_contains(&output, "keepsake init");
    }
}

#[test]
fn test_unknown_section_rejected() {
    let t = Test::init();
    t.cmd()
        .args(["list", "diary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown section"));
}

#[test]
fn test_wrong_passphrase_hint() {
    let t = Test::with_entries("passwords", &[("A", "1")]);
    let output = t
        .cmd_with_passphrase("nope")
        .args(["list", "passwords"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid passphrase");
    assert_stdout_excludes(&output, "A");
}

#[test]
fn test_corrupt_config_reports_parse_error() {
    let t = Test::init();
    std::fs::write(t.home.path().join("config.toml"), "[keepsake\n").unwrap();
    t.cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn test_completions() {
    Test::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keepsake"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::init();
    t.cmd()
        .args(["--verbose", "status"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}
