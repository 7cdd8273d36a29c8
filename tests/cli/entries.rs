//! Tests for `keepsake add`, `list` and `rm`.

use crate::support::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_add_and_list() {
    let t = Test::init();
    assert_roundtrip(&t, "passwords", "Email", "hunter2");
}

#[test]
fn test_add_list_remove_scenario() {
    let t = Test::with_entries("passwords", &[("A", "secret1"), ("B", "secret2")]);

    let json = stdout_json(&t.list_json("passwords"));
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["title"], "A");
    assert_eq!(entries[0]["content"], "secret1");
    assert_eq!(entries[1]["title"], "B");
    assert_eq!(entries[1]["content"], "secret2");

    assert_success(&t.rm("passwords", 0));

    let json = stdout_json(&t.list_json("passwords"));
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "B");
    assert_eq!(entries[0]["content"], "secret2");
    assert_eq!(entries[0]["index"], 0);
}

#[test]
fn test_content_is_encrypted_on_disk() {
    let t = Test::with_entries("confessions", &[("Cake", "I ate the last slice")]);

    let raw = fs::read_to_string(t.data_file("entries_confessions")).unwrap();
    assert!(raw.contains("Cake"));
    assert!(raw.contains("\\\"encrypted\\\""));
    assert!(!raw.contains("I ate the last slice"));
}

#[test]
fn test_add_reads_piped_content() {
    let t = Test::init();
    t.cmd()
        .args(["add", "wishes", "Music"])
        .write_stdin("Play it loud\n")
        .assert()
        .success();

    let json = stdout_json(&t.list_json("wishes"));
    assert_eq!(json["entries"][0]["content"], "Play it loud");
}

#[test]
fn test_add_wrong_passphrase_fails() {
    let t = Test::init();
    let output = t
        .cmd_with_passphrase("not it")
        .args(["add", "passwords", "A", "--content", "x"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid passphrase");
    assert!(!t.data_file("entries_passwords").exists());
}

#[test]
fn test_add_empty_content_fails() {
    let t = Test::init();
    let output = t.add("passwords", "A", "");
    assert_failure(&output);
    assert_stderr_contains(&output, "content cannot be empty");
}

#[test]
fn test_list_empty_section() {
    let t = Test::init();
    t.cmd()
        .args(["list", "financial"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no entries in financial"));
}

#[test]
fn test_list_reports_corrupt_entry_and_keeps_others() {
    let t = Test::with_entries("wishes", &[("A", "first"), ("B", "second")]);

    let path = t.data_file("entries_wishes");
    let mut records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    records[0]["content"] = serde_json::Value::String("garbage".to_string());
    fs::write(&path, serde_json::to_vec(&records).unwrap()).unwrap();

    let json = stdout_json(&t.list_json("wishes"));
    assert_eq!(json["count"], 2);
    assert_eq!(json["entries"].as_array().unwrap().len(), 1);
    assert_eq!(json["entries"][0]["content"], "second");
    assert_eq!(json["failures"][0]["title"], "A");
    assert_eq!(json["failures"][0]["index"], 0);

    let output = t.list("wishes");
    assert_success(&output);
    assert_stdout_contains(&output, "could not be decrypted");
}

#[test]
fn test_rm_shifts_indices() {
    let t = Test::with_entries("financial", &[("A", "1"), ("B", "2"), ("C", "3")]);

    assert_success(&t.rm("financial", 1));

    let json = stdout_json(&t.list_json("financial"));
    let titles: Vec<&str> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["A", "C"]);

    let output = t.rm("financial", 2);
    assert_failure(&output);
    assert_stderr_contains(&output, "out of range");
}

#[test]
fn test_rm_wrong_passphrase_leaves_entries() {
    let t = Test::with_entries("passwords", &[("A", "1")]);
    let before = fs::read(t.data_file("entries_passwords")).unwrap();

    let output = t
        .cmd_with_passphrase("not it")
        .args(["rm", "passwords", "0"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid passphrase");
    assert_eq!(fs::read(t.data_file("entries_passwords")).unwrap(), before);

    assert_success(&t.rm("passwords", 0));
}

#[test]
fn test_title_kept_verbatim() {
    let t = Test::init();
    assert_success(&t.add("wishes", " Music ", "loud"));
    let json = stdout_json(&t.list_json("wishes"));
    assert_eq!(json["entries"][0]["title"], " Music ");
}

fn confirmed_days_ago(t: &Test, days: i64) {
    let stamp = (chrono::Utc::now() - chrono::Duration::days(days)).to_rfc3339();
    fs::write(t.data_file("lastLifeConfirmation"), stamp).unwrap();
}

#[test]
fn test_overdue_owner_is_prompted_but_served() {
    let t = Test::with_entries("wishes", &[("A", "first")]);
    confirmed_days_ago(&t, 10);

    let output = t.add("wishes", "B", "second");
    assert_success(&output);
    assert_stderr_contains(&output, "life confirmation is due");

    let output = t.list_json("wishes");
    assert_success(&output);
    assert_stderr_contains(&output, "keepsake confirm");
    assert_eq!(stdout_json(&output)["count"], 2);
}

#[test]
fn test_release_mode_blocks_changes_until_confirmed() {
    let t = Test::with_entries("wishes", &[("A", "first")]);
    confirmed_days_ago(&t, 40);
    let before = fs::read(t.data_file("entries_wishes")).unwrap();

    let output = t.add("wishes", "B", "second");
    assert_failure(&output);
    assert_stderr_contains(&output, "beneficiary-release mode");

    let output = t.rm("wishes", 0);
    assert_failure(&output);
    assert_stderr_contains(&output, "beneficiary-release mode");
    assert_eq!(fs::read(t.data_file("entries_wishes")).unwrap(), before);

    let output = t.list_json("wishes");
    assert_success(&output);
    assert_stderr_contains(&output, "beneficiary-release mode");
    assert_eq!(stdout_json(&output)["entries"][0]["content"], "first");

    assert_success(&t.confirm());
    let output = t.add("wishes", "B", "second");
    assert_success(&output);
    assert!(!stderr(&output).contains("beneficiary-release"));
}
