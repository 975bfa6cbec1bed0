use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::TestEnv;

fn add_a1(env: &TestEnv) {
    env.cmd()
        .args([
            "add",
            "2024-01-01",
            "--account",
            "A1",
            "--task",
            "Calls=3",
            "--task",
            "Emails=2",
            "--task",
            "Applications=0",
        ])
        .assert()
        .success()
        .stdout(contains("Successfully logged 2 tasks!"));
}

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new();
    env.init();
    assert!(std::path::Path::new(&env.db).exists());
    assert_eq!(env.row_count(), 0);

    // running it again is harmless
    env.init();
    assert!(!std::path::Path::new(&env.config).exists());
}

#[test]
fn test_add_then_report_all() {
    let env = TestEnv::new();
    env.init();
    add_a1(&env);

    env.cmd()
        .args(["report", "--all", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Key Metrics"))
        .stdout(contains("7.9%"))
        .stdout(contains("Daily Productivity"))
        .stdout(contains("Task Distribution"))
        .stdout(contains("Detailed Records"))
        .stdout(contains("Calls"))
        .stdout(contains("Emails"))
        .stdout(contains("0.5 hrs"))
        .stdout(contains("Applications").not());
}

#[test]
fn test_report_from_excludes_earlier_days() {
    let env = TestEnv::new();
    env.init();
    add_a1(&env);

    env.cmd()
        .args(["report", "--from", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("No data available for the selected filters"));

    env.cmd()
        .args(["report", "--range", "2024-01"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"));
}

#[test]
fn test_report_account_filter_is_exact() {
    let env = TestEnv::new();
    env.init();
    add_a1(&env);

    env.cmd()
        .args(["report", "--all", "--account", "a1"])
        .assert()
        .success()
        .stdout(contains("No data available"));

    env.cmd()
        .args(["report", "--all", "--account", "A1"])
        .assert()
        .success()
        .stdout(contains("Detailed Records"));
}

#[test]
fn test_add_without_account_fails_and_writes_nothing() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["add", "2024-01-01", "--task", "Calls=3"])
        .assert()
        .failure()
        .stderr(contains("Please enter an Account ID"));

    env.cmd()
        .args(["add", "2024-01-01", "--account", "   ", "--task", "Calls=3"])
        .assert()
        .failure();

    assert_eq!(env.row_count(), 0);
}

#[test]
fn test_add_without_positive_counts_fails() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["add", "2024-01-01", "--account", "A1", "--task", "Calls=0"])
        .assert()
        .failure()
        .stderr(contains("Please add at least one task"));

    env.cmd()
        .args(["add", "2024-01-01", "--account", "A1", "--task", "Faxes=2"])
        .assert()
        .failure()
        .stderr(contains("Unknown task type"));

    assert_eq!(env.row_count(), 0);
}

#[test]
fn test_summary_lists_every_task_type() {
    let env = TestEnv::new();
    env.init();
    add_a1(&env);

    env.cmd()
        .args(["summary", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Jan 01, 2024"))
        .stdout(contains("7.9%"))
        .stdout(contains("Push Refund TT"))
        .stdout(contains("No Activity/Future Review/Account Review"));

    env.cmd()
        .args(["summary", "2023-06-30"])
        .assert()
        .success()
        .stdout(contains("0.0%"));
}

#[test]
fn test_export_csv_and_json() {
    let env = TestEnv::new();
    env.init();
    add_a1(&env);

    let dir = tempfile::tempdir().unwrap();
    let csv_out = dir.path().join("records.csv");
    let json_out = dir.path().join("records.json");

    env.cmd()
        .args(["export", "--format", "csv", "--file", csv_out.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,account_id,task_type,total_count,total_minutes,time_spent")
    );
    assert!(content.contains("2024-01-01,A1,Calls,3,32.01,0.5 hrs"));
    assert!(content.contains("2024-01-01,A1,Emails,2,6.0,0.1 hrs"));

    env.cmd()
        .args([
            "export",
            "--format",
            "json",
            "--file",
            json_out.to_str().unwrap(),
            "--account",
            "A1",
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(json.as_array().map(|a| a.len()), Some(2));
    assert_eq!(json[0]["task_type"], "Calls");
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let env = TestEnv::new();
    env.init();
    add_a1(&env);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("records.csv");
    fs::write(&out, "keep me").unwrap();

    env.cmd()
        .args(["export", "--file", out.to_str().unwrap()])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    env.cmd()
        .args(["export", "--file", out.to_str().unwrap(), "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Calls"));
}

#[test]
fn test_types_uses_configured_catalog() {
    let env = TestEnv::new();

    env.cmd()
        .arg("types")
        .assert()
        .success()
        .stdout(contains("Calls"))
        .stdout(contains("10.67"));

    fs::write(
        &env.config,
        "task_types:\n  - name: Chats\n    minutes_per_task: 2.5\n",
    )
    .unwrap();

    env.cmd()
        .arg("types")
        .assert()
        .success()
        .stdout(contains("Chats"))
        .stdout(contains("Calls").not());

    env.init();
    env.cmd()
        .args(["add", "2024-01-01", "-a", "A1", "-t", "Chats=4"])
        .assert()
        .success();
    env.cmd()
        .args(["report", "--all"])
        .assert()
        .success()
        .stdout(contains("Chats"));
}

#[test]
fn test_db_info_reports_counts() {
    let env = TestEnv::new();
    env.init();
    add_a1(&env);

    env.cmd()
        .args(["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total records"))
        .stdout(contains("2024-01-01"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let env = TestEnv::new();
    env.init();

    env.cmd()
        .args(["add", "01/02/2024", "--account", "A1", "--task", "Calls=1"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_summary_rounds_half_percent_to_even() {
    let env = TestEnv::new();
    env.init();

    // 2 Emails = 6 minutes = 1.25%
    env.cmd()
        .args(["add", "2024-02-01", "-a", "A1", "-t", "Emails=2"])
        .assert()
        .success();

    env.cmd()
        .args(["summary", "2024-02-01"])
        .assert()
        .success()
        .stdout(contains("1.2%"))
        .stdout(contains("1.3%").not());
}

#[test]
fn test_report_with_oversized_window_fails_cleanly() {
    let env = TestEnv::new();
    fs::write(&env.config, "default_window_days: 100000000\n").unwrap();
    env.init();

    env.cmd()
        .arg("report")
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
