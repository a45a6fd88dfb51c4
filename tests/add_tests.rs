//! Integration tests for the add command and conflict validation

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::eventify_cmd;

fn init_calendar(temp: &TempDir) {
    eventify_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();
}

#[test]
fn test_add_creates_event() {
    let temp = TempDir::new().unwrap();
    init_calendar(&temp);

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-17",
            "--start",
            "09:00",
            "--end",
            "10:00",
            "--title",
            "Standup",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added event"))
        .stdout(predicate::str::contains("09:00 - 10:00"));

    let stored = fs::read_to_string(temp.path().join(".eventify/events.json")).unwrap();
    assert!(stored.contains("\"title\": \"Standup\""));
    assert!(stored.contains("\"startTimestamp\": \"09:00\""));
}

#[test]
fn test_add_uses_default_category_from_config() {
    let temp = TempDir::new().unwrap();

    eventify_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--category")
        .arg("work")
        .assert()
        .success();

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-17",
            "--start",
            "09:00",
            "--end",
            "10:00",
            "--title",
            "Standup",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[work]"));
}

#[test]
fn test_add_with_explicit_category_and_description() {
    let temp = TempDir::new().unwrap();
    init_calendar(&temp);

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-17",
            "--start",
            "19:00",
            "--end",
            "21:00",
            "--title",
            "Dinner",
            "--category",
            "casual",
            "--description",
            "Table for two",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[casual]"));

    let stored = fs::read_to_string(temp.path().join(".eventify/events.json")).unwrap();
    assert!(stored.contains("\"description\": \"Table for two\""));
}

#[test]
fn test_add_rejects_malformed_time() {
    let temp = TempDir::new().unwrap();
    init_calendar(&temp);

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-17",
            "--start",
            "9am",
            "--end",
            "10:00",
            "--title",
            "Standup",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid time"));
}

#[test]
fn test_add_rejects_out_of_range_time() {
    let temp = TempDir::new().unwrap();
    init_calendar(&temp);

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-17",
            "--start",
            "08:00",
            "--end",
            "08:63",
            "--title",
            "Standup",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("08:63"));
}

#[test]
fn test_add_rejects_inverted_interval() {
    let temp = TempDir::new().unwrap();
    init_calendar(&temp);

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-17",
            "--start",
            "10:00",
            "--end",
            "09:00",
            "--title",
            "Standup",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("earlier than end time"));
}

#[test]
fn test_add_rejects_short_title() {
    let temp = TempDir::new().unwrap();
    init_calendar(&temp);

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-17",
            "--start",
            "09:00",
            "--end",
            "10:00",
            "--title",
            "X",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("at least 2 characters"));
}

#[test]
fn test_add_rejects_overlap() {
    let temp = TempDir::new().unwrap();
    init_calendar(&temp);

    common::add_event(temp.path(), "2025-01-17", "09:00", "10:00", "First");

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-17",
            "--start",
            "09:30",
            "--end",
            "09:45",
            "--title",
            "Second",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("overlaps existing event 'First'"));

    // The rejected event was not committed
    let stored = fs::read_to_string(temp.path().join(".eventify/events.json")).unwrap();
    assert!(!stored.contains("Second"));
}

#[test]
fn test_add_accepts_adjacent_event() {
    let temp = TempDir::new().unwrap();
    init_calendar(&temp);

    common::add_event(temp.path(), "2025-01-17", "09:00", "10:00", "First");

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-17",
            "--start",
            "10:00",
            "--end",
            "11:00",
            "--title",
            "Second",
        ])
        .assert()
        .success();
}

#[test]
fn test_add_accepts_same_times_on_another_date() {
    let temp = TempDir::new().unwrap();
    init_calendar(&temp);

    common::add_event(temp.path(), "2025-01-17", "09:00", "10:00", "First");

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "2025-01-18",
            "--start",
            "09:00",
            "--end",
            "10:00",
            "--title",
            "Second",
        ])
        .assert()
        .success();
}

#[test]
fn test_add_rejects_malformed_date() {
    let temp = TempDir::new().unwrap();
    init_calendar(&temp);

    eventify_cmd()
        .current_dir(temp.path())
        .args([
            "add",
            "--date",
            "17-01-2025",
            "--start",
            "09:00",
            "--end",
            "10:00",
            "--title",
            "Standup",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}
