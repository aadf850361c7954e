//! Integration tests for the booking lifecycle commands.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{add_room, book, init_data_dir};

fn assert_cmd(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("staykeep").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

fn book_args<'a>(check_in: &'a str, check_out: &'a str) -> Vec<&'a str> {
    vec![
        "book",
        "--type",
        "double",
        "--check-in",
        check_in,
        "--check-out",
        check_out,
        "--name",
        "Ada",
        "--surname",
        "Lovelace",
        "--email",
        "ada@example.com",
        "--phone",
        "07700900123",
    ]
}

#[test]
fn test_book_prints_confirmation_code() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");

    assert_cmd(dir.path())
        .args(book_args("2030-07-01", "2030-07-04"))
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[A-Z0-9]{6}\n$").unwrap())
        .stderr(predicate::str::contains("Booked room 1"));
}

#[test]
fn test_full_booking_lifecycle() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");
    let code = book(dir.path(), "double", "2030-07-01", "2030-07-04");

    // The code appears in the occupancy listing
    assert_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(&code))
        .stdout(predicate::str::contains("Lovelace"));

    // Contact details can be patched
    assert_cmd(dir.path())
        .args(["modify", &code, "--email", "countess@example.com"])
        .assert()
        .success();

    // Cancel frees the room
    assert_cmd(dir.path()).args(["cancel", &code]).assert().success();
    assert_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(&code).not());

    // A second cancel finds nothing
    assert_cmd(dir.path())
        .args(["cancel", &code])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_book_without_availability_fails() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");
    book(dir.path(), "double", "2030-07-01", "2030-07-04");

    assert_cmd(dir.path())
        .args(book_args("2030-07-03", "2030-07-06"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no availability"));

    // Back-to-back stays do not collide
    assert_cmd(dir.path())
        .args(book_args("2030-07-04", "2030-07-06"))
        .assert()
        .success();
}

#[test]
fn test_book_past_check_in_fails() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");

    assert_cmd(dir.path())
        .args(book_args("2020-01-01", "2020-01-03"))
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("in the past"));
}

#[test]
fn test_book_dry_run_creates_nothing() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");

    assert_cmd(dir.path())
        .args(book_args("2030-07-01", "2030-07-04"))
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run"));

    // The room is still free afterwards
    assert_cmd(dir.path())
        .args(["check", "--type", "double", "--check-in", "2030-07-01", "--check-out", "2030-07-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1"));
}

#[test]
fn test_modify_dates_onto_conflict_fails() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");
    book(dir.path(), "double", "2030-07-01", "2030-07-04");
    let code = book(dir.path(), "double", "2030-07-10", "2030-07-12");

    assert_cmd(dir.path())
        .args([
            "modify",
            &code,
            "--check-in",
            "2030-07-02",
            "--check-out",
            "2030-07-05",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("conflict"));
}

#[test]
fn test_modify_without_changes_is_invalid() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");
    let code = book(dir.path(), "double", "2030-07-01", "2030-07-04");

    assert_cmd(dir.path())
        .args(["modify", &code])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn test_modify_check_in_requires_check_out() {
    let dir = init_data_dir();

    assert_cmd(dir.path())
        .args(["modify", "AB12CD", "--check-in", "2030-07-02"])
        .assert()
        .failure();
}

#[test]
fn test_check_reports_free_room_then_unavailability() {
    let dir = init_data_dir();
    add_room(dir.path(), 5, "suite");

    assert_cmd(dir.path())
        .args(["check", "--type", "suite", "--check-in", "2030-07-01", "--check-out", "2030-07-04"])
        .assert()
        .success()
        .stdout("5\n");

    book(dir.path(), "suite", "2030-07-01", "2030-07-04");

    assert_cmd(dir.path())
        .args(["check", "--type", "suite", "--check-in", "2030-07-01", "--check-out", "2030-07-04"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no suite room is free"));
}

#[test]
fn test_check_without_type_reports_default() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "suite");
    add_room(dir.path(), 2, "double");

    // Priority order prefers double over suite
    assert_cmd(dir.path())
        .args(["check", "--check-in", "2030-07-01", "--check-out", "2030-07-04"])
        .assert()
        .success()
        .stdout("double\n");

    book(dir.path(), "double", "2030-07-01", "2030-07-04");

    assert_cmd(dir.path())
        .args(["check", "--check-in", "2030-07-01", "--check-out", "2030-07-04"])
        .assert()
        .success()
        .stdout("suite\n");

    // Fully booked: the first inventory type is still offered
    book(dir.path(), "suite", "2030-07-01", "2030-07-04");

    assert_cmd(dir.path())
        .args(["check", "--check-in", "2030-07-01", "--check-out", "2030-07-04"])
        .assert()
        .success()
        .stdout("suite\n");
}

#[test]
fn test_quote_table_output() {
    let dir = init_data_dir();
    add_room(dir.path(), 2, "suite");

    assert_cmd(dir.path())
        .args(["quote", "--type", "suite", "--check-in", "2030-07-01", "--check-out", "2030-07-04"])
        .assert()
        .success()
        .stdout("3 nights in room 2 (suite) at 300 per night: 900\n");
}

#[test]
fn test_quote_json_output() {
    let dir = init_data_dir();
    add_room(dir.path(), 2, "deluxe");

    let output = assert_cmd(dir.path())
        .args(["quote", "--type", "deluxe", "--check-in", "2030-07-01", "--check-out", "2030-07-03", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let quote: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(quote["room_id"], 2);
    assert_eq!(quote["nights"], 2);
    assert_eq!(quote["total"], 400);
}

#[test]
fn test_book_quiet_prints_only_code() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");

    assert_cmd(dir.path())
        .arg("--quiet")
        .args(book_args("2030-07-01", "2030-07-04"))
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[A-Z0-9]{6}\n$").unwrap())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_mode_env_silences_errors() {
    let dir = init_data_dir();

    assert_cmd(dir.path())
        .args(["cancel", "ZZZZZZ"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ERROR"));

    assert_cmd(dir.path())
        .args(["cancel", "ZZZZZZ"])
        .env("STAYKEEP_LOG_MODE", "quiet")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}
