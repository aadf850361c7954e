//! Integration tests for the inventory commands.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{add_room, book, init_data_dir, staykeep_cmd};

fn assert_cmd(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("staykeep").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn test_init_creates_database() {
    let dir = tempfile::tempdir().unwrap();

    assert_cmd(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("staykeep.db").exists());
}

#[test]
fn test_init_twice_requires_overwrite() {
    let dir = init_data_dir();

    assert_cmd(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_cmd(dir.path())
        .args(["init", "--overwrite"])
        .assert()
        .success();
}

#[test]
fn test_init_create_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();

    assert_cmd(dir.path())
        .args(["init", "--create-config"])
        .assert()
        .success();
    assert!(dir.path().join("config.yaml").exists());
}

#[test]
fn test_add_room_appears_in_listing() {
    let dir = init_data_dir();
    add_room(dir.path(), 101, "double");

    assert_cmd(dir.path())
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("101"))
        .stdout(predicate::str::contains("double"))
        .stdout(predicate::str::contains("150"));
}

#[test]
fn test_add_room_with_explicit_rate() {
    let dir = init_data_dir();

    assert_cmd(dir.path())
        .args(["add-room", "7", "--type", "single", "--rate", "85"])
        .assert()
        .success();

    assert_cmd(dir.path())
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("85"));
}

#[test]
fn test_add_duplicate_room_fails() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");

    assert_cmd(dir.path())
        .args(["add-room", "1", "--type", "suite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_add_custom_type_requires_rate() {
    let dir = init_data_dir();

    assert_cmd(dir.path())
        .args(["add-room", "1", "--type", "penthouse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nightly rate"));

    assert_cmd(dir.path())
        .args(["add-room", "1", "--type", "penthouse", "--rate", "500"])
        .assert()
        .success();
}

#[test]
fn test_rooms_json_output() {
    let dir = init_data_dir();
    add_room(dir.path(), 3, "suite");

    let output = staykeep_cmd(dir.path())
        .args(["rooms", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rooms: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rooms[0]["id"], 3);
    assert_eq!(rooms[0]["room_type"], "suite");
    assert_eq!(rooms[0]["nightly_rate"], 300);
}

#[test]
fn test_update_room_rate() {
    let dir = init_data_dir();
    add_room(dir.path(), 2, "single");

    assert_cmd(dir.path())
        .args(["update-room", "2", "--rate", "95"])
        .assert()
        .success();

    assert_cmd(dir.path())
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("95"));
}

#[test]
fn test_update_room_without_changes_is_invalid() {
    let dir = init_data_dir();
    add_room(dir.path(), 2, "single");

    assert_cmd(dir.path())
        .args(["update-room", "2"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_update_missing_room_exits_semantic() {
    let dir = init_data_dir();

    assert_cmd(dir.path())
        .args(["update-room", "9", "--rate", "95"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_delete_room_cascades_bookings() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");
    let code = book(dir.path(), "double", "2030-07-01", "2030-07-04");

    assert_cmd(dir.path())
        .args(["delete-room", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 booking(s)"));

    // Room and booking are both gone
    assert_cmd(dir.path())
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("double").not());
    assert_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(&code).not());
}

#[test]
fn test_delete_room_dry_run_keeps_room() {
    let dir = init_data_dir();
    add_room(dir.path(), 1, "double");

    assert_cmd(dir.path())
        .args(["delete-room", "1", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run"));

    assert_cmd(dir.path())
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("double"));
}

#[test]
fn test_invalid_room_id_exits_with_usage_error() {
    let dir = init_data_dir();

    assert_cmd(dir.path())
        .args(["add-room", "0", "--type", "double"])
        .assert()
        .failure()
        .code(4);
}
