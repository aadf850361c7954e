//! Common helpers for CLI integration tests.

use std::path::Path;
use std::process::Command;

use assert_cmd::cargo::cargo_bin;
use tempfile::TempDir;

/// Creates a Command for the staykeep binary pointed at a data directory.
#[allow(dead_code)]
pub fn staykeep_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("staykeep"));
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

/// Creates a temp data directory and initializes a database in it.
#[allow(dead_code)]
pub fn init_data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let status = staykeep_cmd(dir.path())
        .arg("init")
        .status()
        .expect("init should run");
    assert!(status.success(), "init should succeed");
    dir
}

/// Adds a room through the CLI.
#[allow(dead_code)]
pub fn add_room(data_dir: &Path, id: u32, room_type: &str) {
    let status = staykeep_cmd(data_dir)
        .args(["add-room", &id.to_string(), "--type", room_type])
        .status()
        .expect("add-room should run");
    assert!(status.success(), "add-room should succeed");
}

/// Books a room through the CLI and returns the confirmation code.
#[allow(dead_code)]
pub fn book(data_dir: &Path, room_type: &str, check_in: &str, check_out: &str) -> String {
    let output = staykeep_cmd(data_dir)
        .args([
            "book",
            "--type",
            room_type,
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
        ])
        .output()
        .expect("book should run");
    assert!(
        output.status.success(),
        "book should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
