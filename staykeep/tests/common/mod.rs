//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for
//! testing the staykeep library.

use std::path::Path;

use tempfile::TempDir;

use staykeep::{
    Database, DatabaseConfig, Guest, NightlyRate, Room, RoomId, RoomType, StayInterval,
};

/// Opens a fresh database in a temporary directory.
///
/// The returned `TempDir` keeps the database file alive for the
/// duration of the test.
#[allow(dead_code)]
pub fn setup_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let db = open_database(&dir.path().join("test.db"));
    (dir, db)
}

/// Opens a database at a specific path (for multi-connection tests).
#[allow(dead_code)]
pub fn open_database(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).expect("should open database")
}

/// Creates a stay interval from ISO date strings.
#[allow(dead_code)]
pub fn interval(start: &str, end: &str) -> StayInterval {
    StayInterval::new(
        start.parse().expect("valid start date"),
        end.parse().expect("valid end date"),
    )
    .expect("valid interval")
}

/// Creates a guest with valid placeholder contact details.
#[allow(dead_code)]
pub fn guest() -> Guest {
    Guest::new("Ada", "Lovelace", "ada@example.com", "07700900123")
        .expect("fixture guest should be valid")
}

/// Adds a room with the type's default rate (or 120 for custom types).
#[allow(dead_code)]
pub fn seed_room(db: &mut Database, id: i64, room_type: RoomType) -> Room {
    let rate = room_type
        .default_nightly_rate()
        .unwrap_or_else(|| NightlyRate::try_from(120).expect("valid rate"));
    let room = Room::new(
        RoomId::try_from(id).expect("valid room id"),
        room_type,
        Some(rate),
    )
    .expect("fixture room should be valid");
    db.create_room(&room).expect("should create room");
    room
}
