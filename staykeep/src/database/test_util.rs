//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{Booking, NightlyRate, Room, RoomId, RoomType, StayInterval};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a stay interval from ISO date strings.
///
/// # Panics
///
/// Panics on malformed or inverted dates. This is acceptable in test code.
#[must_use]
pub fn interval(start: &str, end: &str) -> StayInterval {
    StayInterval::new(start.parse().unwrap(), end.parse().unwrap()).unwrap()
}

/// Creates a test room with the type's default nightly rate.
///
/// # Panics
///
/// Panics if the room cannot be constructed. This is acceptable in test code.
#[must_use]
pub fn test_room(id: i64, room_type: RoomType) -> Room {
    let rate = room_type
        .default_nightly_rate()
        .unwrap_or_else(|| NightlyRate::try_from(120).unwrap());
    Room::new(RoomId::try_from(id).unwrap(), room_type, Some(rate)).unwrap()
}

/// Creates a test booking with placeholder guest details.
///
/// # Panics
///
/// Panics if any field is invalid. This is acceptable in test code.
#[must_use]
pub fn test_booking(code: &str, room_id: i64, start: &str, end: &str) -> Booking {
    Booking::builder(
        code.parse().unwrap(),
        RoomId::try_from(room_id).unwrap(),
        interval(start, end),
    )
    .guest_name("Test")
    .guest_surname("Guest")
    .guest_email("test@example.com")
    .guest_phone("07700900000")
    .build()
    .unwrap()
}
