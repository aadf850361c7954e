//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the staykeep booking system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
///
/// One row per physical room. The id is caller-assigned (the room number)
/// rather than autoincremented, so ids are stable across re-imports.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY NOT NULL,
        room_type TEXT NOT NULL,
        nightly_rate INTEGER NOT NULL
    )";

/// SQL statement to create the bookings table.
///
/// Dates are stored as ISO `YYYY-MM-DD` text, which compares correctly
/// as strings, so overlap predicates run directly in SQL. The end date is
/// exclusive (the check-out day is not occupied).
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        code TEXT PRIMARY KEY NOT NULL,
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        guest_name TEXT NOT NULL,
        guest_surname TEXT NOT NULL,
        guest_email TEXT NOT NULL,
        guest_phone TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on the bookings `room_id` column.
///
/// This index speeds up the per-room overlap checks that run on every
/// availability probe and booking insert.
pub const CREATE_BOOKING_ROOM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_room ON bookings(room_id)";

/// SQL statement to create an index on the bookings `start_date` column.
///
/// This index speeds up date-window scans such as the fully-booked check.
pub const CREATE_BOOKING_START_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_start ON bookings(start_date)";

/// SQL statement to create an index on the rooms `room_type` column.
///
/// This index speeds up candidate-room scans by type.
pub const CREATE_ROOM_TYPE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_rooms_type ON rooms(room_type)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a booking.
///
/// Used by both the atomic check-and-insert path and by tests that seed
/// fixture data.
pub const INSERT_BOOKING: &str = r"
    INSERT INTO bookings
    (code, room_id, start_date, end_date, guest_name, guest_surname, guest_email, guest_phone, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to delete a booking by code.
pub const DELETE_BOOKING: &str = r"
    DELETE FROM bookings
    WHERE code = ?
";
