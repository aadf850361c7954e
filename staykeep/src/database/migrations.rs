//! Schema initialization and version gating.
//!
//! The schema is versioned through a `schema_version` row in the
//! metadata table. Opening a fresh file lays down the inventory and
//! ledger tables; opening a file written by a different schema version
//! refuses rather than guessing at a migration.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_BOOKINGS_TABLE, CREATE_BOOKING_ROOM_INDEX, CREATE_BOOKING_START_INDEX,
    CREATE_METADATA_TABLE, CREATE_ROOMS_TABLE, CREATE_ROOM_TYPE_INDEX, CURRENT_SCHEMA_VERSION,
    INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Creates the tables, indices, and version row for a fresh database.
///
/// Every statement is `IF NOT EXISTS`, so running this against an
/// already-initialized file is harmless.
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_ROOMS_TABLE, [])?;
    conn.execute(CREATE_BOOKINGS_TABLE, [])?;
    conn.execute(CREATE_BOOKING_ROOM_INDEX, [])?;
    conn.execute(CREATE_BOOKING_START_INDEX, [])?;
    conn.execute(CREATE_ROOM_TYPE_INDEX, [])?;
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;
    Ok(())
}

/// Reads the schema version stored in the metadata table.
///
/// A database with no metadata table, or no version row, reports
/// version 0 (uninitialized).
///
/// # Errors
///
/// Returns an error on any other query failure.
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let lookup = conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    });

    match lookup {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        // "no such table: metadata" surfaces as an Unknown-coded failure
        Err(rusqlite::Error::SqliteFailure(sqlite_err, _))
            if sqlite_err.code == rusqlite::ErrorCode::Unknown =>
        {
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Brings a database to the current schema version or refuses.
///
/// Version 0 means a fresh file and triggers initialization. Any other
/// version that is not [`CURRENT_SCHEMA_VERSION`] fails with
/// `UnsupportedSchemaVersion`: the file was written by a different
/// release and silently reinterpreting its rows could corrupt the
/// ledger.
///
/// # Errors
///
/// Returns `UnsupportedSchemaVersion` on a version mismatch, or any
/// error from [`initialize_schema`].
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        #[allow(clippy::cast_sign_loss)]
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION as u32,
            found: version as u32,
        });
    }

    Ok(())
}
