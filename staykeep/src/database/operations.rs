//! Database CRUD operations for rooms and bookings.
//!
//! This module implements all create, read, update, and delete operations
//! for the room inventory and the booking ledger, including the atomic
//! check-and-insert that upholds the per-room no-overlap invariant under
//! concurrent writers.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::{Error, Result};
use crate::{Booking, BookingCode, NightlyRate, Room, RoomId, RoomType, StayInterval};

use super::connection::Database;
use super::schema::{DELETE_BOOKING, INSERT_BOOKING};

/// Parses an ISO `YYYY-MM-DD` column value back into a date.
fn sql_to_date(value: &str) -> rusqlite::Result<NaiveDate> {
    value
        .parse::<NaiveDate>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Converts Unix epoch seconds from the database to a UTC timestamp.
fn unix_secs_to_datetime(secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        rusqlite::Error::ToSqlConversionFailure(
            format!("timestamp {secs} out of range").into(),
        )
    })
}

/// Helper function to deserialize a room from a database row.
///
/// Expects row fields in this order: id, `room_type`, `nightly_rate`
fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    let id_value: i64 = row.get(0)?;
    let type_value: String = row.get(1)?;
    let rate_value: i64 = row.get(2)?;

    let id = RoomId::try_from(id_value)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let room_type = type_value
        .parse::<RoomType>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let nightly_rate = NightlyRate::try_from(rate_value)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(Room {
        id,
        room_type,
        nightly_rate,
    })
}

/// Helper function to deserialize a booking from a database row.
///
/// Expects row fields in this order: code, `room_id`, `start_date`,
/// `end_date`, `guest_name`, `guest_surname`, `guest_email`, `guest_phone`,
/// `created_at`
fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    let code_value: String = row.get(0)?;
    let room_value: i64 = row.get(1)?;
    let start_value: String = row.get(2)?;
    let end_value: String = row.get(3)?;
    let guest_name: String = row.get(4)?;
    let guest_surname: String = row.get(5)?;
    let guest_email: String = row.get(6)?;
    let guest_phone: String = row.get(7)?;
    let created_secs: i64 = row.get(8)?;

    let code = code_value
        .parse::<BookingCode>()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let room_id = RoomId::try_from(room_value)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let interval = StayInterval::new(sql_to_date(&start_value)?, sql_to_date(&end_value)?)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let created_at = unix_secs_to_datetime(created_secs)?;

    Booking::builder(code, room_id, interval)
        .guest_name(guest_name)
        .guest_surname(guest_surname)
        .guest_email(guest_email)
        .guest_phone(guest_phone)
        .created_at(created_at)
        .build()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

// SQL statements for CRUD operations
const INSERT_ROOM: &str = r"
    INSERT INTO rooms (id, room_type, nightly_rate)
    VALUES (?, ?, ?)
";

const SELECT_ROOM: &str = r"
    SELECT id, room_type, nightly_rate
    FROM rooms
    WHERE id = ?
";

const LIST_ROOMS: &str = r"
    SELECT id, room_type, nightly_rate
    FROM rooms
    ORDER BY id
";

const LIST_ROOMS_BY_TYPE: &str = r"
    SELECT id, room_type, nightly_rate
    FROM rooms
    WHERE room_type = ?
    ORDER BY id
";

const UPDATE_ROOM: &str = r"
    UPDATE rooms
    SET room_type = ?, nightly_rate = ?
    WHERE id = ?
";

const DELETE_ROOM: &str = r"
    DELETE FROM rooms
    WHERE id = ?
";

const DELETE_BOOKINGS_FOR_ROOM: &str = r"
    DELETE FROM bookings
    WHERE room_id = ?
";

const SELECT_BOOKING: &str = r"
    SELECT code, room_id, start_date, end_date,
           guest_name, guest_surname, guest_email, guest_phone, created_at
    FROM bookings
    WHERE code = ?
";

const LIST_BOOKINGS: &str = r"
    SELECT code, room_id, start_date, end_date,
           guest_name, guest_surname, guest_email, guest_phone, created_at
    FROM bookings
    ORDER BY start_date, code
";

const SELECT_BOOKINGS_FOR_ROOM: &str = r"
    SELECT code, room_id, start_date, end_date,
           guest_name, guest_surname, guest_email, guest_phone, created_at
    FROM bookings
    WHERE room_id = ?
    ORDER BY start_date, code
";

// Half-open overlap: an existing stay collides iff it starts before our
// check-out and ends after our check-in. ISO dates compare correctly as text.
const SELECT_OVERLAPPING: &str = r"
    SELECT code, room_id, start_date, end_date,
           guest_name, guest_surname, guest_email, guest_phone, created_at
    FROM bookings
    WHERE room_id = ? AND start_date < ? AND end_date > ?
    ORDER BY start_date, code
";

// 'code IS NOT ?' is true for every row when the parameter is NULL, so the
// same statement serves both plain counts and counts excluding one booking.
const COUNT_OVERLAPPING_EXCLUDING: &str = r"
    SELECT COUNT(*)
    FROM bookings
    WHERE room_id = ? AND start_date < ? AND end_date > ? AND code IS NOT ?
";

const CHECK_CODE_EXISTS: &str = r"
    SELECT COUNT(*) FROM bookings WHERE code = ?
";

const UPDATE_BOOKING: &str = r"
    UPDATE bookings
    SET room_id = ?, start_date = ?, end_date = ?,
        guest_name = ?, guest_surname = ?, guest_email = ?, guest_phone = ?
    WHERE code = ?
";

const COUNT_ROOMS_OF_TYPE: &str = r"
    SELECT COUNT(*) FROM rooms WHERE room_type = ?
";

// A room is occupied on a date iff some booking's half-open interval
// contains it: start <= date < end.
const COUNT_BOOKED_ROOMS_ON_DATE: &str = r"
    SELECT COUNT(DISTINCT b.room_id)
    FROM bookings b
    JOIN rooms r ON r.id = b.room_id
    WHERE r.room_type = ? AND b.start_date <= ? AND b.end_date > ?
";

const SELECT_DISTINCT_TYPES: &str = r"
    SELECT room_type
    FROM rooms
    GROUP BY room_type
    ORDER BY MIN(id)
";

impl Database {
    /// Adds a room to the inventory.
    ///
    /// This operation uses a transaction with IMMEDIATE mode and fails if
    /// a room with the same id already exists.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the id is already taken, or a
    /// database error if the transaction fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use staykeep::database::{Database, DatabaseConfig};
    /// use staykeep::{Room, RoomId, RoomType};
    ///
    /// let config = DatabaseConfig::new("/tmp/staykeep.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let room = Room::new(RoomId::try_from(101).unwrap(), RoomType::Double, None).unwrap();
    /// db.create_room(&room).unwrap();
    /// ```
    pub fn create_room(&mut self, room: &Room) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing: i64 = tx.query_row(
            "SELECT COUNT(*) FROM rooms WHERE id = ?",
            params![room.id.value()],
            |row| row.get(0),
        )?;
        if existing > 0 {
            return Err(Error::Validation {
                field: "room id".into(),
                message: format!("room {} already exists", room.id),
            });
        }

        tx.execute(
            INSERT_ROOM,
            params![
                room.id.value(),
                room.room_type.as_str(),
                room.nightly_rate.units()
            ],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Retrieves a room from the inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(room))` if the room exists
    /// - `Ok(None)` if the room doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_room(conn: &Connection, id: RoomId) -> Result<Option<Room>> {
        let mut stmt = conn.prepare(SELECT_ROOM)?;

        match stmt.query_row(params![id.value()], row_to_room) {
            Ok(room) => Ok(Some(room)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists every room in the inventory, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any room cannot be
    /// deserialized.
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(LIST_ROOMS)?;

        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(rooms)
    }

    /// Lists the rooms of a given type, ordered by ascending id.
    ///
    /// The ascending order is what makes room assignment deterministic:
    /// the availability resolver takes the first free room of this list.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn rooms_of_type(conn: &Connection, room_type: &RoomType) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(LIST_ROOMS_BY_TYPE)?;

        let rooms = stmt
            .query_map(params![room_type.as_str()], row_to_room)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(rooms)
    }

    /// Updates a room's type and nightly rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the room was found and updated
    /// - `Ok(false)` if the room was not found
    pub fn update_room(&mut self, room: &Room) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(
            UPDATE_ROOM,
            params![
                room.room_type.as_str(),
                room.nightly_rate.units(),
                room.id.value()
            ],
        )?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Deletes a room and every booking attached to it.
    ///
    /// The cascade runs in one IMMEDIATE transaction: bookings first, then
    /// the room. A partially deleted room is never observable.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(n))` if the room existed; `n` is the number of bookings
    ///   removed with it
    /// - `Ok(None)` if the room was not found
    pub fn delete_room_cascade(&mut self, id: RoomId) -> Result<Option<usize>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let bookings_removed = tx.execute(DELETE_BOOKINGS_FOR_ROOM, params![id.value()])?;
        let rooms_removed = tx.execute(DELETE_ROOM, params![id.value()])?;

        tx.commit()?;

        if rooms_removed > 0 {
            Ok(Some(bookings_removed))
        } else {
            Ok(None)
        }
    }

    /// Checks whether a booking code is already in the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn booking_code_exists(conn: &Connection, code: &BookingCode) -> Result<bool> {
        let count: i64 =
            conn.query_row(CHECK_CODE_EXISTS, params![code.as_str()], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Retrieves a booking by its confirmation code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(booking))` if the booking exists
    /// - `Ok(None)` if the booking doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_booking(conn: &Connection, code: &BookingCode) -> Result<Option<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKING)?;

        match stmt.query_row(params![code.as_str()], row_to_booking) {
            Ok(booking) => Ok(Some(booking)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists every booking in the ledger, ordered by start date then code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any booking cannot be
    /// deserialized.
    pub fn list_bookings(conn: &Connection) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(LIST_BOOKINGS)?;

        let bookings = stmt
            .query_map([], row_to_booking)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(bookings)
    }

    /// Lists the bookings attached to one room, ordered by start date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn bookings_for_room(conn: &Connection, id: RoomId) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKINGS_FOR_ROOM)?;

        let bookings = stmt
            .query_map(params![id.value()], row_to_booking)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(bookings)
    }

    /// Finds the bookings on a room that share at least one night with the
    /// given interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn overlapping_bookings(
        conn: &Connection,
        id: RoomId,
        interval: &StayInterval,
    ) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(SELECT_OVERLAPPING)?;

        let bookings = stmt
            .query_map(
                params![
                    id.value(),
                    interval.end().to_string(),
                    interval.start().to_string()
                ],
                row_to_booking,
            )?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(bookings)
    }

    /// Counts the bookings on a room that overlap the interval, optionally
    /// ignoring one booking (used when re-validating a date change against
    /// every booking except the one being modified).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_overlapping_excluding(
        conn: &Connection,
        id: RoomId,
        interval: &StayInterval,
        exclude: Option<&BookingCode>,
    ) -> Result<i64> {
        let count: i64 = conn.query_row(
            COUNT_OVERLAPPING_EXCLUDING,
            params![
                id.value(),
                interval.end().to_string(),
                interval.start().to_string(),
                exclude.map(BookingCode::as_str)
            ],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Inserts a booking only if its room is still free for the whole
    /// interval, in a single IMMEDIATE transaction.
    ///
    /// This is the write that upholds the no-overlap invariant under
    /// concurrency: the overlap re-check and the insert cannot be
    /// interleaved with another writer, so of two racing bookings for the
    /// last free room exactly one commits.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the booking was inserted
    /// - `Ok(false)` if another booking overlapped and nothing was written
    pub fn try_insert_booking(&mut self, booking: &Booking) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let conflicts: i64 = tx.query_row(
            COUNT_OVERLAPPING_EXCLUDING,
            params![
                booking.room_id.value(),
                booking.interval.end().to_string(),
                booking.interval.start().to_string(),
                None::<String>
            ],
            |row| row.get(0),
        )?;
        if conflicts > 0 {
            return Ok(false);
        }

        tx.execute(
            INSERT_BOOKING,
            params![
                booking.code.as_str(),
                booking.room_id.value(),
                booking.interval.start().to_string(),
                booking.interval.end().to_string(),
                booking.guest.name(),
                booking.guest.surname(),
                booking.guest.email(),
                booking.guest.phone(),
                booking.created_at.timestamp(),
            ],
        )?;

        tx.commit()?;
        Ok(true)
    }

    /// Rewrites a booking only if its (possibly new) interval does not
    /// collide with any other booking on the room, in a single IMMEDIATE
    /// transaction.
    ///
    /// The booking's own row is excluded from the overlap check, so a
    /// date change that still covers some of the original nights is fine.
    /// On conflict nothing is written and the ledger keeps the original
    /// dates.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no booking carries this code, or a database
    /// error if the transaction fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the booking was rewritten
    /// - `Ok(false)` if another booking overlapped and nothing was written
    pub fn try_update_booking(&mut self, booking: &Booking) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let conflicts: i64 = tx.query_row(
            COUNT_OVERLAPPING_EXCLUDING,
            params![
                booking.room_id.value(),
                booking.interval.end().to_string(),
                booking.interval.start().to_string(),
                booking.code.as_str()
            ],
            |row| row.get(0),
        )?;
        if conflicts > 0 {
            return Ok(false);
        }

        let rows_affected = tx.execute(
            UPDATE_BOOKING,
            params![
                booking.room_id.value(),
                booking.interval.start().to_string(),
                booking.interval.end().to_string(),
                booking.guest.name(),
                booking.guest.surname(),
                booking.guest.email(),
                booking.guest.phone(),
                booking.code.as_str(),
            ],
        )?;
        if rows_affected == 0 {
            return Err(Error::NotFound {
                resource: format!("booking {}", booking.code),
            });
        }

        tx.commit()?;
        Ok(true)
    }

    /// Rewrites a booking's mutable fields, keyed by its code.
    ///
    /// Performs no overlap check; lifecycle code uses `try_update_booking`
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the booking was found and updated
    /// - `Ok(false)` if the booking was not found
    pub fn update_booking(&mut self, booking: &Booking) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(
            UPDATE_BOOKING,
            params![
                booking.room_id.value(),
                booking.interval.start().to_string(),
                booking.interval.end().to_string(),
                booking.guest.name(),
                booking.guest.surname(),
                booking.guest.email(),
                booking.guest.phone(),
                booking.code.as_str(),
            ],
        )?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Deletes a booking from the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the booking was found and deleted
    /// - `Ok(false)` if the booking was not found
    pub fn delete_booking(&mut self, code: &BookingCode) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(DELETE_BOOKING, params![code.as_str()])?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Counts the rooms of a given type.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_rooms_of_type(conn: &Connection, room_type: &RoomType) -> Result<i64> {
        let count: i64 = conn.query_row(
            COUNT_ROOMS_OF_TYPE,
            params![room_type.as_str()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Counts the distinct rooms of a type that are occupied on a given
    /// night.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_booked_rooms_on_date(
        conn: &Connection,
        room_type: &RoomType,
        date: NaiveDate,
    ) -> Result<i64> {
        let count: i64 = conn.query_row(
            COUNT_BOOKED_ROOMS_ON_DATE,
            params![room_type.as_str(), date.to_string(), date.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Lists the distinct room types present in the inventory, ordered by
    /// the lowest room id carrying each type.
    ///
    /// This is the fallback order for choosing a default type when none of
    /// the built-in priority types exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn distinct_room_types(conn: &Connection) -> Result<Vec<RoomType>> {
        let mut stmt = conn.prepare(SELECT_DISTINCT_TYPES)?;

        let types = stmt
            .query_map([], |row| {
                let value: String = row.get(0)?;
                value
                    .parse::<RoomType>()
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(types)
    }

    /// Verifies database integrity using PRAGMA `integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the integrity check fails or detects corruption.
    pub fn verify_integrity(&mut self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            })
        }
    }
}
