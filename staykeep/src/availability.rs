//! Availability resolution over the room inventory and booking ledger.
//!
//! The resolver is stateless: every query reads the current database state
//! and computes its answer from the half-open overlap predicate. Room
//! assignment is deterministic by design: candidates of a type are scanned
//! in ascending id order and the first free room wins, so the same
//! inventory and ledger always produce the same assignment.

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

use crate::database::Database;
use crate::error::Result;
use crate::{Booking, Room, RoomId, RoomType, StayInterval};

/// One room together with its current bookings, as reported by
/// [`room_availability`].
#[derive(Debug, Clone, Serialize)]
pub struct RoomAvailability {
    /// The room.
    pub room: Room,
    /// Every booking currently held against the room, ordered by start
    /// date.
    pub bookings: Vec<Booking>,
}

/// Finds the free room of a type that a booking for this interval would
/// be assigned, if any.
///
/// Candidates are scanned in ascending id order; a room qualifies only if
/// none of its bookings share a night with the interval (a stay occupies
/// one room for its whole duration, never a different room per night).
///
/// # Errors
///
/// Returns an error if a database query fails.
///
/// # Examples
///
/// ```no_run
/// use staykeep::availability::find_free_room;
/// use staykeep::database::{Database, DatabaseConfig};
/// use staykeep::{RoomType, StayInterval};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/staykeep.db")).unwrap();
/// let interval = StayInterval::new(
///     "2026-07-01".parse().unwrap(),
///     "2026-07-04".parse().unwrap(),
/// ).unwrap();
/// if let Some(room) = find_free_room(db.connection(), &RoomType::Double, &interval).unwrap() {
///     println!("room {} is free", room.id);
/// }
/// ```
pub fn find_free_room(
    conn: &Connection,
    room_type: &RoomType,
    interval: &StayInterval,
) -> Result<Option<Room>> {
    find_free_room_excluding(conn, room_type, interval, None)
}

/// Like [`find_free_room`], but skips one room.
///
/// Used by the booking retry path: when a concurrent writer wins the
/// first-choice room, the re-plan must not pick the contested room again.
///
/// # Errors
///
/// Returns an error if a database query fails.
pub fn find_free_room_excluding(
    conn: &Connection,
    room_type: &RoomType,
    interval: &StayInterval,
    exclude: Option<RoomId>,
) -> Result<Option<Room>> {
    for room in Database::rooms_of_type(conn, room_type)? {
        if exclude == Some(room.id) {
            continue;
        }
        let conflicts = Database::count_overlapping_excluding(conn, room.id, interval, None)?;
        if conflicts == 0 {
            return Ok(Some(room));
        }
    }
    Ok(None)
}

/// Checks whether at least one room of the type is free for the whole
/// interval.
///
/// # Errors
///
/// Returns an error if a database query fails.
pub fn is_type_available(
    conn: &Connection,
    room_type: &RoomType,
    interval: &StayInterval,
) -> Result<bool> {
    Ok(find_free_room(conn, room_type, interval)?.is_some())
}

/// Checks whether every room of a type is occupied on a given night.
///
/// A type with no rooms in the inventory reports fully booked: there is
/// nothing to sell.
///
/// # Errors
///
/// Returns an error if a database query fails.
pub fn is_date_fully_booked(
    conn: &Connection,
    room_type: &RoomType,
    date: NaiveDate,
) -> Result<bool> {
    let total = Database::count_rooms_of_type(conn, room_type)?;
    let booked = Database::count_booked_rooms_on_date(conn, room_type, date)?;
    Ok(booked >= total)
}

/// Picks the default room type to offer for an interval.
///
/// The types are tried in priority order (the `priority` slice, normally
/// [`RoomType::PRIORITY_ORDER`] or the configured override); the first
/// one with a free room wins. Types the priority list does not mention
/// are tried next, in the order they first appear in the inventory.
///
/// When nothing at all is free, the first type in the inventory is still
/// offered: the caller gets a type to display, and the booking attempt
/// against it reports the no-availability outcome. `None` means the
/// inventory is empty.
///
/// # Errors
///
/// Returns an error if a database query fails.
pub fn default_room_type(
    conn: &Connection,
    priority: &[RoomType],
    interval: &StayInterval,
) -> Result<Option<RoomType>> {
    for room_type in priority {
        if is_type_available(conn, room_type, interval)? {
            return Ok(Some(room_type.clone()));
        }
    }
    // None of the priority types exist or none are free; try whatever
    // other types the inventory actually has.
    let inventory_types = Database::distinct_room_types(conn)?;
    for room_type in &inventory_types {
        if priority.contains(room_type) {
            continue;
        }
        if is_type_available(conn, room_type, interval)? {
            return Ok(Some(room_type.clone()));
        }
    }
    // Fully booked: offer the first inventory type anyway so the caller
    // has something to show.
    Ok(inventory_types.into_iter().next())
}

/// Reports every room with its bookings, ordered by room id.
///
/// This is the read projection behind the `list` command: the whole
/// occupancy picture in one call.
///
/// # Errors
///
/// Returns an error if a database query fails.
pub fn room_availability(conn: &Connection) -> Result<Vec<RoomAvailability>> {
    let mut out = Vec::new();
    for room in Database::list_rooms(conn)? {
        let bookings = Database::bookings_for_room(conn, room.id)?;
        out.push(RoomAvailability { room, bookings });
    }
    Ok(out)
}
