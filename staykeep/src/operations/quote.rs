//! Price quotes.
//!
//! A quote prices the stay against the room the booking flow would
//! assign, so the quoted rate is the rate the guest will actually pay.
//! Quoting is read-only and never reserves anything.

use serde::Serialize;

use crate::availability::find_free_room;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::{NightlyRate, RoomId, RoomType, StayInterval};

/// A priced stay.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    /// The room the booking flow would assign.
    pub room_id: RoomId,
    /// The room's type.
    pub room_type: RoomType,
    /// The room's stored nightly rate.
    pub nightly_rate: NightlyRate,
    /// Number of nights in the stay.
    pub nights: i64,
    /// Total price in whole currency units.
    pub total: i64,
}

/// Prices a stay of the given type and dates.
///
/// # Errors
///
/// Returns `NoAvailability` if no room of the type is free for the
/// whole interval, or a database error if the scan fails.
pub fn price_quote(db: &Database, room_type: &RoomType, interval: &StayInterval) -> Result<Quote> {
    let room = find_free_room(db.connection(), room_type, interval)?.ok_or_else(|| {
        Error::NoAvailability {
            reason: format!("no {room_type} room is free for {interval}"),
        }
    })?;

    let nights = interval.nights();
    Ok(Quote {
        room_id: room.id,
        room_type: room.room_type,
        nightly_rate: room.nightly_rate,
        nights,
        total: room.nightly_rate.units() * nights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, interval, test_booking, test_room};
    use crate::NightlyRate;
    use crate::Room;

    #[test]
    fn test_quote_uses_stored_room_rate() {
        let mut db = create_test_database();
        let room = Room::new(
            RoomId::try_from(1).unwrap(),
            RoomType::Double,
            Some(NightlyRate::try_from(175).unwrap()),
        )
        .unwrap();
        db.create_room(&room).unwrap();

        let quote = price_quote(&db, &RoomType::Double, &interval("2026-07-01", "2026-07-04"))
            .unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.nightly_rate.units(), 175);
        assert_eq!(quote.total, 525);
    }

    #[test]
    fn test_quote_prices_the_assignable_room() {
        let mut db = create_test_database();
        let cheap = Room::new(
            RoomId::try_from(1).unwrap(),
            RoomType::Double,
            Some(NightlyRate::try_from(100).unwrap()),
        )
        .unwrap();
        let dear = Room::new(
            RoomId::try_from(2).unwrap(),
            RoomType::Double,
            Some(NightlyRate::try_from(300).unwrap()),
        )
        .unwrap();
        db.create_room(&cheap).unwrap();
        db.create_room(&dear).unwrap();
        db.try_insert_booking(&test_booking("AAAAAA", 1, "2026-07-01", "2026-07-04"))
            .unwrap();

        let quote = price_quote(&db, &RoomType::Double, &interval("2026-07-02", "2026-07-05"))
            .unwrap();
        assert_eq!(quote.room_id.value(), 2);
        assert_eq!(quote.total, 900);
    }

    #[test]
    fn test_quote_no_availability() {
        let mut db = create_test_database();
        db.create_room(&test_room(1, RoomType::Double)).unwrap();
        db.try_insert_booking(&test_booking("AAAAAA", 1, "2026-07-01", "2026-07-04"))
            .unwrap();

        let err = price_quote(&db, &RoomType::Double, &interval("2026-07-02", "2026-07-05"))
            .unwrap_err();
        assert!(err.is_no_availability());
    }

    #[test]
    fn test_quote_does_not_reserve() {
        let mut db = create_test_database();
        db.create_room(&test_room(1, RoomType::Double)).unwrap();

        let window = interval("2026-07-01", "2026-07-04");
        price_quote(&db, &RoomType::Double, &window).unwrap();
        price_quote(&db, &RoomType::Double, &window).unwrap();

        assert!(find_free_room(db.connection(), &RoomType::Double, &window)
            .unwrap()
            .is_some());
    }
}
