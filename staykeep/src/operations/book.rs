//! Booking creation operation.
//!
//! Planning validates the request, picks the room the stay will occupy,
//! and mints a fresh confirmation code; the resulting plan carries a
//! single `InsertBooking` action whose execution is the atomic
//! check-and-insert. [`create_booking`] wraps plan-and-execute with the
//! one-shot retry that handles a lost race for the chosen room.

use chrono::{Local, NaiveDate};
use rusqlite::Connection;

use crate::availability::find_free_room_excluding;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::{Booking, BookingCode, Guest, RoomId, RoomType, StayInterval};

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Default number of code generation attempts before giving up.
///
/// Collisions in a 36^6 code space are vanishingly rare at realistic
/// ledger sizes; the bound exists so a pathological ledger fails loudly
/// instead of spinning.
pub const DEFAULT_CODE_ATTEMPTS: u32 = 16;

/// Options for creating a booking.
#[derive(Debug, Clone)]
pub struct BookOptions {
    /// The room type requested by the guest.
    pub room_type: RoomType,
    /// The dates of the stay.
    pub interval: StayInterval,
    /// The guest holding the booking.
    pub guest: Guest,
    /// Maximum code generation attempts.
    pub code_attempts: u32,
    /// The date treated as "today" for the past-check-in rule. Defaults
    /// to the current local date when unset.
    pub reference_date: Option<NaiveDate>,
    /// A room the planner must not assign (set by the conflict retry).
    pub excluded_room: Option<RoomId>,
}

impl BookOptions {
    /// Creates booking options for a type, interval, and guest.
    #[must_use]
    pub fn new(room_type: RoomType, interval: StayInterval, guest: Guest) -> Self {
        Self {
            room_type,
            interval,
            guest,
            code_attempts: DEFAULT_CODE_ATTEMPTS,
            reference_date: None,
            excluded_room: None,
        }
    }

    /// Sets the maximum number of code generation attempts.
    #[must_use]
    pub fn with_code_attempts(mut self, attempts: u32) -> Self {
        self.code_attempts = attempts;
        self
    }

    /// Pins the date treated as "today" (used by tests and backfills).
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Excludes one room from assignment.
    #[must_use]
    pub fn with_excluded_room(mut self, room: RoomId) -> Self {
        self.excluded_room = Some(room);
        self
    }
}

/// Generates a booking code that is not currently in the ledger.
///
/// Codes are drawn at random and checked against the ledger; on
/// collision a new code is drawn, up to `attempts` times.
///
/// # Errors
///
/// Returns `CodeSpaceExhausted` if every attempt collided, or a database
/// error if the existence check fails.
pub fn generate_unique_code(conn: &Connection, attempts: u32) -> Result<BookingCode> {
    let mut rng = rand::thread_rng();
    for _ in 0..attempts {
        let code = BookingCode::generate(&mut rng);
        if !Database::booking_code_exists(conn, &code)? {
            return Ok(code);
        }
    }
    Err(Error::CodeSpaceExhausted { attempts })
}

/// Planner for booking creation.
///
/// # Examples
///
/// ```no_run
/// use staykeep::database::{Database, DatabaseConfig};
/// use staykeep::operations::{BookOptions, BookPlan, PlanExecutor};
/// use staykeep::{Guest, RoomType, StayInterval};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/staykeep.db")).unwrap();
/// let interval = StayInterval::new(
///     "2026-07-01".parse().unwrap(),
///     "2026-07-04".parse().unwrap(),
/// ).unwrap();
/// let guest = Guest::new("Ada", "Lovelace", "ada@example.com", "07700900123").unwrap();
///
/// let options = BookOptions::new(RoomType::Double, interval, guest);
/// let plan = BookPlan::new(options).build_plan(&mut db).unwrap();
/// let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
/// println!("confirmed: {:?}", result.booking_code);
/// ```
#[derive(Debug, Clone)]
pub struct BookPlan {
    options: BookOptions,
}

impl BookPlan {
    /// Creates a booking planner from options.
    #[must_use]
    pub fn new(options: BookOptions) -> Self {
        Self { options }
    }

    /// Validates the request and produces the plan.
    ///
    /// # Errors
    ///
    /// - `Validation` if the check-in date is in the past
    /// - `NoAvailability` if no room of the type is free for the interval
    /// - `CodeSpaceExhausted` if no unused code could be generated
    /// - `Database` on storage failures
    pub fn build_plan(&self, db: &mut Database) -> Result<OperationPlan> {
        let today = self
            .options
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());
        if self.options.interval.start() < today {
            return Err(Error::Validation {
                field: "check-in".into(),
                message: format!(
                    "check-in {} is in the past (today is {today})",
                    self.options.interval.start()
                ),
            });
        }

        let room = find_free_room_excluding(
            db.connection(),
            &self.options.room_type,
            &self.options.interval,
            self.options.excluded_room,
        )?
        .ok_or_else(|| Error::NoAvailability {
            reason: format!(
                "no {} room is free for {}",
                self.options.room_type, self.options.interval
            ),
        })?;

        let code = generate_unique_code(db.connection(), self.options.code_attempts)?;

        let booking = Booking::builder(code, room.id, self.options.interval)
            .guest(&self.options.guest)
            .build()?;

        Ok(OperationPlan::new(format!(
            "Book a {} room for {}",
            self.options.room_type, self.options.interval
        ))
        .add_action(PlanAction::InsertBooking(booking)))
    }
}

/// Plans and executes a booking in one call, retrying once on a lost
/// race.
///
/// If a concurrent writer takes the planned room between planning and
/// execution, the request is re-planned with that room excluded and
/// executed once more; a second loss surfaces as `NoAvailability`.
///
/// # Errors
///
/// Same as [`BookPlan::build_plan`], plus `NoAvailability` when the
/// retry also fails.
pub fn create_booking(db: &mut Database, options: BookOptions) -> Result<Booking> {
    let plan = BookPlan::new(options.clone()).build_plan(db)?;
    let booking = planned_booking(&plan);

    match PlanExecutor::new(db).execute(&plan) {
        Ok(_) => Ok(booking),
        Err(Error::BookingConflict { .. }) => {
            // Someone else won the room; re-plan once against the rest of
            // the type's inventory.
            let retry_options = options.with_excluded_room(booking.room_id);
            let retry_plan = BookPlan::new(retry_options).build_plan(db)?;
            let retry_booking = planned_booking(&retry_plan);
            match PlanExecutor::new(db).execute(&retry_plan) {
                Ok(_) => Ok(retry_booking),
                Err(Error::BookingConflict { details }) => Err(Error::NoAvailability {
                    reason: format!("lost the room twice under concurrent load: {details}"),
                }),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}

/// Pulls the booking out of a freshly built creation plan.
///
/// Creation plans always carry exactly one `InsertBooking` action.
fn planned_booking(plan: &OperationPlan) -> Booking {
    plan.actions
        .iter()
        .find_map(|action| match action {
            PlanAction::InsertBooking(b) => Some(b.clone()),
            _ => None,
        })
        .unwrap_or_else(|| unreachable!("creation plan without an InsertBooking action"))
}
