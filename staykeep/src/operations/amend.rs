//! Booking modification operation.
//!
//! A modification is a patch against an existing booking: new dates,
//! new contact fields, or both. Contact-only patches never touch
//! availability; a date change is re-checked against every other
//! booking of the same room, atomically, when the plan executes.

use chrono::{Local, NaiveDate};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::{Booking, BookingCode, Guest, StayInterval};

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Options for modifying a booking.
#[derive(Debug, Clone)]
pub struct ModifyOptions {
    /// The confirmation code of the booking to modify.
    pub code: BookingCode,
    /// Replacement stay dates, if the dates are changing.
    pub interval: Option<StayInterval>,
    /// Replacement guest first name.
    pub guest_name: Option<String>,
    /// Replacement guest surname.
    pub guest_surname: Option<String>,
    /// Replacement contact email.
    pub guest_email: Option<String>,
    /// Replacement contact phone.
    pub guest_phone: Option<String>,
    /// The date treated as "today" for the past-check-in rule. Defaults
    /// to the current local date when unset.
    pub reference_date: Option<NaiveDate>,
}

impl ModifyOptions {
    /// Creates an empty patch for a booking code.
    #[must_use]
    pub fn new(code: BookingCode) -> Self {
        Self {
            code,
            interval: None,
            guest_name: None,
            guest_surname: None,
            guest_email: None,
            guest_phone: None,
            reference_date: None,
        }
    }

    /// Sets replacement stay dates.
    #[must_use]
    pub fn with_interval(mut self, interval: StayInterval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets a replacement guest first name.
    #[must_use]
    pub fn with_guest_name(mut self, name: impl Into<String>) -> Self {
        self.guest_name = Some(name.into());
        self
    }

    /// Sets a replacement guest surname.
    #[must_use]
    pub fn with_guest_surname(mut self, surname: impl Into<String>) -> Self {
        self.guest_surname = Some(surname.into());
        self
    }

    /// Sets a replacement contact email.
    #[must_use]
    pub fn with_guest_email(mut self, email: impl Into<String>) -> Self {
        self.guest_email = Some(email.into());
        self
    }

    /// Sets a replacement contact phone number.
    #[must_use]
    pub fn with_guest_phone(mut self, phone: impl Into<String>) -> Self {
        self.guest_phone = Some(phone.into());
        self
    }

    /// Pins the date treated as "today".
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Whether the patch carries no changes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interval.is_none()
            && self.guest_name.is_none()
            && self.guest_surname.is_none()
            && self.guest_email.is_none()
            && self.guest_phone.is_none()
    }
}

/// Planner for booking modification.
#[derive(Debug, Clone)]
pub struct ModifyPlan {
    options: ModifyOptions,
}

impl ModifyPlan {
    /// Creates a modification planner from options.
    #[must_use]
    pub fn new(options: ModifyOptions) -> Self {
        Self { options }
    }

    /// Validates the patch against the stored booking and produces the
    /// plan.
    ///
    /// The rewritten booking keeps its room and creation timestamp. The
    /// no-overlap check for a date change happens at execution time, in
    /// the same transaction as the rewrite.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the code is not in the ledger
    /// - `Validation` if a patched field fails the creation rules, or a
    ///   new check-in date is in the past
    /// - `Database` on storage failures
    pub fn build_plan(&self, db: &mut Database) -> Result<OperationPlan> {
        let current = Database::get_booking(db.connection(), &self.options.code)?.ok_or_else(
            || Error::NotFound {
                resource: format!("booking {}", self.options.code),
            },
        )?;

        if self.options.is_empty() {
            return Ok(OperationPlan::new(format!(
                "Modify booking {}",
                self.options.code
            ))
            .add_warning("no changes requested"));
        }

        let interval = self.options.interval.unwrap_or(current.interval);
        if self.options.interval.is_some() {
            let today = self
                .options
                .reference_date
                .unwrap_or_else(|| Local::now().date_naive());
            if interval.start() < today {
                return Err(Error::Validation {
                    field: "check-in".into(),
                    message: format!(
                        "check-in {} is in the past (today is {today})",
                        interval.start()
                    ),
                });
            }
        }

        let guest = Guest::new(
            self.options
                .guest_name
                .as_deref()
                .unwrap_or_else(|| current.guest.name()),
            self.options
                .guest_surname
                .as_deref()
                .unwrap_or_else(|| current.guest.surname()),
            self.options
                .guest_email
                .as_deref()
                .unwrap_or_else(|| current.guest.email()),
            self.options
                .guest_phone
                .as_deref()
                .unwrap_or_else(|| current.guest.phone()),
        )?;

        let updated = Booking::builder(current.code.clone(), current.room_id, interval)
            .guest(&guest)
            .created_at(current.created_at)
            .build()?;

        Ok(OperationPlan::new(format!(
            "Modify booking {} (room {}, {})",
            updated.code, updated.room_id, updated.interval
        ))
        .add_action(PlanAction::UpdateBooking(updated)))
    }
}

/// Plans and executes a modification in one call.
///
/// # Errors
///
/// Same as [`ModifyPlan::build_plan`], plus `BookingConflict` when the
/// new dates overlap another booking of the room.
pub fn modify_booking(db: &mut Database, options: ModifyOptions) -> Result<Booking> {
    let code = options.code.clone();
    let plan = ModifyPlan::new(options).build_plan(db)?;
    PlanExecutor::new(db).execute(&plan)?;
    Database::get_booking(db.connection(), &code)?.ok_or_else(|| Error::NotFound {
        resource: format!("booking {code}"),
    })
}
