//! Booking cancellation operation.
//!
//! Cancellation removes the booking row outright, freeing its nights
//! for new bookings. A second cancel of the same code reports the
//! booking as not found.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::BookingCode;

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Planner for booking cancellation.
#[derive(Debug, Clone)]
pub struct CancelPlan {
    code: BookingCode,
}

impl CancelPlan {
    /// Creates a cancellation planner for a confirmation code.
    #[must_use]
    pub const fn new(code: BookingCode) -> Self {
        Self { code }
    }

    /// Checks the booking exists and produces the plan.
    ///
    /// The existence check repeats inside the delete transaction, so a
    /// concurrent cancel between planning and execution still surfaces
    /// as `NotFound` rather than a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the code is not in the ledger, or a
    /// database error if the lookup fails.
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let booking =
            Database::get_booking(db.connection(), &self.code)?.ok_or_else(|| Error::NotFound {
                resource: format!("booking {}", self.code),
            })?;

        Ok(OperationPlan::new(format!(
            "Cancel booking {} (room {}, {})",
            booking.code, booking.room_id, booking.interval
        ))
        .add_action(PlanAction::CancelBooking(booking.code)))
    }
}

/// Plans and executes a cancellation in one call.
///
/// # Errors
///
/// Returns `NotFound` if the code is not in the ledger, or a database
/// error if the delete fails.
pub fn cancel_booking(db: &mut Database, code: &BookingCode) -> Result<()> {
    let plan = CancelPlan::new(code.clone()).build_plan(db)?;
    PlanExecutor::new(db).execute(&plan)?;
    Ok(())
}
