//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the database.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::BookingCode;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The booking code the plan created or rewrote (if applicable).
    pub booking_code: Option<BookingCode>,
}

impl ExecutionResult {
    /// Creates a successful execution result.
    fn success(plan: &OperationPlan) -> Self {
        Self {
            success: true,
            dry_run: false,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            booking_code: extract_booking_code(plan),
        }
    }

    /// Creates a dry-run execution result.
    fn dry_run(plan: &OperationPlan) -> Self {
        Self {
            success: true,
            dry_run: true,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            booking_code: extract_booking_code(plan),
        }
    }
}

/// Extracts the booking code from a plan's actions.
///
/// This is used to return the confirmation code to the caller.
fn extract_booking_code(plan: &OperationPlan) -> Option<BookingCode> {
    for action in &plan.actions {
        match action {
            PlanAction::InsertBooking(b) | PlanAction::UpdateBooking(b) => {
                return Some(b.code.clone());
            }
            PlanAction::CancelBooking(code) => {
                return Some(code.clone());
            }
            PlanAction::AddRoom(_) | PlanAction::UpdateRoom(_) | PlanAction::RemoveRoom(_) => {
                // Inventory actions carry no booking code
            }
        }
    }
    None
}

/// Executes operation plans against the database.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (validating without changes).
///
/// # Examples
///
/// ```no_run
/// use staykeep::database::{Database, DatabaseConfig};
/// use staykeep::operations::{OperationPlan, PlanExecutor};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/staykeep.db")).unwrap();
/// let plan = OperationPlan::new("Test operation");
///
/// // Normal execution
/// let mut executor = PlanExecutor::new(&mut db);
/// let result = executor.execute(&plan).unwrap();
/// assert!(result.success);
///
/// // Dry-run execution
/// let mut executor = PlanExecutor::new(&mut db).dry_run();
/// let result = executor.execute(&plan).unwrap();
/// assert!(result.dry_run);
/// ```
pub struct PlanExecutor<'a> {
    db: &'a mut Database,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(db: &'a mut Database) -> Self {
        Self { db, dry_run: false }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor validates the plan but does not
    /// actually modify the database.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// If in dry-run mode, validates the plan but makes no database changes.
    /// Otherwise, applies all actions in the plan to the database.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute. An
    /// `InsertBooking` fails with `BookingConflict` when a concurrent
    /// writer took the room between planning and execution.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            return Ok(ExecutionResult::dry_run(plan));
        }

        for action in &plan.actions {
            self.execute_action(action)?;
        }

        Ok(ExecutionResult::success(plan))
    }

    /// Executes a single action.
    fn execute_action(&mut self, action: &PlanAction) -> Result<()> {
        match action {
            PlanAction::InsertBooking(booking) => {
                // The atomic check-and-insert closes the planning/execution
                // window: whoever commits first owns the room.
                let inserted = self.db.try_insert_booking(booking)?;
                if !inserted {
                    return Err(Error::BookingConflict {
                        details: format!(
                            "room {} was booked by another writer for {}",
                            booking.room_id, booking.interval
                        ),
                    });
                }
                Ok(())
            }
            PlanAction::UpdateBooking(booking) => {
                let updated = self.db.try_update_booking(booking)?;
                if !updated {
                    return Err(Error::BookingConflict {
                        details: format!(
                            "room {} already has a booking overlapping {}",
                            booking.room_id, booking.interval
                        ),
                    });
                }
                Ok(())
            }
            PlanAction::CancelBooking(code) => {
                let deleted = self.db.delete_booking(code)?;
                if !deleted {
                    return Err(Error::NotFound {
                        resource: format!("booking {code}"),
                    });
                }
                Ok(())
            }
            PlanAction::AddRoom(room) => self.db.create_room(room),
            PlanAction::UpdateRoom(room) => {
                let updated = self.db.update_room(room)?;
                if !updated {
                    return Err(Error::NotFound {
                        resource: format!("room {}", room.id),
                    });
                }
                Ok(())
            }
            PlanAction::RemoveRoom(id) => {
                let removed = self.db.delete_room_cascade(*id)?;
                if removed.is_none() {
                    return Err(Error::NotFound {
                        resource: format!("room {id}"),
                    });
                }
                Ok(())
            }
        }
    }
}
