//! Plan types for booking and inventory operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::{Booking, BookingCode, Room, RoomId};

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific database operation that will
/// be performed when the plan is executed.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanAction {
    /// Insert a new booking into the ledger.
    InsertBooking(Booking),

    /// Rewrite an existing booking (date and/or contact change).
    UpdateBooking(Booking),

    /// Remove a booking from the ledger.
    CancelBooking(BookingCode),

    /// Add a room to the inventory.
    AddRoom(Room),

    /// Rewrite a room's type and rate.
    UpdateRoom(Room),

    /// Remove a room and every booking attached to it.
    RemoveRoom(RoomId),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InsertBooking(b) => {
                format!(
                    "Book room {} for {} ({})",
                    b.room_id, b.interval, b.code
                )
            }
            Self::UpdateBooking(b) => {
                format!(
                    "Update booking {} to room {} for {}",
                    b.code, b.room_id, b.interval
                )
            }
            Self::CancelBooking(code) => {
                format!("Cancel booking {code}")
            }
            Self::AddRoom(room) => {
                format!(
                    "Add room {} ({}, {} per night)",
                    room.id, room.room_type, room.nightly_rate
                )
            }
            Self::UpdateRoom(room) => {
                format!(
                    "Update room {} to {} at {} per night",
                    room.id, room.room_type, room.nightly_rate
                )
            }
            Self::RemoveRoom(id) => {
                format!("Remove room {id} and its bookings")
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use staykeep::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book a double room");
    /// assert_eq!(plan.description, "Book a double room");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use staykeep::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Test")
    ///     .add_warning("This is a warning");
    ///
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}


#[cfg(all(test, feature = "property-tests"))]
mod proptests {
    use super::*;
    use crate::database::test_util::test_booking;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_actions_preserve_order(count in 0usize..8) {
            let mut plan = OperationPlan::new("test");
            for _ in 0..count {
                let booking = test_booking("AB12CD", 1, "2026-07-01", "2026-07-04");
                plan = plan.add_action(PlanAction::InsertBooking(booking));
            }
            prop_assert_eq!(plan.len(), count);
            prop_assert_eq!(plan.is_empty(), count == 0);
        }

        #[test]
        fn prop_warnings_preserve_order(w1 in "[a-z]{5,10}", w2 in "[A-Z]{5,10}") {
            let plan = OperationPlan::new("test")
                .add_warning(w1.clone())
                .add_warning(w2.clone());
            prop_assert_eq!(&plan.warnings[0], &w1);
            prop_assert_eq!(&plan.warnings[1], &w2);
        }

        #[test]
        fn prop_action_descriptions_nonempty(room_id in 1i64..500) {
            let booking = test_booking("AB12CD", room_id, "2026-07-01", "2026-07-04");
            let actions = vec![
                PlanAction::InsertBooking(booking.clone()),
                PlanAction::UpdateBooking(booking.clone()),
                PlanAction::CancelBooking(booking.code.clone()),
                PlanAction::RemoveRoom(booking.room_id),
            ];
            for action in actions {
                prop_assert!(!action.description().is_empty());
            }
        }
    }
}
