//! Room inventory operations.
//!
//! Inventory changes are planned the same way bookings are: validate,
//! produce a plan, execute. Removing a room warns about the bookings
//! the cascade will take with it.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::{NightlyRate, Room, RoomId, RoomType};

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Options for adding a room to the inventory.
#[derive(Debug, Clone)]
pub struct AddRoomOptions {
    /// The room number.
    pub id: RoomId,
    /// The room's type.
    pub room_type: RoomType,
    /// Nightly rate; falls back to the type's default when unset.
    pub nightly_rate: Option<NightlyRate>,
}

impl AddRoomOptions {
    /// Creates options for a room with the type's default rate.
    #[must_use]
    pub const fn new(id: RoomId, room_type: RoomType) -> Self {
        Self {
            id,
            room_type,
            nightly_rate: None,
        }
    }

    /// Sets an explicit nightly rate.
    #[must_use]
    pub const fn with_nightly_rate(mut self, rate: NightlyRate) -> Self {
        self.nightly_rate = Some(rate);
        self
    }

    /// Validates the options and produces the plan.
    ///
    /// # Errors
    ///
    /// - `Validation` if the room number is taken, or the type has no
    ///   default rate and none was given
    /// - `Database` on storage failures
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        if Database::get_room(db.connection(), self.id)?.is_some() {
            return Err(Error::Validation {
                field: "room".into(),
                message: format!("room {} already exists", self.id),
            });
        }

        let room = Room::new(self.id, self.room_type.clone(), self.nightly_rate)?;
        Ok(OperationPlan::new(format!(
            "Add room {} ({})",
            room.id, room.room_type
        ))
        .add_action(PlanAction::AddRoom(room)))
    }
}

/// Options for rewriting a room's type and rate.
#[derive(Debug, Clone)]
pub struct UpdateRoomOptions {
    /// The room number.
    pub id: RoomId,
    /// Replacement type; keeps the current type when unset.
    pub room_type: Option<RoomType>,
    /// Replacement nightly rate; keeps the current rate when unset.
    pub nightly_rate: Option<NightlyRate>,
}

impl UpdateRoomOptions {
    /// Creates an empty patch for a room.
    #[must_use]
    pub const fn new(id: RoomId) -> Self {
        Self {
            id,
            room_type: None,
            nightly_rate: None,
        }
    }

    /// Sets a replacement room type.
    #[must_use]
    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Sets a replacement nightly rate.
    #[must_use]
    pub const fn with_nightly_rate(mut self, rate: NightlyRate) -> Self {
        self.nightly_rate = Some(rate);
        self
    }

    /// Validates the patch against the stored room and produces the plan.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the room does not exist, or a database
    /// error if the lookup fails.
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let current =
            Database::get_room(db.connection(), self.id)?.ok_or_else(|| Error::NotFound {
                resource: format!("room {}", self.id),
            })?;

        let room = Room {
            id: current.id,
            room_type: self.room_type.clone().unwrap_or(current.room_type),
            nightly_rate: self.nightly_rate.unwrap_or(current.nightly_rate),
        };

        Ok(OperationPlan::new(format!(
            "Update room {} to {} at {} per night",
            room.id, room.room_type, room.nightly_rate
        ))
        .add_action(PlanAction::UpdateRoom(room)))
    }
}

/// Plans the removal of a room and its bookings.
///
/// The plan carries a warning naming how many bookings the cascade will
/// remove, so callers can show it before committing.
///
/// # Errors
///
/// Returns `NotFound` if the room does not exist, or a database error
/// if the lookup fails.
pub fn plan_remove_room(db: &Database, id: RoomId) -> Result<OperationPlan> {
    let room = Database::get_room(db.connection(), id)?.ok_or_else(|| Error::NotFound {
        resource: format!("room {id}"),
    })?;

    let bookings = Database::bookings_for_room(db.connection(), id)?;
    let mut plan = OperationPlan::new(format!("Remove room {} ({})", room.id, room.room_type))
        .add_action(PlanAction::RemoveRoom(id));
    if !bookings.is_empty() {
        plan = plan.add_warning(format!(
            "removing room {} also cancels {} booking(s)",
            id,
            bookings.len()
        ));
    }
    Ok(plan)
}

/// Adds a room in one call.
///
/// # Errors
///
/// Same as [`AddRoomOptions::build_plan`].
pub fn add_room(db: &mut Database, options: &AddRoomOptions) -> Result<Room> {
    let plan = options.build_plan(db)?;
    PlanExecutor::new(db).execute(&plan)?;
    Database::get_room(db.connection(), options.id)?.ok_or_else(|| Error::NotFound {
        resource: format!("room {}", options.id),
    })
}

/// Removes a room and its bookings in one call.
///
/// # Errors
///
/// Same as [`plan_remove_room`].
pub fn remove_room(db: &mut Database, id: RoomId) -> Result<()> {
    let plan = plan_remove_room(db, id)?;
    PlanExecutor::new(db).execute(&plan)?;
    Ok(())
}
