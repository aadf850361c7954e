//! Booking lifecycle operations using the plan-execute pattern.
//!
//! This module provides a plan-execute pattern for booking and
//! inventory operations, separating planning from execution to enable
//! dry-run mode, better testing, and clear error messages.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: Analyzes the request, validates constraints, builds a plan
//! 2. **Execution**: Takes the plan and performs actual database operations
//!
//! The no-overlap invariant is not settled at planning time: booking
//! inserts and rewrites re-check it inside a single write transaction
//! during execution, so two racing writers cannot both win a room.
//!
//! # Examples
//!
//! ```no_run
//! use staykeep::database::{Database, DatabaseConfig};
//! use staykeep::operations::{BookOptions, BookPlan, PlanExecutor};
//! use staykeep::{Guest, RoomType, StayInterval};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/staykeep.db")).unwrap();
//! let interval = StayInterval::new(
//!     "2026-07-01".parse().unwrap(),
//!     "2026-07-04".parse().unwrap(),
//! ).unwrap();
//! let guest = Guest::new("Ada", "Lovelace", "ada@example.com", "07700900123").unwrap();
//!
//! // Generate plan
//! let options = BookOptions::new(RoomType::Double, interval, guest);
//! let plan = BookPlan::new(options).build_plan(&mut db).unwrap();
//!
//! // Execute plan
//! let mut executor = PlanExecutor::new(&mut db);
//! let result = executor.execute(&plan).unwrap();
//! ```

pub mod amend;
pub mod book;
pub mod cancel;
pub mod executor;
pub mod init;
pub mod plan;
pub mod quote;
pub mod rooms;

pub use amend::{modify_booking, ModifyOptions, ModifyPlan};
pub use book::{create_booking, generate_unique_code, BookOptions, BookPlan, DEFAULT_CODE_ATTEMPTS};
pub use cancel::{cancel_booking, CancelPlan};
pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use plan::{OperationPlan, PlanAction};
pub use quote::{price_quote, Quote};
pub use rooms::{add_room, plan_remove_room, remove_room, AddRoomOptions, UpdateRoomOptions};
