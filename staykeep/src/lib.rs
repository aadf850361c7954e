#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # staykeep
//!
//! A library for managing hotel room inventory and bookings.
//!
//! This library provides core types and functionality for tracking
//! rooms, resolving availability over date ranges, and running the
//! booking lifecycle (create, modify, cancel, quote) against a SQLite
//! ledger that never holds two overlapping bookings for the same room.
//!
//! ## Core Types
//!
//! - [`StayInterval`]: Half-open `[check-in, check-out)` date range
//! - [`Room`], [`RoomId`], [`RoomType`], [`NightlyRate`]: Room inventory
//! - [`Booking`], [`BookingCode`], [`Guest`]: The booking ledger
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use staykeep::StayInterval;
//!
//! let stay = StayInterval::new(
//!     "2026-07-01".parse().unwrap(),
//!     "2026-07-04".parse().unwrap(),
//! ).unwrap();
//! assert_eq!(stay.nights(), 3);
//!
//! let next = StayInterval::new(
//!     "2026-07-04".parse().unwrap(),
//!     "2026-07-06".parse().unwrap(),
//! ).unwrap();
//! // Check-out day is free for the next check-in
//! assert!(!stay.overlaps(&next));
//! ```

pub mod availability;
pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod interval;
pub mod logging;
pub mod operations;
pub mod room;

// Re-export key types at crate root for convenience
pub use availability::RoomAvailability;
pub use booking::{Booking, BookingBuilder, BookingCode, Guest, ValidationError};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use interval::{InvalidIntervalError, StayInterval};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    cancel_booking, create_booking, modify_booking, price_quote, BookOptions, BookPlan,
    CancelPlan, ExecutionResult, ModifyOptions, ModifyPlan, OperationPlan, PlanAction,
    PlanExecutor, Quote,
};
pub use room::{InvalidRoomFieldError, NightlyRate, Room, RoomId, RoomType};
