//! Database layer for persistent storage of rooms and bookings.
//!
//! This module provides a SQLite-based storage layer for the room
//! inventory and the booking ledger, including connection management,
//! schema versioning, and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use staykeep::database::{Database, DatabaseConfig};
//! use staykeep::{Room, RoomId, RoomType};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/staykeep.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Add a room to the inventory
//! let room = Room::new(RoomId::try_from(101).unwrap(), RoomType::Double, None).unwrap();
//! db.create_room(&room).unwrap();
//!
//! // List all bookings
//! let all = Database::list_bookings(db.connection()).unwrap();
//! for booking in all {
//!     println!("{:?}", booking);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
