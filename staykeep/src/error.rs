//! Error types for the staykeep library.
//!
//! This module provides the error hierarchy for all booking and inventory
//! operations, using `thiserror` for ergonomic error handling.
//!
//! "Not available" outcomes of read-side queries are expressed as
//! `bool`/`Option` returns by the availability resolver; the variants here
//! are reserved for operations that must refuse to proceed (bad input,
//! missing records, lost races, storage failures).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a staykeep error.
///
/// # Examples
///
/// ```
/// use staykeep::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the staykeep library.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred (malformed dates, empty required field,
    /// invalid email or phone shape).
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested room or booking was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// No room of the requested type is free for the requested dates.
    ///
    /// This is an expected outcome of a full hotel, not a system fault.
    #[error("no availability: {reason}")]
    NoAvailability {
        /// Why no room could be assigned.
        reason: String,
    },

    /// A write would violate the one-booking-per-room-per-night invariant,
    /// typically because a concurrent writer won the room first.
    #[error("booking conflict: {details}")]
    BookingConflict {
        /// Details about the conflicting interval.
        details: String,
    },

    /// Booking code generation exhausted its retry budget without finding
    /// an unused code.
    #[error("could not generate a unique booking code after {attempts} attempts")]
    CodeSpaceExhausted {
        /// Number of generation attempts made.
        attempts: u32,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

impl From<crate::interval::InvalidIntervalError> for Error {
    fn from(err: crate::interval::InvalidIntervalError) -> Self {
        Self::Validation {
            field: "interval".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::booking::ValidationError> for Error {
    fn from(err: crate::booking::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::room::InvalidRoomFieldError> for Error {
    fn from(err: crate::room::InvalidRoomFieldError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error indicates a missing room or booking.
    ///
    /// # Examples
    ///
    /// ```
    /// use staykeep::Error;
    ///
    /// let err = Error::NotFound { resource: "booking AB12CD".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error is the expected "hotel is full" outcome.
    #[must_use]
    pub fn is_no_availability(&self) -> bool {
        matches!(self, Self::NoAvailability { .. })
    }

    /// Check if the error is an overlap conflict on a specific room.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::BookingConflict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = Error::Validation {
            field: "email".to_string(),
            message: "must contain '@'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("email"));
        assert!(display.contains("must contain '@'"));
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            resource: "room 17".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("room 17"));
        assert!(err.is_not_found());
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_no_availability_error() {
        let err = Error::NoAvailability {
            reason: "all double rooms are booked for 2026-07-01..2026-07-04".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("no availability"));
        assert!(display.contains("double"));
        assert!(err.is_no_availability());
    }

    #[test]
    fn test_booking_conflict_error() {
        let err = Error::BookingConflict {
            details: "room 3 already has a booking overlapping 2026-07-01..2026-07-04".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("booking conflict"));
        assert!(err.is_conflict());
    }

    #[test]
    fn test_code_space_exhausted_error() {
        let err = Error::CodeSpaceExhausted { attempts: 16 };
        let display = format!("{err}");
        assert!(display.contains("16"));
        assert!(display.contains("booking code"));
    }

    #[test]
    fn test_data_directory_not_found_error() {
        let err = Error::DataDirectoryNotFound {
            path: PathBuf::from("/home/user/.staykeep"),
        };
        let display = format!("{err}");
        assert!(display.contains("data directory not found"));
        assert!(display.contains(".staykeep"));
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Err(Error::NotFound {
                resource: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
