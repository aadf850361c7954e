//! CLI error type and exit code mapping.
//!
//! Script callers branch on exit codes, so the mapping is part of the
//! interface: 1 means the request was understood but could not be
//! satisfied (unknown code, no free room, lost race), everything else
//! signals a usage or environment problem.

use std::fmt;

use staykeep::Error as LibError;

/// An error surfaced by a CLI command.
#[derive(Debug)]
pub enum CliError {
    /// An error from the booking library.
    Library(LibError),

    /// The command line itself was malformed.
    InvalidArguments(String),

    /// An I/O failure outside the library.
    Io(std::io::Error),

    /// The database lock could not be acquired in time.
    Timeout,

    /// The configuration could not be loaded or validated.
    Config(String),

    /// The request was valid but cannot be satisfied, such as probing a
    /// fully booked range.
    SemanticFailure(String),
}

impl CliError {
    /// Maps the error to the process exit code.
    ///
    /// - 1: semantic failure (not found, no availability, conflict)
    /// - 2: lock timeout
    /// - 4: invalid arguments
    /// - 5: I/O error
    /// - 6: other library error
    /// - 7: configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SemanticFailure(_) => 1,
            Self::Library(lib_err) => match lib_err {
                LibError::NotFound { .. }
                | LibError::NoAvailability { .. }
                | LibError::BookingConflict { .. } => 1,
                _ => 6,
            },
            Self::Timeout => 2,
            Self::InvalidArguments(_) => 4,
            Self::Io(_) => 5,
            Self::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library(e) => write!(f, "{e}"),
            Self::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Timeout => write!(f, "Timeout waiting for database lock"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Library(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if matches!(e, LibError::LockTimeout { .. }) {
            Self::Timeout
        } else {
            Self::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_outcomes_exit_one() {
        let not_found = CliError::from(LibError::NotFound {
            resource: "booking AB12CD".into(),
        });
        let full = CliError::from(LibError::NoAvailability {
            reason: "no double room is free".into(),
        });
        let lost_race = CliError::from(LibError::BookingConflict {
            details: "room 3 was booked by another writer".into(),
        });
        assert_eq!(not_found.exit_code(), 1);
        assert_eq!(full.exit_code(), 1);
        assert_eq!(lost_race.exit_code(), 1);
        assert_eq!(CliError::SemanticFailure("fully booked".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_library_errors_exit_six() {
        let validation = CliError::from(LibError::Validation {
            field: "email".into(),
            message: "must contain '@'".into(),
        });
        assert_eq!(validation.exit_code(), 6);
    }

    #[test]
    fn test_lock_timeout_becomes_timeout() {
        let err = CliError::from(LibError::LockTimeout { seconds: 5 });
        assert!(matches!(err, CliError::Timeout));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_usage_and_environment_codes() {
        assert_eq!(CliError::InvalidArguments("bad date".into()).exit_code(), 4);
        let io = CliError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 5);
        assert_eq!(CliError::Config("bad yaml".into()).exit_code(), 7);
    }
}
