//! Leveled stderr logging.
//!
//! Diagnostics go to stderr so command output (confirmation codes, room
//! ids, JSON) stays clean on stdout and composes in shell pipelines.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Output verbosity, ordered from least to most.
///
/// # Examples
///
/// ```
/// use staykeep::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// let level: LogLevel = "verbose".parse().unwrap();
/// assert_eq!(level, LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Accepts "quiet", "normal", or "verbose", case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr logger that drops messages below its level.
///
/// # Examples
///
/// ```
/// use staykeep::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("room 12 has no bookings but a custom rate");
/// logger.debug("code collision on attempt 1, regenerating"); // dropped
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error. Shown unless the level is `Quiet`.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning. Shown unless the level is `Quiet`.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message. `Verbose` only.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message. `Verbose` only.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds a logger from CLI flags and the environment.
///
/// Precedence: the `verbose`/`quiet` flags (verbose wins if both are
/// set), then `STAYKEEP_LOG_MODE`, then `Normal`. An unparseable
/// environment value is ignored.
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let from_env = env::var("STAYKEEP_LOG_MODE")
        .ok()
        .and_then(|value| value.parse().ok());

    Logger::new(from_env.unwrap_or(LogLevel::Normal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
    }

    #[test]
    fn test_level_round_trips_through_display() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            let parsed: LogLevel = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
        assert_eq!("Normal".parse::<LogLevel>().unwrap(), LogLevel::Normal);
        assert!("loud".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_logger_default_is_normal() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_init_logger_flag_precedence() {
        assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        // verbose wins when both are set
        assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
    }

    // The env-driven path is covered by CLI integration tests, where the
    // variable can be set per spawned process instead of per test thread.
}
