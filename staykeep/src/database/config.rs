//! Connection parameters and data directory resolution.
//!
//! Every command works against a single `SQLite` file, normally
//! `staykeep.db` inside the data directory. This module carries the
//! knobs for opening that file and the rules for finding it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Parameters for opening the booking database.
///
/// The only tunable beyond the file path is the busy timeout: several
/// CLI invocations may write the ledger at once, and a writer that hits
/// the `SQLite` lock waits this long before giving up.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use staykeep::database::DatabaseConfig;
///
/// let config = DatabaseConfig::new("/srv/hotel/staykeep.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long a writer waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a configuration with the default 5 second busy timeout.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
        }
    }

    /// Sets the busy timeout.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

/// Returns the default data directory, `~/.staykeep`.
///
/// # Errors
///
/// Returns a validation error if the home directory cannot be
/// determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".staykeep"))
}

/// Resolves the database file path.
///
/// `$STAYKEEP_DATA_DIR/staykeep.db` when the variable is set, otherwise
/// `staykeep.db` under [`default_data_dir`].
///
/// # Errors
///
/// Returns an error if neither the variable nor the home directory is
/// available.
pub fn resolve_database_path() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var("STAYKEEP_DATA_DIR") {
        Ok(PathBuf::from(data_dir).join("staykeep.db"))
    } else {
        Ok(default_data_dir()?.join("staykeep.db"))
    }
}
