//! Database connection management.
//!
//! One `Database` owns one `SQLite` connection. WAL journaling lets
//! concurrent processes read the ledger while a writer holds the lock,
//! and the busy timeout bounds how long a contending writer waits.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// An open handle on the booking database.
///
/// Read queries borrow the connection through [`Database::connection`];
/// writes take `&mut self`, so two transactions cannot interleave on the
/// same handle.
///
/// # Examples
///
/// ```no_run
/// use staykeep::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/srv/hotel/staykeep.db")).unwrap();
/// let rooms = Database::list_rooms(db.connection()).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
}

impl Database {
    /// Opens the database file, creating it and its parent directory on
    /// first use.
    ///
    /// The connection comes up in WAL mode with `synchronous = NORMAL`
    /// and the configured busy timeout, and the schema is initialized or
    /// version-checked before the handle is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be created,
    /// a PRAGMA fails, or the file carries an unsupported schema
    /// version.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&config.path, flags)?;

        // journal_mode is a query: it reports the mode that took effect
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {}",
            config.busy_timeout.as_millis()
        ))?;

        super::migrations::check_schema_compatibility(&conn)?;

        Ok(Self { conn })
    }

    /// Borrows the underlying connection for read queries.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Borrows the connection mutably, for transactions.
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}
