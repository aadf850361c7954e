//! Data directory initialization.
//!
//! Explicit setup of the staykeep data directory and database, with
//! optional creation of a starter configuration file.

use std::fs;
use std::path::PathBuf;

use crate::database::{Database, DatabaseConfig};
use crate::error::{Error, Result};

/// Options for data directory initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Overwrite an existing database.
    pub overwrite: bool,
    /// Create a starter configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create a starter configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// Result of initialization.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Starter configuration template.
const DEFAULT_CONFIG_TEMPLATE: &str = r"# Staykeep Configuration File
# See documentation for available options

# Room type priority used when no type is requested
# (first free type in this order wins)
# room_type_priority:
#   - single
#   - double
#   - deluxe
#   - suite

# Booking code generation attempts before giving up (default: 16)
# code_attempts: 16

# Database busy timeout in milliseconds (default: 5000)
# busy_timeout_ms: 5000
";

/// Initializes the staykeep data directory and database.
///
/// Creates the data directory if needed, opens (and thereby creates)
/// the database, and optionally writes a starter configuration file.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database cannot be initialized
/// - The configuration file cannot be written
/// - Overwrite is false and the database already exists
///
/// # Examples
///
/// ```no_run
/// use staykeep::operations::init::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/staykeep-test"))
///     .with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// println!("Database created: {}", result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join("staykeep.db");
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Use --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    if db_exists && options.overwrite {
        fs::remove_file(&db_path)?;
    }

    let db_config = DatabaseConfig::new(&db_path);
    let _db = Database::open(db_config)?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.data_dir.join("config.yaml");

        // Never clobber an existing config
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("staykeep");

        let result = init_database(&InitOptions::new(data_dir.clone())).unwrap();

        assert!(result.data_dir_created);
        assert!(result.database_created);
        assert!(!result.config_created);
        assert!(data_dir.join("staykeep.db").exists());
    }

    #[test]
    fn test_init_existing_directory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().to_path_buf();

        let result = init_database(&InitOptions::new(data_dir.clone())).unwrap();

        assert!(!result.data_dir_created);
        assert!(result.database_created);
        assert!(data_dir.join("staykeep.db").exists());
    }

    #[test]
    fn test_init_with_config() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("staykeep");

        let options = InitOptions::new(data_dir.clone()).with_create_config(true);
        let result = init_database(&options).unwrap();

        assert!(result.config_created);
        let content = fs::read_to_string(data_dir.join("config.yaml")).unwrap();
        assert!(content.contains("Staykeep Configuration File"));
    }

    #[test]
    fn test_init_fails_without_overwrite() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("staykeep");

        init_database(&InitOptions::new(data_dir.clone())).unwrap();
        let err = init_database(&InitOptions::new(data_dir)).unwrap_err();

        match err {
            Error::Validation { field, message } => {
                assert_eq!(field, "database");
                assert!(message.contains("already exists"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_init_with_overwrite() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("staykeep");

        init_database(&InitOptions::new(data_dir.clone())).unwrap();
        let options = InitOptions::new(data_dir.clone()).with_overwrite(true);
        let result = init_database(&options).unwrap();

        assert!(result.database_created);
        assert!(data_dir.join("staykeep.db").exists());
    }

    #[test]
    fn test_init_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("staykeep");

        fs::create_dir_all(&data_dir).unwrap();
        let config_path = data_dir.join("config.yaml");
        fs::write(&config_path, "custom config").unwrap();

        let options = InitOptions::new(data_dir).with_create_config(true);
        let result = init_database(&options).unwrap();

        assert!(!result.config_created);
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "custom config");
    }
}
