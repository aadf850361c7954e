//! Configuration file discovery and loading.
//!
//! The user configuration lives at `config.yaml` inside the data
//! directory (`~/.staykeep` by default, or wherever `STAYKEEP_DATA_DIR`
//! points).

use std::fs;
use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Loads configuration from the data directory.
///
/// # Examples
///
/// ```no_run
/// use staykeep::config::ConfigLoader;
///
/// let config = ConfigLoader::load_user_config(None).unwrap();
/// println!("{config:?}");
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the user configuration file, if one exists.
    ///
    /// If `data_dir` is provided, loads from `{data_dir}/config.yaml`.
    /// Otherwise uses the default data directory. A missing file is not
    /// an error; it yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if the default data directory cannot be determined.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Option<Config>> {
        let config_path = match data_dir {
            Some(dir) => dir.join("config.yaml"),
            None => crate::database::default_data_dir()?.join("config.yaml"),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        Self::load_file(&config_path).map(Some)
    }

    /// Loads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        assert!(ConfigLoader::load_file(&config_path).is_err());
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "code_attempts: 24\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.code_attempts, Some(24));
    }

    #[test]
    fn test_missing_user_config_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = ConfigLoader::load_user_config(Some(temp_dir.path())).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_user_config_from_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.yaml"),
            "busy_timeout_ms: 250\n",
        )
        .unwrap();

        let loaded = ConfigLoader::load_user_config(Some(temp_dir.path()))
            .unwrap()
            .unwrap();
        assert_eq!(loaded.busy_timeout_ms, Some(250));
    }
}
