//! Configuration builder.
//!
//! Assembles the effective configuration from files, environment
//! variables, and programmatic overrides.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Builds the effective configuration.
///
/// Sources are merged with the following precedence (highest to
/// lowest):
///
/// 1. Programmatic overrides (via `with_config`)
/// 2. Environment variables (STAYKEEP_*)
/// 3. User config (`{data_dir}/config.yaml`)
/// 4. Built-in defaults
///
/// # Examples
///
/// ```
/// use staykeep::config::{Config, ConfigBuilder};
///
/// let custom = Config {
///     code_attempts: Some(32),
///     ..Default::default()
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.effective_code_attempts(), 32);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the user config from a specific data directory instead of
    /// the default.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: &Path) -> Self {
        self.data_dir = Some(data_dir.to_path_buf());
        self
    }

    /// Skips loading configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed,
    /// an environment variable value is invalid, or the merged result
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(file_config) = ConfigLoader::load_user_config(self.data_dir.as_deref())? {
                config = config.merged_with(file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config = config.merged_with(overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &Config) -> Result<()> {
        if config.code_attempts == Some(0) {
            return Err(Error::Validation {
                field: "code_attempts".into(),
                message: "Must be at least 1".into(),
            });
        }

        if let Some(priority) = &config.room_type_priority {
            if priority.is_empty() {
                return Err(Error::Validation {
                    field: "room_type_priority".into(),
                    message: "Must name at least one room type".into(),
                });
            }
        }

        Ok(())
    }
}
