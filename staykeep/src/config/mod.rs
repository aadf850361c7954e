//! Configuration system for staykeep.
//!
//! This module provides configuration with support for:
//! - A YAML configuration file in the data directory
//! - Environment variable overrides (STAYKEEP_*)
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (STAYKEEP_*)
//! 3. User config (`~/.staykeep/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use staykeep::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("code attempts: {}", config.effective_code_attempts());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, OutputFormat, DEFAULT_BUSY_TIMEOUT_MS};
