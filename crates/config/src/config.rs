//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the anchor application.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::journal::JournalConfig;
use crate::log::LogConfig;
use crate::persistence::{load_json5, locate_config, store_json};
use crate::planner::PlannerConfig;
use crate::profile::ProfileConfig;

/// The main configuration struct for the anchor application.
///
/// Every section is optional in the file; missing sections take their
/// defaults.
///
/// # Examples
///
/// ```
/// use anchor_config::{Config, PlannerConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert!(!config.journal.is_enabled());
///
/// // Create a custom config
/// let config = Config {
///     planner: PlannerConfig::with_hours(7, 22),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Who signs in, and whether that happens automatically.
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Hours shown by the weekly planner.
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Where the store is persisted, if anywhere.
    #[serde(default)]
    pub journal: JournalConfig,

    /// Log file settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./anchor.json5` or `./anchor.json`
    /// 2. User: `~/.config/anchor/config.json5` or `~/.config/anchor/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use anchor_config::Config;
    ///
    /// # async fn example() -> anchor_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Planner shows {}:00 to {}:00", config.planner.first_hour, config.planner.last_hour);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match locate_config() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = load_json5(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        store_json(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_config::{Config, PlannerConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// // Inverted hour window
    /// config.planner = PlannerConfig::with_hours(20, 8);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.planner.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
