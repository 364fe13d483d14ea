//! Log output configuration.
//!
//! The terminal belongs to the UI, so logs always go to a file. The
//! `ANCHOR_LOG` and `RUST_LOG` environment variables override `level`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::user_data_dir;

/// Default filter directive.
pub const DEFAULT_LEVEL: &str = "info";

/// File name of the log written inside the log directory.
pub const LOG_FILE_NAME: &str = "anchor.log";

/// Configuration for the log file.
///
/// # Examples
///
/// ```
/// use anchor_config::LogConfig;
///
/// let config = LogConfig::default();
/// assert_eq!(config.level, "info");
/// assert!(config.directory.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// A `tracing` filter directive such as `info` or `anchor_tui=debug`.
    #[serde(default = "default_level")]
    pub level: String,

    /// Where to write the log file. Defaults to `<data dir>/anchor/logs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
        }
    }
}

impl LogConfig {
    /// Validates the log configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the level directive is blank.
    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::InvalidLog {
                reason: "level must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the directory the log file is written to.
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is configured and the data directory
    /// cannot be determined.
    pub fn resolved_directory(&self) -> Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(user_data_dir()?.join("logs")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_level_is_invalid() {
        let config = LogConfig {
            level: "  ".into(),
            directory: None,
        };
        assert!(config.validate().is_err());
        assert!(LogConfig::default().validate().is_ok());
    }

    #[test]
    fn configured_directory_wins() {
        let config = LogConfig {
            directory: Some(PathBuf::from("/tmp/anchor-logs")),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_directory().expect("resolved"),
            PathBuf::from("/tmp/anchor-logs")
        );
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: LogConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, LogConfig::default());
    }
}
