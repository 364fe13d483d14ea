//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing and validation, and while reading or writing the journal.

use std::path::PathBuf;

use anchor_protocol::ProtocolError;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration or journal file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration or journal file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// Invalid planner hour window.
    #[error("invalid planner hours: {reason}")]
    InvalidPlannerHours {
        /// The reason the window is invalid.
        reason: String,
    },

    /// Invalid log settings.
    #[error("invalid log settings: {reason}")]
    InvalidLog {
        /// The reason the settings are invalid.
        reason: String,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Failed to determine the per-user data directory.
    #[error("could not determine data directory")]
    NoDataDirectory,

    /// A store operation on journal-backed repositories failed.
    #[error("journal store error: {0}")]
    Store(#[from] ProtocolError),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::InvalidPlannerHours {
            reason: "first hour 21 is after last hour 20".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid planner hours: first hour 21 is after last hour 20"
        );

        let err = ConfigError::ReadFile {
            path: PathBuf::from("/nope/anchor.json5"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to read config file at /nope/anchor.json5"));
    }
}
