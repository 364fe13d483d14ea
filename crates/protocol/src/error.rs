//! Error types for the anchor-protocol crate.
//!
//! User-input problems (an empty title in a form, an unparsable time) are
//! not errors: the draft types report them as `None`. The variants here cover
//! malformed values that reach the domain through code, and failures raised by
//! repository back-ends.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A wall-clock time was not a valid `HH:MM` value.
    #[error("invalid clock time: {0:?}")]
    InvalidClockTime(String),

    /// A 1-10 rating or anxiety level was out of range.
    #[error("rating out of range: {0} (expected 1-10)")]
    RatingOutOfRange(u8),

    /// The planner's hour window was not a valid range.
    #[error("invalid slot hours: {first}..={last}")]
    InvalidSlotHours {
        /// First displayed hour.
        first: u8,
        /// Last displayed hour.
        last: u8,
    },

    /// A record with the given ID was not found in its repository.
    #[error("record not found: {0}")]
    NotFound(uuid::Uuid),

    /// A record with the given ID already exists in its repository.
    #[error("duplicate record: {0}")]
    Duplicate(uuid::Uuid),

    /// The backing store of a repository failed.
    #[error("storage failure: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ProtocolError {
    /// Wraps a back-end error as a [`ProtocolError::Storage`].
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
