//! Planner display configuration.
//!
//! The planner shows one row per hour between `first_hour` and `last_hour`
//! (both inclusive). The defaults cover a regular working day, 08:00 to
//! 20:00.

use anchor_protocol::planner::{DEFAULT_FIRST_HOUR, DEFAULT_LAST_HOUR};
use anchor_protocol::SlotHours;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Latest hour a slot may start at.
pub const MAX_HOUR: u8 = 23;

/// Configuration for the weekly planner grid.
///
/// # Examples
///
/// ```
/// use anchor_config::PlannerConfig;
///
/// let config = PlannerConfig::default();
/// assert_eq!(config.first_hour, 8);
/// assert_eq!(config.slot_hours().unwrap().len(), 13);
///
/// let config = PlannerConfig::with_hours(7, 22);
/// assert_eq!(config.slot_hours().unwrap().len(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// First displayed hour slot.
    #[serde(default = "default_first_hour")]
    pub first_hour: u8,

    /// Last displayed hour slot (inclusive).
    #[serde(default = "default_last_hour")]
    pub last_hour: u8,
}

fn default_first_hour() -> u8 {
    DEFAULT_FIRST_HOUR
}

fn default_last_hour() -> u8 {
    DEFAULT_LAST_HOUR
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            first_hour: DEFAULT_FIRST_HOUR,
            last_hour: DEFAULT_LAST_HOUR,
        }
    }
}

impl PlannerConfig {
    /// Creates a planner configuration with the given hour window.
    #[must_use]
    pub fn with_hours(first_hour: u8, last_hour: u8) -> Self {
        Self {
            first_hour,
            last_hour,
        }
    }

    /// Validates the planner configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either hour is past 23 or the window is inverted.
    pub fn validate(&self) -> Result<()> {
        if self.last_hour > MAX_HOUR {
            return Err(ConfigError::InvalidPlannerHours {
                reason: format!(
                    "last hour {} exceeds maximum of {}",
                    self.last_hour, MAX_HOUR
                ),
            });
        }

        if self.first_hour > self.last_hour {
            return Err(ConfigError::InvalidPlannerHours {
                reason: format!(
                    "first hour {} is after last hour {}",
                    self.first_hour, self.last_hour
                ),
            });
        }

        Ok(())
    }

    /// Returns the validated slot window.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn slot_hours(&self) -> Result<SlotHours> {
        self.validate()?;
        Ok(SlotHours::new(self.first_hour, self.last_hour)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.first_hour, 8);
        assert_eq!(config.last_hour, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_above_maximum() {
        let config = PlannerConfig::with_hours(8, 24);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_inverted_window() {
        let config = PlannerConfig::with_hours(21, 20);
        let err = config.validate().expect_err("inverted window");
        assert!(err.to_string().contains("first hour 21 is after last hour 20"));
    }

    #[test]
    fn validate_at_boundaries() {
        assert!(PlannerConfig::with_hours(0, 23).validate().is_ok());
        assert!(PlannerConfig::with_hours(12, 12).validate().is_ok());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: PlannerConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn deserialize_partial() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{"first_hour": 6}"#).expect("deserialize");
        assert_eq!(config.first_hour, 6);
        assert_eq!(config.last_hour, DEFAULT_LAST_HOUR);
    }
}
