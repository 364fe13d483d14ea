//! Anxiety check-ins, coping strategies and the event log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Unique identifier for an anxiety log entry.
pub type AnxietyLogId = uuid::Uuid;

/// Lowest value on the 1-10 scale.
pub const MIN_LEVEL: u8 = 1;

/// Highest value on the 1-10 scale.
pub const MAX_LEVEL: u8 = 10;

/// Check-in values strictly above this suggest a coping strategy.
pub const COPING_PROMPT_THRESHOLD: u8 = 5;

/// A self-reported anxiety level on a 1-10 scale.
///
/// # Examples
///
/// ```
/// use anchor_protocol::{AnxietyBand, AnxietyLevel};
///
/// let level = AnxietyLevel::clamped(6);
/// assert_eq!(level.band(), AnxietyBand::Moderate);
/// assert!(level.suggests_coping());
/// assert!(!AnxietyLevel::clamped(5).suggests_coping());
/// assert_eq!(AnxietyLevel::clamped(42).value(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnxietyLevel(u8);

impl AnxietyLevel {
    /// Creates a level, rejecting values outside 1-10.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::RatingOutOfRange`] for out-of-range values.
    pub fn new(value: u8) -> Result<Self> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ProtocolError::RatingOutOfRange(value))
        }
    }

    /// Creates a level, clamping the value into 1-10.
    #[must_use]
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(MIN_LEVEL, MAX_LEVEL))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Moves the level by `delta`, staying within 1-10.
    #[must_use]
    pub fn adjusted(self, delta: i8) -> Self {
        let next = i16::from(self.0) + i16::from(delta);
        Self::clamped(u8::try_from(next.max(0)).unwrap_or(MAX_LEVEL))
    }

    #[must_use]
    pub const fn band(self) -> AnxietyBand {
        AnxietyBand::of(self.0)
    }

    /// Returns `true` when the check-in should offer a coping strategy.
    #[must_use]
    pub const fn suggests_coping(self) -> bool {
        self.0 > COPING_PROMPT_THRESHOLD
    }
}

impl Default for AnxietyLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for AnxietyLevel {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AnxietyLevel> for u8 {
    fn from(level: AnxietyLevel) -> Self {
        level.0
    }
}

/// Coarse classification of an anxiety level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnxietyBand {
    /// 1-3.
    Calm,
    /// 4-6.
    Moderate,
    /// 7-10.
    Elevated,
}

impl AnxietyBand {
    /// Classifies a raw 1-10 value.
    #[must_use]
    pub const fn of(value: u8) -> Self {
        match value {
            0..=3 => Self::Calm,
            4..=6 => Self::Moderate,
            _ => Self::Elevated,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Moderate => "Moderate",
            Self::Elevated => "Elevated",
        }
    }
}

/// What kind of technique a coping strategy uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyCategory {
    Breathing,
    Grounding,
    Cognitive,
    Physical,
}

impl StrategyCategory {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breathing => "breathing",
            Self::Grounding => "grounding",
            Self::Cognitive => "cognitive",
            Self::Physical => "physical",
        }
    }
}

/// A technique offered when anxiety runs high.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopingStrategy {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Self-reported effectiveness, 0-100.
    pub effectiveness: u8,
    pub minutes_required: u8,
    pub category: StrategyCategory,
}

/// A recorded anxiety event and how it was handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnxietyLog {
    pub id: AnxietyLogId,
    /// What set it off.
    pub trigger: String,
    pub level: AnxietyLevel,
    /// Name of the strategy used, empty if none.
    pub coping_strategy: String,
    pub outcome: String,
    /// Whether the day's priorities survived the event.
    pub priority_maintained: bool,
    pub timestamp: DateTime<Utc>,
}

/// User input for a new anxiety log, as typed into the log form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnxietyLogDraft {
    pub trigger: String,
    pub coping_strategy: String,
    pub outcome: String,
    pub priority_maintained: bool,
}

impl Default for AnxietyLogDraft {
    fn default() -> Self {
        Self {
            trigger: String::new(),
            coping_strategy: String::new(),
            outcome: String::new(),
            priority_maintained: true,
        }
    }
}

impl AnxietyLogDraft {
    /// Converts the draft into a log entry recorded at `level` and `timestamp`.
    ///
    /// Returns `None` if the trigger is blank.
    #[must_use]
    pub fn into_log(self, level: AnxietyLevel, timestamp: DateTime<Utc>) -> Option<AnxietyLog> {
        let trigger = self.trigger.trim();
        if trigger.is_empty() {
            return None;
        }
        Some(AnxietyLog {
            id: AnxietyLogId::new_v4(),
            trigger: trigger.to_string(),
            level,
            coping_strategy: self.coping_strategy.trim().to_string(),
            outcome: self.outcome.trim().to_string(),
            priority_maintained: self.priority_maintained,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_threshold_is_strict() {
        assert!(!AnxietyLevel::clamped(5).suggests_coping());
        assert!(AnxietyLevel::clamped(6).suggests_coping());
        assert!(AnxietyLevel::clamped(10).suggests_coping());
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(AnxietyBand::of(1), AnxietyBand::Calm);
        assert_eq!(AnxietyBand::of(3), AnxietyBand::Calm);
        assert_eq!(AnxietyBand::of(4), AnxietyBand::Moderate);
        assert_eq!(AnxietyBand::of(6), AnxietyBand::Moderate);
        assert_eq!(AnxietyBand::of(7), AnxietyBand::Elevated);
        assert_eq!(AnxietyBand::of(10), AnxietyBand::Elevated);
    }

    #[test]
    fn level_rejects_out_of_range() {
        assert!(AnxietyLevel::new(0).is_err());
        assert!(AnxietyLevel::new(11).is_err());
        assert_eq!(AnxietyLevel::new(7).expect("valid").value(), 7);
        assert_eq!(AnxietyLevel::clamped(0).value(), 1);
    }

    #[test]
    fn adjust_stays_in_range() {
        let level = AnxietyLevel::clamped(9);
        assert_eq!(level.adjusted(5).value(), 10);
        assert_eq!(AnxietyLevel::clamped(2).adjusted(-5).value(), 1);
        assert_eq!(AnxietyLevel::clamped(5).adjusted(1).value(), 6);
    }

    #[test]
    fn level_deserialization_validates() {
        let level: AnxietyLevel = serde_json::from_str("8").expect("deserialize");
        assert_eq!(level.value(), 8);
        assert!(serde_json::from_str::<AnxietyLevel>("0").is_err());
        assert_eq!(serde_json::to_string(&level).expect("serialize"), "8");
    }

    #[test]
    fn draft_requires_trigger() {
        let now = Utc::now();
        let level = AnxietyLevel::clamped(7);
        assert!(AnxietyLogDraft::default().into_log(level, now).is_none());

        let draft = AnxietyLogDraft {
            trigger: "Unexpected meeting request".into(),
            coping_strategy: "4-7-8 Breathing".into(),
            ..AnxietyLogDraft::default()
        };
        let log = draft.into_log(level, now).expect("valid draft");
        assert_eq!(log.level, level);
        assert!(log.priority_maintained);
        assert_eq!(log.timestamp, now);
    }
}
