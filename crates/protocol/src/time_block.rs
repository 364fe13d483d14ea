//! Time blocks scheduled on the weekly planner.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ProtocolError, Result};
use crate::task::{EnergyLevel, Priority};

/// Unique identifier for a time block.
pub type TimeBlockId = uuid::Uuid;

/// A 24-hour wall-clock time of day with minute precision.
///
/// Serialized as `"HH:MM"`. Parsing also accepts a single-digit hour
/// (`"9:00"`), since that is what people type.
///
/// # Examples
///
/// ```
/// use anchor_protocol::ClockTime;
///
/// let time: ClockTime = "9:30".parse().unwrap();
/// assert_eq!(time.hour(), 9);
/// assert_eq!(time.to_string(), "09:30");
/// assert!("24:00".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a time, validating `hour < 24` and `minute < 60`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidClockTime`] for out-of-range values.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(ProtocolError::InvalidClockTime(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Creates the time `HH:00`.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidClockTime`] if `hour >= 24`.
    pub fn on_the_hour(hour: u8) -> Result<Self> {
        Self::new(hour, 0)
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for ClockTime {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ProtocolError::InvalidClockTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// What a time block is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Regular work; coloured by priority.
    #[default]
    Task,
    Break,
    /// Slack time between commitments.
    Buffer,
    /// Deep, uninterrupted work.
    Focus,
    Meeting,
}

impl BlockKind {
    /// All kinds in the order offered by the add-block form.
    pub const ALL: [Self; 5] = [
        Self::Task,
        Self::Focus,
        Self::Meeting,
        Self::Break,
        Self::Buffer,
    ];

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::Break => "Break",
            Self::Buffer => "Buffer",
            Self::Focus => "Focus Time",
            Self::Meeting => "Meeting",
        }
    }
}

/// A scheduled stretch of time on a calendar date.
///
/// `start < end` is expected but not enforced. A block whose range covers no
/// whole hour slot is kept, it just never shows up on the grid (see
/// [`TimeBlock::occupied_hours`]).
///
/// # Examples
///
/// ```
/// use anchor_protocol::{ClockTime, TimeBlock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
/// let block = TimeBlock::new(
///     "Project Review",
///     date,
///     ClockTime::new(10, 0).unwrap(),
///     ClockTime::new(11, 30).unwrap(),
/// );
/// assert!(block.is_active_at(date, 10));
/// assert!(!block.is_active_at(date, 11));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: TimeBlockId,
    pub title: String,
    pub start: ClockTime,
    pub end: ClockTime,
    /// The day column this block belongs to.
    pub date: NaiveDate,
    pub kind: BlockKind,
    /// Only meaningful for [`BlockKind::Task`] blocks.
    pub priority: Priority,
    pub energy_required: EnergyLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimeBlock {
    /// Creates a medium-priority task block.
    #[must_use]
    pub fn new(title: impl Into<String>, date: NaiveDate, start: ClockTime, end: ClockTime) -> Self {
        Self {
            id: TimeBlockId::new_v4(),
            title: title.into(),
            start,
            end,
            date,
            kind: BlockKind::default(),
            priority: Priority::default(),
            energy_required: EnergyLevel::default(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: BlockKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_energy(mut self, energy: EnergyLevel) -> Self {
        self.energy_required = energy;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the hour slots this block occupies on its date.
    ///
    /// Minutes are ignored: the range runs from the start hour up to, but
    /// excluding, the end hour. A block that starts and ends inside the same
    /// hour (e.g. 11:30-11:45) occupies nothing, and neither does one whose
    /// end hour is before its start hour.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_protocol::{ClockTime, TimeBlock};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
    /// let t = |h, m| ClockTime::new(h, m).unwrap();
    ///
    /// assert_eq!(TimeBlock::new("a", date, t(9, 0), t(11, 30)).occupied_hours(), 9..11);
    /// assert_eq!(TimeBlock::new("b", date, t(9, 30), t(10, 0)).occupied_hours(), 9..10);
    /// assert!(TimeBlock::new("c", date, t(9, 0), t(9, 45)).occupied_hours().is_empty());
    /// ```
    #[must_use]
    pub fn occupied_hours(&self) -> Range<u8> {
        let first = self.start.hour();
        first..self.end.hour().max(first)
    }

    /// Returns `true` if this block is active in hour slot `hour` of `date`.
    #[must_use]
    pub fn is_active_at(&self, date: NaiveDate, hour: u8) -> bool {
        self.date == date && self.occupied_hours().contains(&hour)
    }

    /// Returns `true` if the block occupies no hour slot at all.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.occupied_hours().is_empty()
    }

    /// Returns `true` if both blocks share a date and their time ranges
    /// intersect (touching ends do not overlap).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.date == other.date && self.start < other.end && other.start < self.end
    }

    /// Formats the block's range as `HH:MM-HH:MM`.
    #[must_use]
    pub fn time_range(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}
