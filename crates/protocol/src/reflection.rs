//! Daily reflections and the insights drawn from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::anxiety::AnxietyLevel;
use crate::error::{ProtocolError, Result};

/// Unique identifier for a reflection.
pub type ReflectionId = uuid::Uuid;

/// A 1-10 self-assessment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Creates a rating, rejecting values outside 1-10.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::RatingOutOfRange`] for out-of-range values.
    pub fn new(value: u8) -> Result<Self> {
        if (1..=10).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ProtocolError::RatingOutOfRange(value))
        }
    }

    /// Creates a rating, clamping the value into 1-10.
    #[must_use]
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(1, 10))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// How the day felt overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Accomplished,
    Frustrated,
    Energized,
    Calm,
    Overwhelmed,
    #[default]
    Neutral,
}

impl Mood {
    /// All moods in the order offered by the reflection form.
    pub const ALL: [Self; 6] = [
        Self::Neutral,
        Self::Accomplished,
        Self::Energized,
        Self::Calm,
        Self::Frustrated,
        Self::Overwhelmed,
    ];

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Accomplished => "🎯",
            Self::Frustrated => "😤",
            Self::Energized => "⚡",
            Self::Calm => "😌",
            Self::Overwhelmed => "😰",
            Self::Neutral => "😐",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Accomplished => "accomplished",
            Self::Frustrated => "frustrated",
            Self::Energized => "energized",
            Self::Calm => "calm",
            Self::Overwhelmed => "overwhelmed",
            Self::Neutral => "neutral",
        }
    }
}

/// An end-of-day reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflection {
    pub id: ReflectionId,
    pub date: NaiveDate,
    pub energy: Rating,
    pub focus: Rating,
    pub anxiety: AnxietyLevel,
    pub accomplishments: String,
    pub challenges: String,
    pub improvements: String,
    pub mood: Mood,
}

impl Reflection {
    /// Formats the date as `Thursday, July 17, 2025`.
    #[must_use]
    pub fn long_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

/// User input for a reflection, as entered in the daily reflection form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionDraft {
    pub energy: Rating,
    pub focus: Rating,
    pub anxiety: AnxietyLevel,
    pub accomplishments: String,
    pub challenges: String,
    pub improvements: String,
    pub mood: Mood,
}

impl Default for ReflectionDraft {
    fn default() -> Self {
        Self {
            energy: Rating(7),
            focus: Rating(6),
            anxiety: AnxietyLevel::clamped(4),
            accomplishments: String::new(),
            challenges: String::new(),
            improvements: String::new(),
            mood: Mood::Neutral,
        }
    }
}

impl ReflectionDraft {
    /// Converts the draft into a reflection dated `date`.
    ///
    /// Every field has a usable default, so this cannot fail.
    #[must_use]
    pub fn into_reflection(self, date: NaiveDate) -> Reflection {
        Reflection {
            id: ReflectionId::new_v4(),
            date,
            energy: self.energy,
            focus: self.focus,
            anxiety: self.anxiety,
            accomplishments: self.accomplishments.trim().to_string(),
            challenges: self.challenges.trim().to_string(),
            improvements: self.improvements.trim().to_string(),
            mood: self.mood,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Pattern,
    Improvement,
    Achievement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high impact",
            Self::Medium => "medium impact",
            Self::Low => "low impact",
        }
    }
}

/// How loudly an insight should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightTone {
    /// Something went well.
    Celebrate,
    /// High-impact pattern or improvement.
    Urgent,
    /// Medium-impact pattern or improvement.
    Notable,
    Informational,
}

/// An observation about the user's recent patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: InsightKind,
    pub impact: Impact,
    /// Whether there is a concrete next step.
    pub actionable: bool,
}

impl Insight {
    /// Achievements always celebrate; everything else follows its impact.
    #[must_use]
    pub const fn tone(&self) -> InsightTone {
        match (self.kind, self.impact) {
            (InsightKind::Achievement, _) => InsightTone::Celebrate,
            (_, Impact::High) => InsightTone::Urgent,
            (_, Impact::Medium) => InsightTone::Notable,
            (_, Impact::Low) => InsightTone::Informational,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insight(kind: InsightKind, impact: Impact) -> Insight {
        Insight {
            id: "i".into(),
            title: "t".into(),
            description: "d".into(),
            kind,
            impact,
            actionable: true,
        }
    }

    #[test]
    fn insight_tone() {
        assert_eq!(
            insight(InsightKind::Achievement, Impact::Low).tone(),
            InsightTone::Celebrate
        );
        assert_eq!(
            insight(InsightKind::Pattern, Impact::High).tone(),
            InsightTone::Urgent
        );
        assert_eq!(
            insight(InsightKind::Improvement, Impact::Medium).tone(),
            InsightTone::Notable
        );
        assert_eq!(
            insight(InsightKind::Pattern, Impact::Low).tone(),
            InsightTone::Informational
        );
    }

    #[test]
    fn draft_defaults() {
        let draft = ReflectionDraft::default();
        assert_eq!(draft.energy.value(), 7);
        assert_eq!(draft.focus.value(), 6);
        assert_eq!(draft.anxiety.value(), 4);
        assert_eq!(draft.mood, Mood::Neutral);
    }

    #[test]
    fn empty_draft_still_saves() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 17).expect("valid date");
        let reflection = ReflectionDraft::default().into_reflection(date);
        assert_eq!(reflection.date, date);
        assert!(reflection.accomplishments.is_empty());
        assert_eq!(reflection.long_date(), "Thursday, July 17, 2025");
    }

    #[test]
    fn mood_glyphs() {
        assert_eq!(Mood::Accomplished.glyph(), "🎯");
        assert_eq!(Mood::Neutral.glyph(), "😐");
    }

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(11).is_err());
        assert_eq!(Rating::clamped(15).value(), 10);
        assert!(serde_json::from_str::<Rating>("12").is_err());
    }
}
