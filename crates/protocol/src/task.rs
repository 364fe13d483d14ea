//! Task-related types for the daily focus list.
//!
//! This module defines tasks, their priority and energy requirements, and the
//! estimate-accuracy computation shown on every task card.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
///
/// Uses UUID v4 for globally unique identification.
pub type TaskId = uuid::Uuid;

/// How important a task or time block is.
///
/// Variants are ordered from least to most important, so `High > Low`.
///
/// # Examples
///
/// ```
/// use anchor_protocol::Priority;
///
/// assert!(Priority::High > Priority::Medium);
/// assert_eq!(Priority::default(), Priority::Medium);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Nice to have.
    Low,
    /// Regular work.
    #[default]
    Medium,
    /// Must happen today.
    High,
}

impl Priority {
    /// All priorities, from highest to lowest (the order used by choice fields).
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the lowercase label shown in badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// How much energy a piece of work demands.
///
/// Descriptive only: nothing schedules around it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl EnergyLevel {
    /// All energy levels, from highest to lowest.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Percentage at or above which an estimate counts as good.
pub const GOOD_ACCURACY: f64 = 80.0;

/// Percentage at or above which an estimate counts as fair.
pub const FAIR_ACCURACY: f64 = 60.0;

/// Quality band of an estimate-accuracy percentage.
///
/// # Examples
///
/// ```
/// use anchor_protocol::AccuracyBand;
///
/// assert_eq!(AccuracyBand::from_percentage(80.0), AccuracyBand::Good);
/// assert_eq!(AccuracyBand::from_percentage(79.9), AccuracyBand::Fair);
/// assert_eq!(AccuracyBand::from_percentage(-100.0), AccuracyBand::Poor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccuracyBand {
    /// 80% and above.
    Good,
    /// 60% up to 80%.
    Fair,
    /// Below 60%, including negative values.
    Poor,
}

impl AccuracyBand {
    /// Classifies an accuracy percentage.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= GOOD_ACCURACY {
            Self::Good
        } else if percentage >= FAIR_ACCURACY {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Computes how close an actual duration came to its estimate, in percent.
///
/// The result is `(1 - |actual - estimated| / estimated) * 100`. It is not
/// clamped: overshooting by more than the estimate yields a negative value.
/// Returns `None` when the estimate is zero.
///
/// # Examples
///
/// ```
/// use anchor_protocol::task::estimate_accuracy;
///
/// assert_eq!(estimate_accuracy(45, 45), Some(100.0));
/// assert_eq!(estimate_accuracy(45, 90), Some(0.0));
/// assert_eq!(estimate_accuracy(45, 135), Some(-100.0));
/// assert_eq!(estimate_accuracy(0, 10), None);
/// ```
#[must_use]
pub fn estimate_accuracy(estimated_minutes: u32, actual_minutes: u32) -> Option<f64> {
    if estimated_minutes == 0 {
        return None;
    }
    let estimated = f64::from(estimated_minutes);
    let delta = (f64::from(actual_minutes) - estimated).abs();
    Some((1.0 - delta / estimated) * 100.0)
}

/// A task in today's focus list.
///
/// # Examples
///
/// ```
/// use anchor_protocol::{Priority, Task};
///
/// let task = Task::new("Write documentation", 90).with_priority(Priority::High);
/// assert!(!task.completed);
/// assert_eq!(task.estimate_accuracy(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    /// Planned duration in minutes.
    pub estimated_minutes: u32,
    /// Recorded duration in minutes, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_minutes: Option<u32>,
    pub completed: bool,
    pub energy_required: EnergyLevel,
    /// Free-form grouping such as "work" or "meetings".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the card's timer control is in its running state.
    #[serde(default)]
    pub timer_running: bool,
}

impl Task {
    /// Creates an open task with medium priority and energy.
    #[must_use]
    pub fn new(title: impl Into<String>, estimated_minutes: u32) -> Self {
        Self {
            id: TaskId::new_v4(),
            title: title.into(),
            description: None,
            priority: Priority::default(),
            estimated_minutes,
            actual_minutes: None,
            completed: false,
            energy_required: EnergyLevel::default(),
            category: None,
            timer_running: false,
        }
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

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_actual_minutes(mut self, minutes: u32) -> Self {
        self.actual_minutes = Some(minutes);
        self
    }

    #[must_use]
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Returns the estimate accuracy percentage, if an actual time is recorded.
    ///
    /// A recorded actual of zero minutes still counts as recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_protocol::Task;
    ///
    /// let task = Task::new("Team standup meeting", 30).with_actual_minutes(25);
    /// let accuracy = task.estimate_accuracy().unwrap();
    /// assert!((accuracy - 83.333).abs() < 0.01);
    /// ```
    #[must_use]
    pub fn estimate_accuracy(&self) -> Option<f64> {
        self.recorded_minutes()
            .and_then(|actual| estimate_accuracy(self.estimated_minutes, actual))
    }

    /// Returns the actual time spent, treating zero minutes as not recorded.
    ///
    /// ```
    /// use anchor_protocol::Task;
    ///
    /// assert_eq!(Task::new("Skipped", 30).with_actual_minutes(0).recorded_minutes(), None);
    /// assert_eq!(Task::new("Standup", 30).with_actual_minutes(25).recorded_minutes(), Some(25));
    /// ```
    #[must_use]
    pub fn recorded_minutes(&self) -> Option<u32> {
        self.actual_minutes.filter(|&minutes| minutes > 0)
    }

    /// Returns the quality band of the estimate, if an accuracy exists.
    #[must_use]
    pub fn accuracy_band(&self) -> Option<AccuracyBand> {
        self.estimate_accuracy().map(AccuracyBand::from_percentage)
    }

    /// Returns the elapsed share of the estimate, capped at 1.0.
    #[must_use]
    pub fn progress_ratio(&self) -> Option<f64> {
        let actual = self.recorded_minutes()?;
        if self.estimated_minutes == 0 {
            return None;
        }
        Some((f64::from(actual) / f64::from(self.estimated_minutes)).min(1.0))
    }

    /// Flips the completion flag. Completing a task also stops its timer.
    pub fn toggle_complete(&mut self) {
        self.completed = !self.completed;
        if self.completed {
            self.timer_running = false;
        }
    }

    /// Flips the timer flag and returns the new state.
    ///
    /// Completed tasks have no timer control, so this is a no-op for them.
    pub fn toggle_timer(&mut self) -> bool {
        if !self.completed {
            self.timer_running = !self.timer_running;
        }
        self.timer_running
    }

    /// Adds `delta` minutes to the recorded actual time, saturating at zero.
    ///
    /// A task without a recorded time starts counting from zero.
    pub fn adjust_actual_minutes(&mut self, delta: i32) {
        let current = i64::from(self.actual_minutes.unwrap_or(0));
        let next = (current + i64::from(delta)).clamp(0, i64::from(u32::MAX));
        self.actual_minutes = u32::try_from(next).ok();
    }
}

/// User input for a new task, as typed into the add-task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    /// Estimate as typed; must parse to a positive number of minutes.
    pub estimated_minutes: String,
    pub priority: Priority,
    pub energy_required: EnergyLevel,
    pub category: String,
}

impl TaskDraft {
    /// Converts the draft into a task.
    ///
    /// Returns `None` if the title is blank or the estimate is not a positive
    /// whole number of minutes.
    #[must_use]
    pub fn into_task(self) -> Option<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        let estimate: u32 = self.estimated_minutes.trim().parse().ok()?;
        if estimate == 0 {
            return None;
        }
        let mut task = Task::new(title, estimate)
            .with_priority(self.priority)
            .with_energy(self.energy_required);
        let category = self.category.trim();
        if !category.is_empty() {
            task.category = Some(category.to_string());
        }
        Some(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_matches_reference_points() {
        assert_eq!(estimate_accuracy(45, 45), Some(100.0));
        assert_eq!(estimate_accuracy(45, 90), Some(0.0));
        assert_eq!(estimate_accuracy(45, 135), Some(-100.0));
    }

    #[test]
    fn accuracy_is_symmetric_around_estimate() {
        assert_eq!(estimate_accuracy(60, 45), estimate_accuracy(60, 75));
    }

    #[test]
    fn accuracy_absent_without_actual_or_estimate() {
        assert_eq!(Task::new("No actual", 30).estimate_accuracy(), None);
        assert_eq!(
            Task::new("Zero estimate", 0)
                .with_actual_minutes(10)
                .estimate_accuracy(),
            None
        );
    }

    #[test]
    fn zero_actual_is_not_recorded() {
        let task = Task::new("Skipped", 30).with_actual_minutes(0);
        assert_eq!(task.recorded_minutes(), None);
        assert_eq!(task.estimate_accuracy(), None);
        assert_eq!(task.accuracy_band(), None);
        assert_eq!(task.progress_ratio(), None);
    }

    #[test]
    fn adjusting_back_to_zero_clears_accuracy() {
        let mut task = Task::new("Adjust", 30);
        task.adjust_actual_minutes(5);
        assert!(task.estimate_accuracy().is_some());
        task.adjust_actual_minutes(-5);
        assert_eq!(task.estimate_accuracy(), None);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(AccuracyBand::from_percentage(100.0), AccuracyBand::Good);
        assert_eq!(AccuracyBand::from_percentage(80.0), AccuracyBand::Good);
        assert_eq!(AccuracyBand::from_percentage(60.0), AccuracyBand::Fair);
        assert_eq!(AccuracyBand::from_percentage(59.99), AccuracyBand::Poor);
    }

    #[test]
    fn progress_is_capped() {
        let task = Task::new("Over", 30).with_actual_minutes(45);
        assert_eq!(task.progress_ratio(), Some(1.0));

        let task = Task::new("Half", 30).with_actual_minutes(15);
        assert_eq!(task.progress_ratio(), Some(0.5));
    }

    #[test]
    fn completing_stops_timer() {
        let mut task = Task::new("Focus", 25);
        assert!(task.toggle_timer());
        task.toggle_complete();
        assert!(task.completed);
        assert!(!task.timer_running);

        // Completed tasks ignore the timer control.
        assert!(!task.toggle_timer());
    }

    #[test]
    fn adjust_actual_saturates_at_zero() {
        let mut task = Task::new("Adjust", 30);
        task.adjust_actual_minutes(5);
        assert_eq!(task.actual_minutes, Some(5));
        task.adjust_actual_minutes(-20);
        assert_eq!(task.actual_minutes, Some(0));
    }

    #[test]
    fn draft_requires_title_and_positive_estimate() {
        let draft = TaskDraft {
            title: "  ".into(),
            estimated_minutes: "30".into(),
            ..TaskDraft::default()
        };
        assert!(draft.into_task().is_none());

        let draft = TaskDraft {
            title: "Code review".into(),
            estimated_minutes: "0".into(),
            ..TaskDraft::default()
        };
        assert!(draft.into_task().is_none());

        let draft = TaskDraft {
            title: "Code review".into(),
            estimated_minutes: "abc".into(),
            ..TaskDraft::default()
        };
        assert!(draft.into_task().is_none());

        let draft = TaskDraft {
            title: " Code review ".into(),
            estimated_minutes: "20".into(),
            priority: Priority::Low,
            category: "work".into(),
            ..TaskDraft::default()
        };
        let task = draft.into_task().expect("valid draft");
        assert_eq!(task.title, "Code review");
        assert_eq!(task.estimated_minutes, 20);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.category.as_deref(), Some("work"));
    }

    #[test]
    fn priority_json_format() {
        let json = serde_json::to_string(&Priority::High).expect("serialize");
        assert_eq!(json, r#""high""#);
    }
}
