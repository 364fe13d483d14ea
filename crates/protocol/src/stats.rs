//! Weekly summary figures shown on the dashboard and the reflection hub.
//!
//! These are precomputed values rather than aggregates of the store.

use serde::{Deserialize, Serialize};

/// Progress against the week's goals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub tasks_completed: u32,
    pub total_tasks: u32,
    pub accurate_estimates: u32,
    pub total_estimates: u32,
    pub focus_hours: f64,
    pub target_focus_hours: f64,
}

impl WeeklyStats {
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        ratio(f64::from(self.tasks_completed), f64::from(self.total_tasks))
    }

    #[must_use]
    pub fn accuracy_ratio(&self) -> f64 {
        ratio(
            f64::from(self.accurate_estimates),
            f64::from(self.total_estimates),
        )
    }

    #[must_use]
    pub fn focus_ratio(&self) -> f64 {
        ratio(self.focus_hours, self.target_focus_hours)
    }
}

/// Averages and totals summarised in the reflection hub.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReflectionStats {
    pub average_energy: f64,
    pub average_focus: f64,
    pub average_anxiety: f64,
    pub tasks_completed: u32,
    /// Percentage, 0-100.
    pub estimation_accuracy: u8,
    pub focus_hours: f64,
    pub distraction_events: u32,
}

/// `part / whole` clamped to 0..=1, or 0 when `whole` is not positive.
fn ratio(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        0.0
    } else {
        (part / whole).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios() {
        let stats = WeeklyStats {
            tasks_completed: 12,
            total_tasks: 18,
            accurate_estimates: 8,
            total_estimates: 0,
            focus_hours: 45.0,
            target_focus_hours: 30.0,
        };
        assert!((stats.completion_ratio() - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.accuracy_ratio(), 0.0);
        assert_eq!(stats.focus_ratio(), 1.0);
    }
}
