//! Seed data for a fresh store.
//!
//! Dates and timestamps are relative to the supplied "today", so the demo
//! always shows a populated current week.
//!
//! # Examples
//!
//! ```
//! use anchor_protocol::seed;
//! use chrono::{NaiveDate, Utc};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
//! assert_eq!(seed::tasks().len(), 4);
//! assert!(seed::time_blocks(today).iter().all(|b| b.date == today));
//! assert_eq!(seed::anxiety_logs(Utc::now()).len(), 2);
//! ```

use chrono::{DateTime, Days, NaiveDate, TimeDelta, Utc};

use crate::anxiety::{AnxietyLevel, AnxietyLog, AnxietyLogId, CopingStrategy, StrategyCategory};
use crate::reflection::{
    Impact, Insight, InsightKind, Mood, Rating, Reflection, ReflectionId,
};
use crate::stats::{ReflectionStats, WeeklyStats};
use crate::task::{EnergyLevel, Priority, Task};
use crate::time_block::{BlockKind, ClockTime, TimeBlock};

/// Today's focus list.
#[must_use]
pub fn tasks() -> Vec<Task> {
    vec![
        Task::new("Review project proposal", 45)
            .with_priority(Priority::High)
            .with_energy(EnergyLevel::High)
            .with_category("work"),
        Task::new("Team standup meeting", 30)
            .with_priority(Priority::Medium)
            .with_energy(EnergyLevel::Medium)
            .with_category("meetings")
            .with_actual_minutes(25)
            .completed(),
        Task::new("Write documentation", 90)
            .with_priority(Priority::Medium)
            .with_energy(EnergyLevel::Medium)
            .with_category("work"),
        Task::new("Code review", 20)
            .with_priority(Priority::Low)
            .with_energy(EnergyLevel::Low)
            .with_category("work"),
    ]
}

/// Today's schedule.
#[must_use]
pub fn time_blocks(today: NaiveDate) -> Vec<TimeBlock> {
    let block = |title: &str, start: (u8, u8), end: (u8, u8)| {
        let at = |(hour, minute): (u8, u8)| ClockTime::new(hour, minute).unwrap_or_default();
        TimeBlock::new(title, today, at(start), at(end))
    };

    vec![
        block("Morning Planning", (9, 0), (9, 30))
            .with_kind(BlockKind::Focus)
            .with_priority(Priority::High)
            .with_energy(EnergyLevel::High),
        block("Project Review", (10, 0), (11, 30))
            .with_kind(BlockKind::Task)
            .with_priority(Priority::High)
            .with_energy(EnergyLevel::High),
        block("Break", (11, 30), (11, 45))
            .with_kind(BlockKind::Break)
            .with_priority(Priority::Low)
            .with_energy(EnergyLevel::Low),
    ]
}

/// The static coping strategy catalogue.
#[must_use]
pub fn coping_strategies() -> Vec<CopingStrategy> {
    let strategy = |id: &str,
                    name: &str,
                    description: &str,
                    effectiveness: u8,
                    minutes_required: u8,
                    category: StrategyCategory| CopingStrategy {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        effectiveness,
        minutes_required,
        category,
    };

    vec![
        strategy(
            "breathing-478",
            "4-7-8 Breathing",
            "Inhale for 4, hold for 7, exhale for 8",
            85,
            2,
            StrategyCategory::Breathing,
        ),
        strategy(
            "grounding-54321",
            "5-4-3-2-1 Grounding",
            "5 things you see, 4 you hear, 3 you touch, 2 you smell, 1 you taste",
            78,
            3,
            StrategyCategory::Grounding,
        ),
        strategy(
            "priority-anchor",
            "Priority Anchor",
            "Remind yourself of your top 3 priorities for today",
            72,
            1,
            StrategyCategory::Cognitive,
        ),
        strategy(
            "quick-walk",
            "Quick Walk",
            "Take a 5-minute walk to reset your mind",
            80,
            5,
            StrategyCategory::Physical,
        ),
    ]
}

/// Two recent anxiety events, timestamped relative to `now`.
#[must_use]
pub fn anxiety_logs(now: DateTime<Utc>) -> Vec<AnxietyLog> {
    vec![
        AnxietyLog {
            id: AnxietyLogId::new_v4(),
            trigger: "Unexpected meeting request".into(),
            level: AnxietyLevel::clamped(7),
            coping_strategy: "4-7-8 Breathing".into(),
            outcome: "Managed to reschedule and maintain focus".into(),
            priority_maintained: true,
            timestamp: now - TimeDelta::hours(2),
        },
        AnxietyLog {
            id: AnxietyLogId::new_v4(),
            trigger: "Email about urgent deadline".into(),
            level: AnxietyLevel::clamped(8),
            coping_strategy: "Priority Anchor".into(),
            outcome: "Clarified actual urgency, not as critical as thought".into(),
            priority_maintained: true,
            timestamp: now - TimeDelta::hours(24),
        },
    ]
}

/// Reflections for the two days before `today`, newest first.
#[must_use]
pub fn reflections(today: NaiveDate) -> Vec<Reflection> {
    let days_ago = |n| today.checked_sub_days(Days::new(n)).unwrap_or(today);

    vec![
        Reflection {
            id: ReflectionId::new_v4(),
            date: days_ago(1),
            energy: Rating::clamped(8),
            focus: Rating::clamped(7),
            anxiety: AnxietyLevel::clamped(3),
            accomplishments: "Completed project proposal, had productive team meeting".into(),
            challenges: "Got distracted by emails in the afternoon".into(),
            improvements: "Need to batch email checking to specific times".into(),
            mood: Mood::Accomplished,
        },
        Reflection {
            id: ReflectionId::new_v4(),
            date: days_ago(2),
            energy: Rating::clamped(6),
            focus: Rating::clamped(5),
            anxiety: AnxietyLevel::clamped(6),
            accomplishments: "Finished code review, started documentation".into(),
            challenges: "Unexpected urgent request disrupted my flow".into(),
            improvements: "Better communication about priorities with team".into(),
            mood: Mood::Frustrated,
        },
    ]
}

/// The static insight list.
#[must_use]
pub fn insights() -> Vec<Insight> {
    let insight = |id: &str, title: &str, description: &str, kind, impact, actionable| Insight {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        impact,
        actionable,
    };

    vec![
        insight(
            "morning-energy",
            "Morning Energy Peak",
            "Your energy levels are consistently highest between 9-11 AM. Schedule your most important tasks during this window.",
            InsightKind::Pattern,
            Impact::High,
            true,
        ),
        insight(
            "email-distraction",
            "Email Distraction Pattern",
            "You've mentioned email distractions 4 times this week. Consider batching email checks to 3 specific times per day.",
            InsightKind::Improvement,
            Impact::Medium,
            true,
        ),
        insight(
            "estimation-accuracy",
            "Estimation Accuracy Improving",
            "Your time estimation accuracy has improved from 65% to 78% over the past two weeks. Great progress!",
            InsightKind::Achievement,
            Impact::High,
            false,
        ),
        insight(
            "anxiety-triggers",
            "Anxiety Triggers",
            "Unexpected requests are your primary anxiety trigger. Building buffer time into your schedule could help.",
            InsightKind::Pattern,
            Impact::Medium,
            true,
        ),
    ]
}

/// This week's progress figures for the dashboard.
#[must_use]
pub const fn weekly_stats() -> WeeklyStats {
    WeeklyStats {
        tasks_completed: 12,
        total_tasks: 18,
        accurate_estimates: 8,
        total_estimates: 12,
        focus_hours: 24.5,
        target_focus_hours: 30.0,
    }
}

/// This week's summary for the reflection hub.
#[must_use]
pub const fn reflection_stats() -> ReflectionStats {
    ReflectionStats {
        average_energy: 7.2,
        average_focus: 6.8,
        average_anxiety: 4.1,
        tasks_completed: 24,
        estimation_accuracy: 78,
        focus_hours: 32.5,
        distraction_events: 12,
    }
}
