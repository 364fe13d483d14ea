//! Application state management.
//!
//! [`AppState`] holds the store plus everything that only matters to the
//! screen: the active tab, cursors, the open form and the overlays.

use anchor_protocol::{
    AnxietyLevel, CopingStrategy, Insight, ReflectionStats, SlotHours, Store, TaskId,
    WeeklyStats,
    planner::{DAYS_PER_WEEK, week_dates},
    seed,
};
use chrono::{Datelike, Days, NaiveDate};

use crate::form::FormState;

/// Initial value of the header energy gauge.
pub const DEFAULT_ENERGY: u8 = 75;

/// Upper bound of the energy gauge.
pub const MAX_ENERGY: u8 = 100;

/// Top-level tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Planner,
    Tracker,
    Reflection,
    Anxiety,
}

impl Tab {
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Planner,
        Self::Tracker,
        Self::Reflection,
        Self::Anxiety,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Planner => "Planner",
            Self::Tracker => "Tracker",
            Self::Reflection => "Reflection",
            Self::Anxiety => "Anxiety",
        }
    }

    /// Position in [`Tab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the next tab (wrapping around).
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Returns the previous tab (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Sub-tabs of the reflection hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReflectionTab {
    #[default]
    Insights,
    Analytics,
    History,
}

impl ReflectionTab {
    pub const ALL: [Self; 3] = [Self::Insights, Self::Analytics, Self::History];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Insights => "Insights",
            Self::Analytics => "Analytics",
            Self::History => "History",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Insights => Self::Analytics,
            Self::Analytics => Self::History,
            Self::History => Self::Insights,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Insights => Self::History,
            Self::Analytics => Self::Insights,
            Self::History => Self::Analytics,
        }
    }
}

/// The planner cursor: a day column of a week and an hour row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerCursor {
    /// Whole weeks away from the current one.
    pub week_offset: i32,
    /// Day column, 0 = Monday.
    pub day: usize,
    pub hour: u8,
}

/// The application state.
#[derive(Debug)]
pub struct AppState {
    pub store: Store,
    /// The date the app considers "today".
    pub today: NaiveDate,
    pub tab: Tab,
    /// Self-reported energy, 0-100.
    pub energy: u8,
    /// Index into the store's tasks of the highlighted task card.
    pub selected_task: Option<usize>,
    pub planner: PlannerCursor,
    pub slot_hours: SlotHours,
    /// Current value of the anxiety check-in slider.
    pub check_in: AnxietyLevel,
    pub reflection_tab: ReflectionTab,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The open dialog, if any.
    pub form: Option<FormState>,
    pub strategies: Vec<CopingStrategy>,
    pub insights: Vec<Insight>,
    pub weekly_stats: WeeklyStats,
    pub reflection_stats: ReflectionStats,
}

impl AppState {
    /// Creates the state for a session starting on `today`.
    ///
    /// The planner cursor starts on today's column at the first displayed
    /// hour; the first task card is highlighted.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_protocol::{SlotHours, Store};
    /// use anchor_tui::{AppState, Tab};
    /// use chrono::{NaiveDate, Utc};
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
    /// let state = AppState::new(Store::seeded(today, Utc::now()), today, SlotHours::default());
    /// assert_eq!(state.tab, Tab::Dashboard);
    /// assert_eq!(state.planner.day, 4); // Friday
    /// assert_eq!(state.energy, 75);
    /// ```
    #[must_use]
    pub fn new(store: Store, today: NaiveDate, slot_hours: SlotHours) -> Self {
        let selected_task = (!store.tasks().is_empty()).then_some(0);
        Self {
            store,
            today,
            tab: Tab::default(),
            energy: DEFAULT_ENERGY,
            selected_task,
            planner: PlannerCursor {
                week_offset: 0,
                day: weekday_index(today),
                hour: slot_hours.first(),
            },
            slot_hours,
            check_in: AnxietyLevel::default(),
            reflection_tab: ReflectionTab::default(),
            help_visible: false,
            form: None,
            strategies: seed::coping_strategies(),
            insights: seed::insights(),
            weekly_stats: seed::weekly_stats(),
            reflection_stats: seed::reflection_stats(),
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }

    /// Switches to the tab at `index`; out-of-range indices are ignored.
    pub fn go_to_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::from_index(index) {
            self.tab = tab;
        }
    }

    /// Moves the energy gauge, staying within 0-100.
    pub fn adjust_energy(&mut self, delta: i8) {
        let next = i16::from(self.energy) + i16::from(delta);
        self.energy = u8::try_from(next.clamp(0, i16::from(MAX_ENERGY))).unwrap_or(self.energy);
    }

    /// Moves the check-in slider, staying within 1-10.
    pub fn adjust_check_in(&mut self, delta: i8) {
        self.check_in = self.check_in.adjusted(delta);
    }

    /// Moves the task highlight up, wrapping to the bottom.
    pub fn select_prev_task(&mut self) {
        let len = self.store.tasks().len();
        self.selected_task = match (len, self.selected_task) {
            (0, _) => None,
            (_, Some(idx)) if idx > 0 => Some(idx - 1),
            (_, Some(_)) => Some(len - 1),
            (_, None) => Some(0),
        };
    }

    /// Moves the task highlight down, wrapping to the top.
    pub fn select_next_task(&mut self) {
        let len = self.store.tasks().len();
        self.selected_task = match (len, self.selected_task) {
            (0, _) => None,
            (_, Some(idx)) if idx + 1 < len => Some(idx + 1),
            (_, Some(_) | None) => Some(0),
        };
    }

    /// The id of the highlighted task, if any.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task
            .and_then(|idx| self.store.tasks().get(idx))
            .map(|task| task.id)
    }

    /// A date inside the week the planner is showing.
    #[must_use]
    pub fn week_reference(&self) -> NaiveDate {
        let days = Days::new(u64::from(self.planner.week_offset.unsigned_abs()) * 7);
        let shifted = if self.planner.week_offset < 0 {
            self.today.checked_sub_days(days)
        } else {
            self.today.checked_add_days(days)
        };
        shifted.unwrap_or(self.today)
    }

    /// The dates of the week the planner is showing, Monday first.
    #[must_use]
    pub fn planner_week(&self) -> [NaiveDate; DAYS_PER_WEEK] {
        week_dates(self.week_reference())
    }

    /// The date of the planner cursor's column.
    #[must_use]
    pub fn planner_date(&self) -> NaiveDate {
        self.planner_week()[self.planner.day.min(DAYS_PER_WEEK - 1)]
    }

    pub fn prev_week(&mut self) {
        self.planner.week_offset = self.planner.week_offset.saturating_sub(1);
    }

    pub fn next_week(&mut self) {
        self.planner.week_offset = self.planner.week_offset.saturating_add(1);
    }

    /// Jumps back to the current week with the cursor on today.
    pub fn this_week(&mut self) {
        self.planner.week_offset = 0;
        self.planner.day = weekday_index(self.today);
    }

    /// Moves the planner cursor by whole days, wrapping within the week.
    pub fn move_planner_day(&mut self, forward: bool) {
        self.planner.day = if forward {
            (self.planner.day + 1) % DAYS_PER_WEEK
        } else {
            (self.planner.day + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK
        };
    }

    /// Moves the planner cursor by one hour, stopping at the displayed
    /// window's edges.
    pub fn move_planner_hour(&mut self, later: bool) {
        let hours = self.slot_hours;
        self.planner.hour = if later {
            self.planner.hour.saturating_add(1).min(hours.last())
        } else {
            self.planner.hour.saturating_sub(1).max(hours.first())
        };
    }

    /// Points the planner cursor at a cell.
    pub fn select_planner_cell(&mut self, day: usize, hour: u8) {
        if day < DAYS_PER_WEEK && self.slot_hours.contains(hour) {
            self.planner.day = day;
            self.planner.hour = hour;
        }
    }

    pub fn next_reflection_tab(&mut self) {
        self.reflection_tab = self.reflection_tab.next();
    }

    pub fn prev_reflection_tab(&mut self) {
        self.reflection_tab = self.reflection_tab.prev();
    }
}

/// Days since Monday.
fn weekday_index(date: NaiveDate) -> usize {
    usize::try_from(date.weekday().num_days_from_monday()).unwrap_or(0)
}
