//! Weekly planner grid layout.
//!
//! Given the time blocks and a reference date, the planner resolves the
//! Monday-to-Sunday week containing that date and decides which blocks are
//! shown in each hour slot of each day.
//!
//! # Examples
//!
//! ```
//! use anchor_protocol::planner::{SlotHours, WeekGrid};
//! use anchor_protocol::{ClockTime, TimeBlock};
//! use chrono::NaiveDate;
//!
//! let friday = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
//! let blocks = vec![TimeBlock::new(
//!     "Project Review",
//!     friday,
//!     ClockTime::new(10, 0).unwrap(),
//!     ClockTime::new(11, 30).unwrap(),
//! )];
//!
//! let grid = WeekGrid::compute(&blocks, friday, SlotHours::default());
//! assert_eq!(grid.cell(4, 10).len(), 1);
//! assert!(grid.cell(4, 11).is_empty());
//! ```

use std::cmp::Ordering;

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{ProtocolError, Result};
use crate::task::{EnergyLevel, Priority};
use crate::time_block::{BlockKind, ClockTime, TimeBlock};

/// First hour slot shown by default.
pub const DEFAULT_FIRST_HOUR: u8 = 8;

/// Last hour slot shown by default (inclusive).
pub const DEFAULT_LAST_HOUR: u8 = 20;

/// Number of days in a planner week.
pub const DAYS_PER_WEEK: usize = 7;

/// The inclusive range of hour slots displayed by the planner.
///
/// # Examples
///
/// ```
/// use anchor_protocol::planner::SlotHours;
///
/// let hours = SlotHours::default();
/// assert_eq!(hours.len(), 13);
/// assert_eq!(hours.iter().next(), Some(8));
/// assert!(SlotHours::new(20, 8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotHours {
    first: u8,
    last: u8,
}

impl SlotHours {
    /// Creates a slot window.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidSlotHours`] unless
    /// `first <= last <= 23`.
    pub fn new(first: u8, last: u8) -> Result<Self> {
        if first > last || last > 23 {
            return Err(ProtocolError::InvalidSlotHours { first, last });
        }
        Ok(Self { first, last })
    }

    #[must_use]
    pub const fn first(self) -> u8 {
        self.first
    }

    #[must_use]
    pub const fn last(self) -> u8 {
        self.last
    }

    /// Number of displayed slots.
    #[must_use]
    pub const fn len(self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Always `false`: a window holds at least one slot.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    #[must_use]
    pub const fn contains(self, hour: u8) -> bool {
        self.first <= hour && hour <= self.last
    }

    /// Iterates the slot hours in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        self.first..=self.last
    }

    /// Returns the hour of the slot at `index`, if it is in range.
    #[must_use]
    pub fn hour_at(self, index: usize) -> Option<u8> {
        let offset = u8::try_from(index).ok()?;
        let hour = self.first.checked_add(offset)?;
        self.contains(hour).then_some(hour)
    }

    /// Returns the index of `hour` within the window.
    #[must_use]
    pub fn index_of(self, hour: u8) -> Option<usize> {
        self.contains(hour).then(|| usize::from(hour - self.first))
    }
}

impl Default for SlotHours {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST_HOUR,
            last: DEFAULT_LAST_HOUR,
        }
    }
}

/// Returns the Monday of the week containing `reference`.
///
/// Weeks run Monday to Sunday, so a Sunday resolves to the Monday six days
/// earlier. Saturates at [`NaiveDate::MIN`] when that Monday is not
/// representable.
#[must_use]
pub fn week_start(reference: NaiveDate) -> NaiveDate {
    let offset = u64::from(reference.weekday().num_days_from_monday());
    reference
        .checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// Returns the seven consecutive dates, Monday first, of the week containing
/// `reference`. Dates past [`NaiveDate::MAX`] saturate to it.
///
/// # Examples
///
/// ```
/// use anchor_protocol::planner::week_dates;
/// use chrono::{Datelike, NaiveDate, Weekday};
///
/// let sunday = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
/// let week = week_dates(sunday);
/// assert_eq!(week[0], NaiveDate::from_ymd_opt(2025, 7, 14).unwrap());
/// assert_eq!(week[0].weekday(), Weekday::Mon);
/// assert_eq!(week[6], sunday);
/// ```
#[must_use]
pub fn week_dates(reference: NaiveDate) -> [NaiveDate; DAYS_PER_WEEK] {
    let monday = week_start(reference);
    std::array::from_fn(|offset| {
        monday
            .checked_add_days(Days::new(offset as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// Formats a week as `Week of July 14 - July 20`.
#[must_use]
pub fn week_label(dates: &[NaiveDate; DAYS_PER_WEEK]) -> String {
    format!(
        "Week of {} - {}",
        dates[0].format("%B %-d"),
        dates[DAYS_PER_WEEK - 1].format("%B %-d")
    )
}

/// Orders blocks that share a cell: higher priority first, then earlier
/// start. Callers rely on a stable sort to keep insertion order for ties.
#[must_use]
pub fn stacking_order(a: &TimeBlock, b: &TimeBlock) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.start.cmp(&b.start))
}

/// Returns every block active in slot `hour` of `date`, in stacking order.
#[must_use]
pub fn blocks_in_slot(blocks: &[TimeBlock], date: NaiveDate, hour: u8) -> Vec<&TimeBlock> {
    let mut matching: Vec<&TimeBlock> = blocks
        .iter()
        .filter(|block| block.is_active_at(date, hour))
        .collect();
    matching.sort_by(|a, b| stacking_order(a, b));
    matching
}

/// The computed planner grid for one week.
///
/// Cells are addressed by day index (0 = Monday) and hour.
#[derive(Debug, Clone)]
pub struct WeekGrid<'a> {
    dates: [NaiveDate; DAYS_PER_WEEK],
    hours: SlotHours,
    /// `cells[day][slot index]`.
    cells: Vec<Vec<Vec<&'a TimeBlock>>>,
    /// Blocks dated this week that fall in no displayed slot.
    hidden: Vec<&'a TimeBlock>,
}

impl<'a> WeekGrid<'a> {
    /// Lays out `blocks` on the week containing `reference`.
    #[must_use]
    pub fn compute(blocks: &'a [TimeBlock], reference: NaiveDate, hours: SlotHours) -> Self {
        let dates = week_dates(reference);
        let cells = dates
            .iter()
            .map(|&date| {
                hours
                    .iter()
                    .map(|hour| blocks_in_slot(blocks, date, hour))
                    .collect()
            })
            .collect();
        let hidden = blocks
            .iter()
            .filter(|block| dates.contains(&block.date))
            .filter(|block| !block.occupied_hours().any(|hour| hours.contains(hour)))
            .collect();

        Self {
            dates,
            hours,
            cells,
            hidden,
        }
    }

    #[must_use]
    pub const fn dates(&self) -> &[NaiveDate; DAYS_PER_WEEK] {
        &self.dates
    }

    #[must_use]
    pub const fn hours(&self) -> SlotHours {
        self.hours
    }

    /// Returns the blocks in a cell, or an empty slice if out of range.
    #[must_use]
    pub fn cell(&self, day: usize, hour: u8) -> &[&'a TimeBlock] {
        self.hours
            .index_of(hour)
            .and_then(|slot| self.cells.get(day)?.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns `true` if nothing is scheduled in the cell.
    #[must_use]
    pub fn is_empty_cell(&self, day: usize, hour: u8) -> bool {
        self.cell(day, hour).is_empty()
    }

    /// Blocks dated this week that do not appear in any displayed slot.
    #[must_use]
    pub fn hidden_blocks(&self) -> &[&'a TimeBlock] {
        &self.hidden
    }

    /// Returns the day index of `date`, if it falls in this week.
    #[must_use]
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        self.dates.iter().position(|&d| d == date)
    }

    #[must_use]
    pub fn label(&self) -> String {
        week_label(&self.dates)
    }
}

/// Counts the blocks on each day of the week containing `reference`.
#[must_use]
pub fn blocks_per_day(blocks: &[TimeBlock], reference: NaiveDate) -> [usize; DAYS_PER_WEEK] {
    let dates = week_dates(reference);
    dates.map(|date| blocks.iter().filter(|b| b.date == date).count())
}

/// User input for a new time block, as typed into the add-block form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockDraft {
    pub date: Option<NaiveDate>,
    pub title: String,
    /// Start time as typed (`HH:MM`).
    pub start: String,
    /// End time as typed (`HH:MM`).
    pub end: String,
    pub kind: BlockKind,
    pub priority: Priority,
    pub energy_required: EnergyLevel,
    pub description: String,
}

impl BlockDraft {
    /// Starts a draft pre-filled for an empty grid cell.
    #[must_use]
    pub fn for_slot(date: NaiveDate, hour: u8) -> Self {
        Self {
            date: Some(date),
            start: format!("{hour:02}:00"),
            ..Self::default()
        }
    }

    /// Converts the draft into a time block.
    ///
    /// Returns `None` when the date is missing, the title is blank, or either
    /// time is blank or unparsable. Ordering and overlap are not checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_protocol::planner::BlockDraft;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
    /// let mut draft = BlockDraft::for_slot(date, 14);
    /// draft.end = "15:00".into();
    /// assert!(draft.clone().into_block().is_none());
    ///
    /// draft.title = "Write report".into();
    /// let block = draft.into_block().unwrap();
    /// assert_eq!(block.start.to_string(), "14:00");
    /// ```
    #[must_use]
    pub fn into_block(self) -> Option<TimeBlock> {
        let date = self.date?;
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        let start: ClockTime = self.start.parse().ok()?;
        let end: ClockTime = self.end.parse().ok()?;

        let mut block = TimeBlock::new(title, date, start, end)
            .with_kind(self.kind)
            .with_priority(self.priority)
            .with_energy(self.energy_required);
        let description = self.description.trim();
        if !description.is_empty() {
            block.description = Some(description.to_string());
        }
        Some(block)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn t(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).expect("valid time")
    }

    #[test]
    fn week_of_sunday_reference() {
        insta::assert_debug_snapshot!(week_dates(ymd(2025, 7, 20)));
    }

    #[test]
    fn week_of_monday_reference_starts_on_itself() {
        let monday = ymd(2025, 7, 14);
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn week_crosses_month_boundary() {
        let week = week_dates(ymd(2025, 8, 1));
        assert_eq!(week[0], ymd(2025, 7, 28));
        assert_eq!(week[6], ymd(2025, 8, 3));
        assert_eq!(week_label(&week), "Week of July 28 - August 3");
    }

    #[test]
    fn weeks_at_calendar_bounds_saturate() {
        assert_eq!(week_start(NaiveDate::MIN), NaiveDate::MIN);
        assert_eq!(week_dates(NaiveDate::MIN)[0], NaiveDate::MIN);

        let last = week_dates(NaiveDate::MAX);
        assert_eq!(last[0].weekday(), Weekday::Mon);
        assert_eq!(last[6], NaiveDate::MAX);
    }

    #[test]
    fn label_for_mid_month_week() {
        let grid = WeekGrid::compute(&[], ymd(2025, 7, 18), SlotHours::default());
        assert_eq!(grid.label(), "Week of July 14 - July 20");
    }

    #[test]
    fn slot_window_bounds() {
        let hours = SlotHours::default();
        assert_eq!(hours.iter().collect::<Vec<_>>().len(), 13);
        assert_eq!(hours.hour_at(0), Some(8));
        assert_eq!(hours.hour_at(12), Some(20));
        assert_eq!(hours.hour_at(13), None);
        assert_eq!(hours.index_of(7), None);
        assert_eq!(hours.index_of(20), Some(12));
        assert!(SlotHours::new(0, 24).is_err());
        assert!(SlotHours::new(9, 9).is_ok());
    }

    #[test]
    fn grid_places_block_in_each_occupied_slot() {
        let friday = ymd(2025, 7, 18);
        let blocks = vec![TimeBlock::new("Deep work", friday, t(9, 0), t(11, 0))];
        let grid = WeekGrid::compute(&blocks, friday, SlotHours::default());

        let day = grid.day_index(friday).expect("in week");
        assert_eq!(day, 4);
        assert!(grid.is_empty_cell(day, 8));
        assert_eq!(grid.cell(day, 9).len(), 1);
        assert_eq!(grid.cell(day, 10).len(), 1);
        assert!(grid.is_empty_cell(day, 11));
        assert!(grid.hidden_blocks().is_empty());
    }

    #[test]
    fn stacking_prefers_priority_then_start_then_insertion() {
        let date = ymd(2025, 7, 18);
        let low = TimeBlock::new("low", date, t(9, 0), t(11, 0)).with_priority(Priority::Low);
        let high_late =
            TimeBlock::new("high late", date, t(10, 0), t(11, 0)).with_priority(Priority::High);
        let high_early =
            TimeBlock::new("high early", date, t(9, 0), t(11, 0)).with_priority(Priority::High);
        let high_early_second = TimeBlock::new("high early 2", date, t(9, 0), t(11, 0))
            .with_priority(Priority::High);
        let blocks = vec![low, high_late, high_early, high_early_second];

        let titles: Vec<&str> = blocks_in_slot(&blocks, date, 10)
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, ["high early", "high early 2", "high late", "low"]);
    }

    #[test]
    fn out_of_window_and_degenerate_blocks_are_hidden() {
        let date = ymd(2025, 7, 18);
        let blocks = vec![
            TimeBlock::new("Early run", date, t(6, 0), t(7, 0)),
            TimeBlock::new("Zero", date, t(10, 0), t(10, 0)),
            TimeBlock::new("Straddles", date, t(7, 0), t(9, 0)),
            TimeBlock::new("Other week", ymd(2025, 7, 25), t(6, 0), t(7, 0)),
        ];
        let grid = WeekGrid::compute(&blocks, date, SlotHours::default());
        let hidden: Vec<&str> = grid.hidden_blocks().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(hidden, ["Early run", "Zero"]);
        assert_eq!(grid.cell(4, 8).len(), 1);
    }

    #[test]
    fn out_of_range_cells_are_empty() {
        let grid = WeekGrid::compute(&[], ymd(2025, 7, 18), SlotHours::default());
        assert!(grid.cell(7, 9).is_empty());
        assert!(grid.cell(0, 21).is_empty());
    }

    #[test]
    fn blocks_per_day_counts_only_this_week() {
        let friday = ymd(2025, 7, 18);
        let blocks = vec![
            TimeBlock::new("a", friday, t(9, 0), t(10, 0)),
            TimeBlock::new("b", friday, t(10, 0), t(11, 0)),
            TimeBlock::new("c", ymd(2025, 7, 14), t(9, 0), t(10, 0)),
            TimeBlock::new("d", ymd(2025, 7, 21), t(9, 0), t(10, 0)),
        ];
        assert_eq!(blocks_per_day(&blocks, friday), [1, 0, 0, 0, 2, 0, 0]);
    }

    #[test]
    fn draft_rejects_missing_fields() {
        let date = ymd(2025, 7, 18);
        let complete = BlockDraft {
            date: Some(date),
            title: "Review".into(),
            start: "10:00".into(),
            end: "11:00".into(),
            ..BlockDraft::default()
        };
        assert!(complete.clone().into_block().is_some());

        let cases = [
            BlockDraft { date: None, ..complete.clone() },
            BlockDraft { title: String::new(), ..complete.clone() },
            BlockDraft { start: String::new(), ..complete.clone() },
            BlockDraft { end: "   ".into(), ..complete.clone() },
            BlockDraft { end: "eleven".into(), ..complete.clone() },
        ];
        for draft in cases {
            assert!(draft.into_block().is_none());
        }
    }

    #[test]
    fn draft_accepts_inverted_range() {
        let draft = BlockDraft {
            date: Some(ymd(2025, 7, 18)),
            title: "Backwards".into(),
            start: "15:00".into(),
            end: "14:00".into(),
            ..BlockDraft::default()
        };
        let block = draft.into_block().expect("accepted");
        assert!(block.is_degenerate());
    }

    #[test]
    fn slot_draft_prefills_date_and_start() {
        let date = ymd(2025, 7, 16);
        let draft = BlockDraft::for_slot(date, 8);
        assert_eq!(draft.date, Some(date));
        assert_eq!(draft.start, "08:00");
        assert!(draft.end.is_empty());
        assert!(draft.title.is_empty());
        assert_eq!(week_start(date).weekday(), Weekday::Mon);
    }
}
