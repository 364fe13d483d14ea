//! Centralized layout measurements for the TUI.
//!
//! Shared constants for dimensions used by both rendering and click
//! hit-testing, so the two never disagree.

/// Height of the header bar in rows.
///
/// The header displays the application title, the energy gauge and the help
/// cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the tab bar in rows.
pub const TAB_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each task card on the dashboard: two border rows plus the
/// title, badge and timing lines.
pub const TASK_CARD_HEIGHT: u16 = 5;

/// Width of the hour label column on the planner grid.
pub const PLANNER_TIME_COLUMN_WIDTH: u16 = 6;

/// Rows above the first hour row on the planner: the week label and the
/// day header.
pub const PLANNER_HEADER_ROWS: u16 = 2;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message.
pub const MIN_HEIGHT: u16 = 12;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The planner has 7 day columns next to the hour column; each needs room
/// for a day name and a truncated block title.
pub const MIN_WIDTH: u16 = 60;
