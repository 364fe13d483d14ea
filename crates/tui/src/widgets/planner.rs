//! Weekly planner grid.
//!
//! One column per day (Monday first) and one row per displayed hour. Each
//! cell shows the first block in stacking order, with `+N` when more blocks
//! share the slot. When the window is too short for every hour, rows scroll
//! to keep the cursor visible.
//!
//! Rendering and [`planner_cell_at`] share one geometry so clicks always
//! land on the cell that is drawn under the pointer.

use anchor_protocol::{
    BlockKind, SlotHours, TimeBlock, WeekGrid,
    planner::DAYS_PER_WEEK,
};
use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::{priority_color, truncate};
use crate::layout::{PLANNER_HEADER_ROWS, PLANNER_TIME_COLUMN_WIDTH};

/// Where the grid lands inside the planner area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Geometry {
    /// Left edge of the first day column.
    grid_x: u16,
    /// Top edge of the first hour row.
    grid_y: u16,
    day_width: u16,
    /// Index of the first displayed slot.
    first_slot: usize,
    visible_slots: usize,
}

impl Geometry {
    fn new(area: Rect, hours: SlotHours, cursor_hour: u8) -> Option<Self> {
        let day_width = area.width.saturating_sub(PLANNER_TIME_COLUMN_WIDTH)
            / u16::try_from(DAYS_PER_WEEK).ok()?;
        let visible_slots = usize::from(area.height.saturating_sub(PLANNER_HEADER_ROWS));
        if day_width == 0 || visible_slots == 0 {
            return None;
        }

        let total = hours.len();
        let cursor = hours.index_of(cursor_hour).unwrap_or(0);
        let first_slot = if total <= visible_slots {
            0
        } else {
            cursor
                .saturating_sub(visible_slots / 2)
                .min(total - visible_slots)
        };

        Some(Self {
            grid_x: area.x + PLANNER_TIME_COLUMN_WIDTH,
            grid_y: area.y + PLANNER_HEADER_ROWS,
            day_width,
            first_slot,
            visible_slots: visible_slots.min(total),
        })
    }

    fn day_x(&self, day: usize) -> u16 {
        self.grid_x + self.day_width * u16::try_from(day).unwrap_or(0)
    }
}

/// Background color of a block on the grid.
///
/// Task blocks take their priority's color; every other kind has its own.
#[must_use]
pub const fn block_color(block: &TimeBlock) -> Color {
    match block.kind {
        BlockKind::Task => priority_color(block.priority),
        BlockKind::Focus => Color::Magenta,
        BlockKind::Meeting => Color::Blue,
        BlockKind::Break => Color::Green,
        BlockKind::Buffer => Color::Gray,
    }
}

/// Returns the `(day, hour)` of the grid cell at a terminal position.
///
/// `cursor_hour` must be the one the grid was last rendered with, since it
/// decides how far the rows are scrolled.
///
/// # Examples
///
/// ```
/// use anchor_protocol::SlotHours;
/// use anchor_tui::widgets::planner_cell_at;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 76, 20);
/// let hours = SlotHours::default();
///
/// // Columns are 10 wide after the 6-column hour gutter
/// assert_eq!(planner_cell_at(area, hours, 8, 6, 2), Some((0, 8)));
/// assert_eq!(planner_cell_at(area, hours, 8, 27, 4), Some((2, 10)));
/// assert_eq!(planner_cell_at(area, hours, 8, 3, 4), None);
/// ```
#[must_use]
pub fn planner_cell_at(
    area: Rect,
    hours: SlotHours,
    cursor_hour: u8,
    column: u16,
    row: u16,
) -> Option<(usize, u8)> {
    let geometry = Geometry::new(area, hours, cursor_hour)?;
    let dx = column.checked_sub(geometry.grid_x)?;
    let dy = usize::from(row.checked_sub(geometry.grid_y)?);
    let day = usize::from(dx / geometry.day_width);
    if day >= DAYS_PER_WEEK || dy >= geometry.visible_slots {
        return None;
    }
    let hour = hours.hour_at(geometry.first_slot + dy)?;
    Some((day, hour))
}

fn render_title(grid: &WeekGrid<'_>, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![
        Span::styled(
            "Weekly Planner",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        Span::styled(grid.label(), Style::default().fg(Color::Cyan)),
    ];
    let hidden = grid.hidden_blocks().len();
    if hidden > 0 {
        let noun = if hidden == 1 { "block" } else { "blocks" };
        spans.push(Span::styled(
            format!("  ({hidden} {noun} not on the grid)"),
            Style::default().fg(Color::Yellow),
        ));
    }
    buf.set_line(area.x, area.y, &Line::from(spans), area.width);
}

fn render_day_headers(
    grid: &WeekGrid<'_>,
    geometry: &Geometry,
    today: NaiveDate,
    area: Rect,
    buf: &mut Buffer,
) {
    let y = area.y + 1;
    for (day, date) in grid.dates().iter().enumerate() {
        let style = if *date == today {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let x = geometry.day_x(day);
        let width = usize::from(geometry.day_width.saturating_sub(1));
        let label = format!("{:<width$}", date.format("%a %-d").to_string());
        buf.set_stringn(x, y, label, width, style);
    }
}

fn cell_text(blocks: &[&TimeBlock], width: usize) -> String {
    let Some((first, rest)) = blocks.split_first() else {
        return String::new();
    };
    if rest.is_empty() {
        truncate(&first.title, width)
    } else {
        let suffix = format!("+{}", rest.len());
        let title_width = width.saturating_sub(suffix.len() + 1);
        format!("{} {suffix}", truncate(&first.title, title_width))
    }
}

/// Renders the planner for one week.
///
/// `cursor` is the `(day, hour)` of the highlighted cell and `today` gets
/// its column header highlighted when it falls in the week.
pub fn render_planner(
    grid: &WeekGrid<'_>,
    cursor: (usize, u8),
    today: NaiveDate,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height == 0 {
        return;
    }
    render_title(grid, area, buf);

    let hours = grid.hours();
    let Some(geometry) = Geometry::new(area, hours, cursor.1) else {
        return;
    };
    render_day_headers(grid, &geometry, today, area, buf);

    let cell_width = geometry.day_width.saturating_sub(1);
    for row in 0..geometry.visible_slots {
        let Some(hour) = hours.hour_at(geometry.first_slot + row) else {
            break;
        };
        let y = geometry.grid_y + u16::try_from(row).unwrap_or(0);
        buf.set_stringn(
            area.x,
            y,
            format!("{hour:02}:00"),
            usize::from(PLANNER_TIME_COLUMN_WIDTH),
            Style::default().fg(Color::DarkGray),
        );

        for day in 0..DAYS_PER_WEEK {
            let blocks = grid.cell(day, hour);
            let mut style = match blocks.first() {
                Some(block) => Style::default().fg(Color::Black).bg(block_color(block)),
                None => Style::default().fg(Color::DarkGray),
            };
            if cursor == (day, hour) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let text = match cell_text(blocks, usize::from(cell_width)) {
                empty if empty.is_empty() => "·".to_string(),
                text => text,
            };
            let padded = format!("{text:<width$}", width = usize::from(cell_width));
            buf.set_stringn(
                geometry.day_x(day),
                y,
                padded,
                usize::from(cell_width),
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use anchor_protocol::{ClockTime, Priority};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 16).expect("valid date")
    }

    fn block(title: &str, start: u8, end: u8) -> TimeBlock {
        let t = |hour| ClockTime::on_the_hour(hour).expect("valid hour");
        TimeBlock::new(title, today(), t(start), t(end))
    }

    fn render(blocks: &[TimeBlock], cursor: (usize, u8), width: u16, height: u16) -> Buffer {
        let grid = WeekGrid::compute(blocks, today(), SlotHours::default());
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render_planner(&grid, cursor, today(), area, &mut buf);
        buf
    }

    #[test]
    fn shows_week_label_and_days() {
        let content = buffer_to_string(&render(&[], (0, 8), 80, 20));
        assert!(content.contains("Weekly Planner · Week of July 14 - July 20"));
        assert!(content.contains("Mon 14"));
        assert!(content.contains("Sun 20"));
        assert!(content.contains("08:00"));
        assert!(content.contains("20:00"));
    }

    #[test]
    fn planner_header() {
        let content = buffer_to_string(&render(&[], (0, 8), 76, 4));
        let header = content.lines().take(2).collect::<Vec<_>>().join("\n");
        insta::assert_snapshot!(header);
    }

    #[test]
    fn block_appears_in_each_occupied_hour() {
        let buf = render(&[block("Deep work", 10, 12)], (0, 8), 76, 20);
        let content = buffer_to_string(&buf);
        let rows: Vec<&str> = content.lines().collect();

        // Wednesday is day 2; rows start two below the top
        let wednesday_x = usize::from(PLANNER_TIME_COLUMN_WIDTH) + 2 * 10;
        let at = |row: usize| rows[row].chars().skip(wednesday_x).take(9).collect::<String>();
        assert_eq!(at(4), "Deep work");
        assert_eq!(at(5), "Deep work");
        assert_ne!(at(6), "Deep work");
    }

    #[test]
    fn stacked_cell_shows_overflow_count() {
        let blocks = [
            block("Low", 9, 10).with_priority(Priority::Low),
            block("Urgent", 9, 10).with_priority(Priority::High),
        ];
        let content = buffer_to_string(&render(&blocks, (0, 8), 76, 20));
        assert!(content.contains("Urgent +1"));
    }

    #[test]
    fn block_colors_follow_kind() {
        let task = block("t", 9, 10).with_priority(Priority::High);
        assert_eq!(block_color(&task), Color::Red);
        let focus = block("f", 9, 10).with_kind(BlockKind::Focus);
        assert_eq!(block_color(&focus), Color::Magenta);
        let rest = block("b", 9, 10).with_kind(BlockKind::Break);
        assert_eq!(block_color(&rest), Color::Green);
    }

    #[test]
    fn cursor_cell_is_reversed() {
        let buf = render(&[], (3, 9), 76, 20);
        let x = PLANNER_TIME_COLUMN_WIDTH + 3 * 10;
        let cell = buf.cell((x, 3)).expect("cell");
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn rows_scroll_to_keep_cursor_visible() {
        // Eight hour rows fit; the cursor sits on the last slot
        let content = buffer_to_string(&render(&[], (0, 20), 76, 10));
        assert!(content.contains("20:00"));
        assert!(!content.contains("08:00"));
        assert_eq!(
            planner_cell_at(Rect::new(0, 0, 76, 10), SlotHours::default(), 20, 6, 9),
            Some((0, 20))
        );
    }

    #[test]
    fn hidden_blocks_are_reported() {
        let blocks = [block("Early run", 6, 7)];
        let content = buffer_to_string(&render(&blocks, (0, 8), 80, 20));
        assert!(content.contains("1 block not on the grid"));
    }

    #[test]
    fn same_hour_block_is_not_drawn() {
        let short = TimeBlock::new(
            "Quick sync",
            today(),
            ClockTime::new(10, 0).expect("valid time"),
            ClockTime::new(10, 30).expect("valid time"),
        );
        let content = buffer_to_string(&render(&[short], (0, 8), 80, 20));
        assert!(!content.contains("Quick sync"));
        assert!(content.contains("1 block not on the grid"));
    }

    #[test]
    fn hit_testing_rejects_outside_positions() {
        let area = Rect::new(0, 0, 76, 20);
        let hours = SlotHours::default();
        assert_eq!(planner_cell_at(area, hours, 8, 10, 1), None);
        assert_eq!(planner_cell_at(area, hours, 8, 10, 15), None);
        assert_eq!(planner_cell_at(area, hours, 8, 75, 5), Some((6, 11)));
    }

    #[test]
    fn narrow_area_does_not_panic() {
        render(&[], (0, 8), 10, 3);
        render(&[], (0, 8), 80, 1);
    }
}
