//! Dashboard widget: today's tasks, weekly progress and the week at a glance.
//!
//! # Layout
//!
//! ```text
//! +-- Today's Focus ----------------+-- Weekly Progress -----+
//! | Wednesday, July 16 • 4 tasks    | Tasks Completed  12/18 |
//! | +-----------------------------+ | ██████████░░░░░        |
//! | |○ Review project proposal    | | ...                    |
//! | +-----------------------------+ +-- Quick Actions -------+
//! |                                 | n  Add task            |
//! +---------------------------------+------------------------+
//! | Mon    Tue    Wed    ...                                 |
//! | 2      1      Today 3                                    |
//! +----------------------------------------------------------+
//! ```

use anchor_protocol::{
    WeeklyStats,
    planner::{DAYS_PER_WEEK, blocks_per_day, week_dates},
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::{progress_bar, render_task_card};
use crate::layout::TASK_CARD_HEIGHT;
use crate::state::AppState;

/// Height of the weekly overview strip, borders included.
const OVERVIEW_HEIGHT: u16 = 4;

/// Height of the weekly progress panel, borders included.
const PROGRESS_HEIGHT: u16 = 8;

const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("n", "Add task"),
    ("Enter", "Complete task"),
    ("t", "Start/pause timer"),
    ("+/-", "Log 5 minutes"),
    ("2", "Plan your week"),
    ("5", "Anxiety check-in"),
];

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Formats hours with one decimal only when needed (`24.5h`, `30h`).
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.0}h")
    } else {
        format!("{hours:.1}h")
    }
}

/// Calculates the scroll offset that keeps the selected card visible.
fn calculate_scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if total <= visible {
        return 0;
    }
    let max_offset = total.saturating_sub(visible);
    selected.saturating_sub(visible / 2).min(max_offset)
}

fn render_today(state: &AppState, area: Rect, buf: &mut Buffer) {
    let block = panel("Today's Focus");
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }

    let summary = Line::from(vec![
        Span::styled(
            state.today.format("%A, %B %-d").to_string(),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(" • {} tasks remaining", state.store.remaining_tasks()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    buf.set_line(inner.x, inner.y, &summary, inner.width);

    let list_area = Rect {
        y: inner.y + 1,
        height: inner.height - 1,
        ..inner
    };
    let tasks = state.store.tasks();
    if tasks.is_empty() {
        buf.set_line(
            list_area.x,
            list_area.y,
            &Line::from(Span::styled(
                "No tasks yet. Press n to add one.",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
            list_area.width,
        );
        return;
    }

    let visible = usize::from((list_area.height / TASK_CARD_HEIGHT).max(1));
    let offset = calculate_scroll_offset(state.selected_task, tasks.len(), visible);
    for (row, (idx, task)) in tasks.iter().enumerate().skip(offset).take(visible).enumerate() {
        let y = list_area.y + TASK_CARD_HEIGHT * u16::try_from(row).unwrap_or(u16::MAX);
        let card = Rect {
            y,
            height: TASK_CARD_HEIGHT,
            ..list_area
        }
        .intersection(list_area);
        render_task_card(task, state.selected_task == Some(idx), card, buf);
    }
}

fn progress_lines(stats: &WeeklyStats, width: usize) -> Vec<Line<'static>> {
    let rows = [
        (
            "Tasks Completed",
            format!("{}/{}", stats.tasks_completed, stats.total_tasks),
            stats.completion_ratio(),
            Color::Green,
        ),
        (
            "Estimate Accuracy",
            format!("{}/{}", stats.accurate_estimates, stats.total_estimates),
            stats.accuracy_ratio(),
            Color::Cyan,
        ),
        (
            "Focus Time",
            format!(
                "{}/{}",
                format_hours(stats.focus_hours),
                format_hours(stats.target_focus_hours)
            ),
            stats.focus_ratio(),
            Color::Magenta,
        ),
    ];

    rows.into_iter()
        .flat_map(|(label, figure, ratio, color)| {
            let gap = width.saturating_sub(label.len() + figure.len()).max(1);
            [
                Line::from(vec![
                    Span::styled(label, Style::default().fg(Color::Gray)),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(figure, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(
                    progress_bar(ratio, width),
                    Style::default().fg(color),
                )),
            ]
        })
        .collect()
}

fn render_progress(stats: &WeeklyStats, area: Rect, buf: &mut Buffer) {
    let block = panel("Weekly Progress");
    let inner = block.inner(area);
    block.render(area, buf);
    Paragraph::new(progress_lines(stats, usize::from(inner.width))).render(inner, buf);
}

fn render_quick_actions(area: Rect, buf: &mut Buffer) {
    let block = panel("Quick Actions");
    let inner = block.inner(area);
    block.render(area, buf);

    let lines: Vec<Line> = QUICK_ACTIONS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                Span::raw("  "),
                Span::styled(*action, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    Paragraph::new(lines).render(inner, buf);
}

fn render_overview(state: &AppState, area: Rect, buf: &mut Buffer) {
    let block = panel("Weekly Overview");
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let dates = week_dates(state.today);
    let counts = blocks_per_day(state.store.time_blocks(), state.today);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); DAYS_PER_WEEK])
        .split(inner);

    for ((date, count), column) in dates.iter().zip(counts).zip(columns.iter()) {
        let is_today = *date == state.today;
        let day_style = if is_today {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let day = if is_today {
            "Today".to_string()
        } else {
            date.format("%a").to_string()
        };
        buf.set_stringn(column.x, column.y, day, usize::from(column.width), day_style);
        if column.height > 1 {
            let noun = if count == 1 { "block" } else { "blocks" };
            buf.set_stringn(
                column.x,
                column.y + 1,
                format!("{count} {noun}"),
                usize::from(column.width),
                Style::default().fg(Color::DarkGray),
            );
        }
    }
}

/// Renders the dashboard tab.
pub fn render_dashboard(state: &AppState, area: Rect, buf: &mut Buffer) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(OVERVIEW_HEIGHT)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(PROGRESS_HEIGHT), Constraint::Min(0)])
        .split(columns[1]);

    render_today(state, columns[0], buf);
    render_progress(&state.weekly_stats, side[0], buf);
    render_quick_actions(side[1], buf);
    render_overview(state, rows[1], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use anchor_protocol::{SlotHours, Store};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 16).expect("valid date")
    }

    fn render(state: &AppState, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render_dashboard(state, area, &mut buf);
        buffer_to_string(&buf)
    }

    fn seeded_state() -> AppState {
        let now = Utc.with_ymd_and_hms(2025, 7, 16, 9, 0, 0).single().expect("valid time");
        AppState::new(Store::seeded(today(), now), today(), SlotHours::default())
    }

    #[test]
    fn shows_date_and_remaining_count() {
        let state = seeded_state();
        let remaining = state.store.remaining_tasks();
        let content = render(&state, 120, 30);
        assert!(content.contains("Today's Focus"));
        assert!(content.contains(&format!("Wednesday, July 16 • {remaining} tasks remaining")));
    }

    #[test]
    fn shows_weekly_progress_figures() {
        let content = render(&seeded_state(), 120, 30);
        assert!(content.contains("12/18"));
        assert!(content.contains("8/12"));
        assert!(content.contains("24.5h/30h"));
    }

    #[test]
    fn overview_marks_today() {
        let content = render(&seeded_state(), 120, 30);
        assert!(content.contains("Today"));
        assert!(content.contains("Mon"));
    }

    #[test]
    fn empty_store_shows_hint() {
        let state = AppState::new(Store::in_memory(), today(), SlotHours::default());
        let content = render(&state, 120, 30);
        assert!(content.contains("No tasks yet"));
        assert!(content.contains("0 tasks remaining"));
    }

    #[test]
    fn hours_formatting() {
        assert_eq!(format_hours(24.5), "24.5h");
        assert_eq!(format_hours(30.0), "30h");
    }

    #[test]
    fn scroll_offset_keeps_selection_visible() {
        assert_eq!(calculate_scroll_offset(None, 10, 3), 0);
        assert_eq!(calculate_scroll_offset(Some(2), 3, 5), 0);
        assert_eq!(calculate_scroll_offset(Some(9), 10, 3), 7);
        assert_eq!(calculate_scroll_offset(Some(5), 10, 3), 4);
    }

    #[test]
    fn small_area_does_not_panic() {
        render(&seeded_state(), 20, 5);
        render(&seeded_state(), 1, 1);
    }
}
