//! Anxiety tab: the check-in slider, coping strategies and recent events.

use anchor_protocol::{AnxietyBand, AnxietyLevel, AnxietyLog, CopingStrategy};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::progress_bar;
use crate::state::AppState;

const CHECK_IN_HEIGHT: u16 = 6;
const PROMPT_HEIGHT: u16 = 10;

#[must_use]
pub const fn band_color(band: AnxietyBand) -> Color {
    match band {
        AnxietyBand::Calm => Color::Green,
        AnxietyBand::Moderate => Color::Yellow,
        AnxietyBand::Elevated => Color::Red,
    }
}

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

fn check_in_lines(level: AnxietyLevel, width: usize) -> Vec<Line<'static>> {
    let color = band_color(level.band());
    let level_label = format!("Level {} ({})", level.value(), level.band().label());
    let ends = "Calm".len() + "Very Anxious".len();
    let gap = width.saturating_sub(ends + level_label.len());
    let left = gap / 2;

    let mut lines = vec![
        Line::from(Span::styled(
            "How are you feeling right now? (1-10)",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            progress_bar(f64::from(level.value()) / 10.0, width),
            Style::default().fg(color),
        )),
        Line::from(vec![
            Span::styled("Calm", Style::default().fg(Color::DarkGray)),
            Span::raw(" ".repeat(left)),
            Span::styled(
                level_label,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(gap - left)),
            Span::styled("Very Anxious", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if level.suggests_coping() {
        lines.extend([
            Line::from(""),
            Line::from(Span::styled(
                "⚠ Elevated anxiety detected",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Let's try a coping strategy to help you feel more centered.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::styled(
                    " to start a coping strategy and log this event",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ]);
    }
    lines
}

fn strategy_lines(strategies: &[CopingStrategy]) -> Vec<Line<'static>> {
    strategies
        .iter()
        .flat_map(|strategy| {
            [
                Line::from(vec![
                    Span::styled(
                        strategy.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(
                            "  {} · {} min · {}% effective",
                            strategy.category.label(),
                            strategy.minutes_required,
                            strategy.effectiveness
                        ),
                        Style::default().fg(Color::Cyan),
                    ),
                ]),
                Line::from(Span::styled(
                    strategy.description.clone(),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ]
        })
        .collect()
}

fn event_lines(logs: &[AnxietyLog]) -> Vec<Line<'static>> {
    if logs.is_empty() {
        return vec![Line::from(Span::styled(
            "No anxiety events logged yet.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))];
    }

    let mut recent: Vec<&AnxietyLog> = logs.iter().collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    recent
        .into_iter()
        .flat_map(|log| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    log.trigger.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  Level {}", log.level.value()),
                    Style::default().fg(band_color(log.level.band())),
                ),
                Span::styled(
                    format!("  {}", log.timestamp.format("%b %-d %H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ])];
            if !log.coping_strategy.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("Strategy: {}", log.coping_strategy),
                    Style::default().fg(Color::Cyan),
                )));
            }
            if !log.outcome.is_empty() {
                lines.push(Line::from(Span::styled(
                    log.outcome.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(if log.priority_maintained {
                Line::from(Span::styled(
                    "✓ Priorities Maintained",
                    Style::default().fg(Color::Green),
                ))
            } else {
                Line::from(Span::styled(
                    "✗ Priorities Affected",
                    Style::default().fg(Color::Red),
                ))
            });
            lines.push(Line::from(""));
            lines
        })
        .collect()
}

/// Renders the anxiety tab.
///
/// The check-in panel grows to show the coping prompt once the slider goes
/// above 5.
pub fn render_anxiety(state: &AppState, area: Rect, buf: &mut Buffer) {
    let check_in_height = if state.check_in.suggests_coping() {
        PROMPT_HEIGHT
    } else {
        CHECK_IN_HEIGHT
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(check_in_height), Constraint::Min(0)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let check_in = panel("Anxiety Check-in");
    let inner = check_in.inner(rows[0]);
    check_in.render(rows[0], buf);
    Paragraph::new(check_in_lines(state.check_in, usize::from(inner.width)))
        .alignment(Alignment::Left)
        .render(inner, buf);

    Paragraph::new(strategy_lines(&state.strategies))
        .block(panel("Coping Strategies"))
        .wrap(Wrap { trim: true })
        .render(columns[0], buf);

    Paragraph::new(event_lines(state.store.anxiety_logs()))
        .block(panel("Recent Anxiety Events"))
        .wrap(Wrap { trim: true })
        .render(columns[1], buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use anchor_protocol::{SlotHours, Store};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2025, 7, 16).expect("valid date");
        let now = Utc
            .with_ymd_and_hms(2025, 7, 16, 15, 0, 0)
            .single()
            .expect("valid time");
        AppState::new(Store::seeded(today, now), today, SlotHours::default())
    }

    fn render(state: &AppState) -> String {
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        render_anxiety(state, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn default_check_in_is_calm_without_prompt() {
        let content = render(&state());
        assert!(content.contains("How are you feeling right now? (1-10)"));
        assert!(content.contains("Level 3 (Calm)"));
        assert!(!content.contains("Elevated anxiety detected"));
    }

    #[test]
    fn level_five_does_not_prompt() {
        let mut state = state();
        state.check_in = AnxietyLevel::clamped(5);
        assert!(!render(&state).contains("Elevated anxiety detected"));
    }

    #[test]
    fn level_six_prompts_for_coping() {
        let mut state = state();
        state.check_in = AnxietyLevel::clamped(6);
        let content = render(&state);
        assert!(content.contains("Level 6 (Moderate)"));
        assert!(content.contains("Elevated anxiety detected"));
        assert!(content.contains("Let's try a coping strategy to help you feel more centered."));
    }

    #[test]
    fn lists_strategies_and_events() {
        let content = render(&state());
        assert!(content.contains("4-7-8 Breathing"));
        assert!(content.contains("85% effective"));
        assert!(content.contains("Unexpected meeting request"));
        assert!(content.contains("Priorities Maintained"));
    }

    #[test]
    fn newest_event_comes_first() {
        let content = render(&state());
        let newest = content.find("Unexpected meeting request").expect("newest");
        let older = content.find("Email about urgent deadline").expect("older");
        assert!(newest < older);
    }

    #[test]
    fn empty_log_shows_hint() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 16).expect("valid date");
        let state = AppState::new(Store::in_memory(), today, SlotHours::default());
        assert!(render(&state).contains("No anxiety events logged yet."));
    }
}
