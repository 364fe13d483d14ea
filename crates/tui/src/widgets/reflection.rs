//! Reflection hub: weekly insights, analytics and past reflections.

use anchor_protocol::{Insight, InsightTone, Reflection, ReflectionStats};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::render_placeholder;
use crate::state::{AppState, ReflectionTab};

#[must_use]
pub const fn tone_color(tone: InsightTone) -> Color {
    match tone {
        InsightTone::Celebrate => Color::Green,
        InsightTone::Urgent => Color::Red,
        InsightTone::Notable => Color::Yellow,
        InsightTone::Informational => Color::Blue,
    }
}

const fn tone_marker(tone: InsightTone) -> &'static str {
    match tone {
        InsightTone::Celebrate => "★",
        InsightTone::Urgent => "!",
        InsightTone::Notable => "•",
        InsightTone::Informational => "i",
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

fn sub_tab_line(active: ReflectionTab) -> Line<'static> {
    let mut spans = Vec::new();
    for tab in ReflectionTab::ALL {
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
        spans.push(Span::raw(" "));
    }
    spans.extend([
        Span::styled("  ←/→ switch  ", Style::default().fg(Color::DarkGray)),
        Span::styled("n", Style::default().fg(Color::Yellow)),
        Span::styled(" today's reflection", Style::default().fg(Color::DarkGray)),
    ]);
    Line::from(spans)
}

fn stat(label: &'static str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("{label} "), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
    ]
}

fn overview_lines(stats: &ReflectionStats) -> Vec<Line<'static>> {
    vec![
        Line::from(
            [
                stat("Avg Energy", format!("{:.1}/10", stats.average_energy)),
                stat("Avg Focus", format!("{:.1}/10", stats.average_focus)),
                stat("Avg Anxiety", format!("{:.1}/10", stats.average_anxiety)),
            ]
            .concat(),
        ),
        Line::from(
            [
                stat("Tasks Completed", stats.tasks_completed.to_string()),
                stat("Estimation Accuracy", format!("{}%", stats.estimation_accuracy)),
            ]
            .concat(),
        ),
        Line::from(
            [
                stat("Focus Hours", format!("{:.1}h", stats.focus_hours)),
                stat("Distractions", stats.distraction_events.to_string()),
            ]
            .concat(),
        ),
    ]
}

fn insight_lines(insights: &[Insight]) -> Vec<Line<'static>> {
    insights
        .iter()
        .flat_map(|insight| {
            let tone = insight.tone();
            let color = tone_color(tone);
            let mut tags = vec![Span::styled(
                insight.impact.label(),
                Style::default().fg(color),
            )];
            if insight.actionable {
                tags.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
                tags.push(Span::styled("Actionable", Style::default().fg(Color::Cyan)));
            }
            [
                Line::from(vec![
                    Span::styled(
                        format!("{} ", tone_marker(tone)),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        insight.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    insight.description.clone(),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(tags),
                Line::from(""),
            ]
        })
        .collect()
}

fn render_insights(state: &AppState, area: Rect, buf: &mut Buffer) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    Paragraph::new(overview_lines(&state.reflection_stats))
        .block(panel("This Week's Overview"))
        .render(rows[0], buf);
    Paragraph::new(insight_lines(&state.insights))
        .block(panel("Key Insights"))
        .wrap(Wrap { trim: true })
        .render(rows[1], buf);
}

fn history_lines(reflections: &[Reflection]) -> Vec<Line<'static>> {
    if reflections.is_empty() {
        return vec![Line::from(Span::styled(
            "No reflections yet. Press n to write today's.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))];
    }

    let mut newest_first: Vec<&Reflection> = reflections.iter().collect();
    newest_first.sort_by(|a, b| b.date.cmp(&a.date));

    let labelled = |label: &'static str, text: &str| -> Option<Line<'static>> {
        (!text.is_empty()).then(|| {
            Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
                Span::styled(text.to_string(), Style::default().fg(Color::Gray)),
            ])
        })
    };

    newest_first
        .into_iter()
        .flat_map(|reflection| {
            let mut lines = vec![
                Line::from(vec![
                    Span::raw(format!("{} ", reflection.mood.glyph())),
                    Span::styled(
                        reflection.long_date(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", reflection.mood.label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "Energy {}/10 • Focus {}/10 • Anxiety {}/10",
                        reflection.energy.value(),
                        reflection.focus.value(),
                        reflection.anxiety.value()
                    ),
                    Style::default().fg(Color::White),
                )),
            ];
            lines.extend(labelled("Accomplishments", &reflection.accomplishments));
            lines.extend(labelled("Challenges", &reflection.challenges));
            lines.extend(labelled("Improvements", &reflection.improvements));
            lines.push(Line::from(""));
            lines
        })
        .collect()
}

/// Renders the reflection tab with its active sub-tab.
pub fn render_reflection(state: &AppState, area: Rect, buf: &mut Buffer) {
    let hub = panel("Reflection Hub");
    let inner = hub.inner(area);
    hub.render(area, buf);
    if inner.height == 0 {
        return;
    }

    buf.set_line(inner.x, inner.y, &sub_tab_line(state.reflection_tab), inner.width);
    let content = Rect {
        y: inner.y + 1,
        height: inner.height - 1,
        ..inner
    };

    match state.reflection_tab {
        ReflectionTab::Insights => render_insights(state, content, buf),
        ReflectionTab::Analytics => render_placeholder(
            "Analytics",
            "Trends across your reflections",
            "Detailed analytics charts coming soon...",
            content,
            buf,
        ),
        ReflectionTab::History => Paragraph::new(history_lines(state.store.reflections()))
            .wrap(Wrap { trim: true })
            .render(content, buf),
    }
}
