//! Task card rendering widget.
//!
//! A card shows a task's completion state, title, badges and timing. When
//! an actual time is recorded the card also shows how accurate the estimate
//! was and how much of it has been used.

use anchor_protocol::{AccuracyBand, EnergyLevel, Priority, Task};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{progress_bar, truncate};

/// Width of the usage bar on the timing line.
const USAGE_BAR_WIDTH: usize = 8;

/// Returns the color associated with a priority.
///
/// # Examples
///
/// ```
/// use anchor_protocol::Priority;
/// use anchor_tui::widgets::priority_color;
/// use ratatui::style::Color;
///
/// assert_eq!(priority_color(Priority::High), Color::Red);
/// assert_eq!(priority_color(Priority::Medium), Color::Yellow);
/// assert_eq!(priority_color(Priority::Low), Color::Blue);
/// ```
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Blue,
    }
}

#[must_use]
pub const fn energy_color(energy: EnergyLevel) -> Color {
    match energy {
        EnergyLevel::High => Color::Red,
        EnergyLevel::Medium => Color::Yellow,
        EnergyLevel::Low => Color::Green,
    }
}

#[must_use]
pub const fn accuracy_color(band: AccuracyBand) -> Color {
    match band {
        AccuracyBand::Good => Color::Green,
        AccuracyBand::Fair => Color::Yellow,
        AccuracyBand::Poor => Color::Red,
    }
}

fn title_line(task: &Task, is_selected: bool, width: usize) -> Line<'static> {
    let (glyph, glyph_style) = if task.completed {
        ("✓ ", Style::default().fg(Color::Green))
    } else {
        ("○ ", Style::default().fg(Color::Gray))
    };
    let title_style = match (task.completed, is_selected) {
        (true, _) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        (false, true) => Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(Color::White),
    };

    let action = match (task.completed, task.timer_running) {
        (true, _) => "",
        (false, true) => "⏸ Pause",
        (false, false) => "▶ Start",
    };
    let action_width = action.chars().count();
    let title_width = width.saturating_sub(2 + action_width + 1);
    let title = truncate(&task.title, title_width);
    let gap = width.saturating_sub(2 + title.chars().count() + action_width);

    Line::from(vec![
        Span::styled(glyph, glyph_style),
        Span::styled(title, title_style),
        Span::raw(" ".repeat(gap)),
        Span::styled(action, Style::default().fg(Color::Cyan)),
    ])
}

fn badge_line(task: &Task) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("[{}]", task.priority.label()),
            Style::default().fg(priority_color(task.priority)),
        ),
        Span::raw(" "),
        Span::styled("⚡", Style::default().fg(energy_color(task.energy_required))),
        Span::styled(
            task.energy_required.label(),
            Style::default().fg(Color::Gray),
        ),
    ];
    if let Some(category) = &task.category {
        spans.push(Span::styled(
            format!("  #{category}"),
            Style::default().fg(Color::Magenta),
        ));
    }
    if let Some(description) = &task.description {
        spans.push(Span::styled(
            format!("  {description}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn timing_line(task: &Task) -> Line<'static> {
    let dim = Style::default().fg(Color::Gray);
    let mut spans = vec![Span::styled(
        format!("Est: {}min", task.estimated_minutes),
        dim,
    )];
    if let Some(actual) = task.recorded_minutes() {
        spans.push(Span::styled(format!(" • Actual: {actual}min"), dim));
    }
    if let (Some(accuracy), Some(band)) = (task.estimate_accuracy(), task.accuracy_band()) {
        spans.push(Span::styled(
            format!(" ({:.0}% accurate)", accuracy.round()),
            Style::default()
                .fg(accuracy_color(band))
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(ratio) = task.progress_ratio() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            progress_bar(ratio, USAGE_BAR_WIDTH),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(spans)
}

/// Renders a task card to the buffer.
///
/// # Layout
///
/// ```text
/// +----------------------------------------------+
/// |○ Review project proposal            ▶ Start |
/// |[high] ⚡high  #work                          |
/// |Est: 45min • Actual: 50min (89% accurate) ███ |
/// +----------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use anchor_protocol::Task;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use anchor_tui::widgets::render_task_card;
///
/// let task = Task::new("Write documentation", 90);
/// let area = Rect::new(0, 0, 50, 5);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, false, area, &mut buf);
/// ```
pub fn render_task_card(task: &Task, is_selected: bool, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let border_color = match (task.completed, is_selected) {
        (_, true) => Color::LightCyan,
        (true, false) => Color::Green,
        (false, false) => Color::DarkGray,
    };
    let inner_width = usize::from(area.width.saturating_sub(2));

    let content = vec![
        title_line(task, is_selected, inner_width),
        badge_line(task),
        timing_line(task),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .render(area, buf);
}
