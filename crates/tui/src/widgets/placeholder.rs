//! Placeholder panel for features that are not built yet.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Renders a bordered card with a title, a description and a centered
/// "coming soon" message.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use anchor_tui::widgets::render_placeholder;
///
/// let area = Rect::new(0, 0, 60, 10);
/// let mut buf = Buffer::empty(area);
/// render_placeholder(
///     "Time Tracker",
///     "Track and refine your time estimates",
///     "Time tracker coming soon...",
///     area,
///     &mut buf,
/// );
/// ```
pub fn render_placeholder(
    title: &str,
    description: &str,
    message: &str,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = vec![
        Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    let padding = inner.height.saturating_sub(4) / 2;
    lines.extend((0..padding).map(|_| Line::from("")));
    lines.push(
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn shows_title_and_message() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        render_placeholder("Analytics", "Charts", "Detailed analytics charts coming soon...", area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Analytics"));
        assert!(content.contains("Detailed analytics charts coming soon..."));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        render_placeholder("T", "d", "m", area, &mut buf);
    }
}
