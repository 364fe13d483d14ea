//! Status bar rendering widget.
//!
//! A single footer row of keybinding hints for the active tab, optionally
//! preceded by a short status message.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Renders the status bar.
///
/// # Arguments
///
/// * `message` - Optional status text shown before the hints
/// * `hints` - `(key, action)` pairs
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use anchor_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Some("2 blocks hidden"), &[("?", "Help")], area, &mut buf);
/// ```
pub fn render_status_bar(
    message: Option<&str>,
    hints: &[(&str, &str)],
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let message_style = Style::default().fg(Color::Cyan);

    let mut spans = Vec::new();
    if let Some(message) = message {
        spans.push(Span::styled(message.to_string(), message_style));
        spans.push(Span::styled("  |  ", text_style));
    }
    for (key, action) in hints {
        spans.push(Span::styled((*key).to_string(), key_style));
        spans.push(Span::styled(format!(" {action}  "), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn render_status_bar_contains_hints() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(None, &[("q", "Quit"), ("←→↑↓", "Navigate")], area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Quit"));
        assert!(content.contains("Navigate"));
        assert!(!content.contains('|'));
    }

    #[test]
    fn render_status_bar_with_message_shows_message() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(Some("Test message"), &[("?", "Help")], area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.starts_with("Test message  |  ? Help"));
    }
}
