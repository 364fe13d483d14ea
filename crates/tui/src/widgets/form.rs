//! Modal form overlay.
//!
//! Draws the open [`FormState`] as a centered dialog: one row per field, the
//! focused row highlighted, and key hints at the bottom.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::{centered_rect, truncate};
use crate::form::{FieldValue, FormKind, FormState};

const FORM_WIDTH: u16 = 72;

fn value_span(value: &FieldValue, focused: bool, width: usize) -> Span<'static> {
    let text = match value {
        FieldValue::Text(text) if focused => format!("{}_", truncate(text, width.saturating_sub(1))),
        FieldValue::Text(text) if text.is_empty() => "-".to_string(),
        other => truncate(&other.display(), width),
    };
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled(text, style)
}

fn hint_line() -> Line<'static> {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled("Tab", key),
        Span::styled(" next  ", text),
        Span::styled("←→", key),
        Span::styled(" change  ", text),
        Span::styled("Enter", key),
        Span::styled(" save  ", text),
        Span::styled("Esc", key),
        Span::styled(" cancel", text),
    ])
}

/// Renders `form` centered over `area`.
///
/// # Examples
///
/// ```
/// use anchor_tui::form::FormState;
/// use anchor_tui::widgets::render_form;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_form(&FormState::new_task(), area, &mut buf);
/// ```
pub fn render_form(form: &FormState, area: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();
    if let FormKind::NewBlock { date } = form.kind() {
        lines.push(Line::from(Span::styled(
            format!("Date: {}", date.format("%A, %B %-d, %Y")),
            Style::default().fg(Color::Cyan),
        )));
    }

    let label_width = form
        .fields()
        .iter()
        .map(|field| field.label.chars().count())
        .max()
        .unwrap_or(0);
    let value_width = usize::from(FORM_WIDTH.min(area.width))
        .saturating_sub(label_width + 6);

    for (idx, field) in form.fields().iter().enumerate() {
        let focused = idx == form.focused();
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:<label_width$}  ", field.label), label_style),
            value_span(&field.value, focused, value_width),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(hint_line());

    // Content plus the top and bottom border
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let popup = centered_rect(FORM_WIDTH, height, area);
    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form.kind().title()),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightCyan));

    Paragraph::new(lines).block(block).render(popup, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use anchor_protocol::planner::BlockDraft;
    use chrono::NaiveDate;

    fn render(form: &FormState) -> String {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        render_form(form, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn task_form_lists_fields() {
        let content = render(&FormState::new_task());
        assert!(content.contains("Add Task"));
        assert!(content.contains("Title"));
        assert!(content.contains("< medium >"));
        assert!(content.contains("Enter save"));
    }

    #[test]
    fn focused_text_field_shows_cursor() {
        let mut form = FormState::new_task();
        form.insert_char('H');
        form.insert_char('i');
        assert!(render(&form).contains("▸ Title"));
        assert!(render(&form).contains("Hi_"));
    }

    #[test]
    fn block_form_shows_date_and_prefilled_start() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 16).expect("valid date");
        let form = FormState::new_block(date, BlockDraft::for_slot(date, 14));
        let content = render(&form);
        assert!(content.contains("Add Time Block"));
        assert!(content.contains("Date: Wednesday, July 16, 2025"));
        assert!(content.contains("14:00"));
    }

    #[test]
    fn reflection_form_shows_default_ratings() {
        let content = render(&FormState::reflection());
        assert!(content.contains("Daily Reflection"));
        assert!(content.contains("7/10"));
        assert!(content.contains("6/10"));
        assert!(content.contains("4/10"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        render_form(&FormState::new_task(), area, &mut buf);
    }
}
