//! Help overlay widget.
//!
//! Lists every keybinding when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 38;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 21;

const NAVIGATION: &[(&str, &str)] = &[
    ("Tab", "Next tab"),
    ("1-5", "Jump to tab"),
    ("←→↑↓", "Move"),
];

const ACTIONS: &[(&str, &str)] = &[
    ("Enter", "Select / complete / add"),
    ("n", "New entry"),
    ("t", "Start or pause timer"),
    ("+ -", "Adjust time or level"),
    ("< >", "Energy down / up"),
    ("[ ] .", "Prev / next / this week"),
    ("Esc", "Close"),
    ("Shift+L", "Sign out"),
    ("q", "Quit"),
    ("?", "Toggle help"),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use anchor_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

fn section(title: &'static str, bindings: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);

    std::iter::once(Line::from(Span::styled(format!("  {title}"), header_style)))
        .chain(bindings.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<11}"), key_style),
                Span::styled(*action, text_style),
            ])
        }))
        .collect()
}

fn build_help_lines() -> Vec<Line<'static>> {
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = vec![Line::from("")];
    lines.extend(section("Navigation", NAVIGATION));
    lines.push(Line::from(""));
    lines.extend(section("Actions", ACTIONS));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}
