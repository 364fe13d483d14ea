//! Screens shown before the dashboard: loading and the sign-in
//! call-to-action.

use anchor_protocol::AuthGate;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::centered_rect;

const GATE_WIDTH: u16 = 44;
const GATE_HEIGHT: u16 = 8;

/// Renders the screen for `gate`. Nothing is drawn once signed in.
///
/// # Examples
///
/// ```
/// use anchor_protocol::AuthGate;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use anchor_tui::widgets::render_auth_gate;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_auth_gate(AuthGate::SignedOut, area, &mut buf);
/// ```
pub fn render_auth_gate(gate: AuthGate, area: Rect, buf: &mut Buffer) {
    let lines = match gate {
        AuthGate::SignedIn => return,
        AuthGate::Loading => vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::Gray),
            )),
        ],
        AuthGate::SignedOut => vec![
            Line::from(""),
            Line::from(Span::styled(
                "ADHD Personal OS",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your productivity companion",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::styled(" to sign in", Style::default().fg(Color::DarkGray)),
            ]),
        ],
    };

    let block = Block::default()
        .title(Span::styled(
            " anchor ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .render(centered_rect(GATE_WIDTH, GATE_HEIGHT, area), buf);
}
