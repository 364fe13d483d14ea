//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Two keymaps exist: the dashboard map and the
//! map used while a form is open.

use std::time::Duration;

use anchor_protocol::Message;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Step applied to the header energy gauge by `<` and `>`.
pub const ENERGY_STEP: i8 = 5;

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to a dashboard message.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Only left-button presses are handled.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a terminal key event to a dashboard message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` or `q` | Quit |
/// | `Tab` / `Shift+Tab` | Next / previous tab |
/// | `1`-`5` | Jump to tab |
/// | Arrows | Navigate |
/// | `Enter` or `Space` | Select |
/// | `Esc` | Escape |
/// | `n` | New entry for the current tab |
/// | `t` | Start or pause the selected task's timer |
/// | `+` / `-` | Adjust (actual time, check-in level) |
/// | `<` / `>` | Lower / raise energy |
/// | `[` / `]` / `.` | Previous / next / current week |
/// | `?` | Toggle help |
/// | `Shift+L` | Sign out |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    if key.modifiers.contains(KeyModifiers::SHIFT) && key.code == KeyCode::Char('L') {
        return Some(Message::SignOut);
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Tab => Some(Message::NextTab),
        KeyCode::BackTab => Some(Message::PrevTab),
        KeyCode::Char(ch @ '1'..='5') => ch
            .to_digit(10)
            .and_then(|digit| usize::try_from(digit).ok())
            .map(|digit| Message::GoToTab { index: digit - 1 }),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),

        KeyCode::Char('n') => Some(Message::NewEntry),
        KeyCode::Char('t') => Some(Message::ToggleTimer),
        KeyCode::Char('+' | '=') => Some(Message::Adjust { delta: 1 }),
        KeyCode::Char('-') => Some(Message::Adjust { delta: -1 }),
        KeyCode::Char('>') => Some(Message::AdjustEnergy {
            delta: ENERGY_STEP,
        }),
        KeyCode::Char('<') => Some(Message::AdjustEnergy {
            delta: -ENERGY_STEP,
        }),
        KeyCode::Char('[') => Some(Message::PrevWeek),
        KeyCode::Char(']') => Some(Message::NextWeek),
        KeyCode::Char('.') => Some(Message::ThisWeek),

        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

/// Converts a key event to a form message.
///
/// Used while a form is open. `text_focused` tells whether the focused
/// field takes typed characters; when it does not, `Space` steps the field
/// instead.
///
/// # Key Bindings (Form Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Tab` or `Down` | Next field |
/// | `Shift+Tab` or `Up` | Previous field |
/// | `Left` / `Right` | Step a choice, slider or toggle |
/// | `Enter` | Submit |
/// | `Esc` | Cancel |
/// | `Backspace` | Delete a character |
/// | Any char | Type into a text field |
#[must_use]
pub fn key_to_form_message(key: KeyEvent, text_focused: bool) -> Option<Message> {
    if is_ctrl_c(key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(Message::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Message::FormPrevField),
        KeyCode::Left => Some(Message::FormAdjust { delta: -1 }),
        KeyCode::Right => Some(Message::FormAdjust { delta: 1 }),
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Esc => Some(Message::FormCancel),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(' ') if !text_focused => Some(Message::FormAdjust { delta: 1 }),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}
