//! Test helpers shared by the TUI test modules.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::App;

/// Converts a ratatui [`Buffer`] to one line of text per row, with trailing
/// whitespace trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Draws `app` once on a `width`×`height` test terminal and returns the
/// screen text.
pub(crate) fn render_app(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
    terminal.draw(|frame| app.view(frame)).expect("draw");
    buffer_to_string(terminal.backend().buffer())
}
