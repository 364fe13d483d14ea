//! Widget components for the anchor TUI.
//!
//! Each widget is a function that renders part of the state into a
//! [`Buffer`](ratatui::buffer::Buffer). Widgets never mutate state; geometry
//! that click handling needs (tab positions, planner cells) is exposed as
//! plain functions so rendering and hit-testing agree.
//!
//! # Modules
//!
//! - [`tabs`]: The tab bar
//! - [`dashboard`]: Today's focus, weekly progress and the weekly overview
//! - [`task_card`]: A single task with its estimate accuracy
//! - [`planner`]: The weekly time-block grid
//! - [`anxiety`]: Check-in slider, coping strategies and recent events
//! - [`reflection`]: Insights, analytics and reflection history
//! - [`form`]: The modal form overlay
//! - [`gate`]: Loading and sign-in screens
//! - [`placeholder`]: "Coming soon" panels
//! - [`help`]: The keybinding overlay
//! - [`status_bar`]: The footer with contextual hints
//!
//! # Example
//!
//! ```
//! use anchor_tui::{Tab, widgets};
//! use ratatui::{buffer::Buffer, layout::Rect};
//!
//! let area = Rect::new(0, 0, 80, 1);
//! let mut buf = Buffer::empty(area);
//! widgets::render_tab_bar(Tab::Planner, area, &mut buf);
//! assert_eq!(widgets::tab_at(area, 0), Some(Tab::Dashboard));
//! ```

use ratatui::layout::Rect;

pub mod anxiety;
pub mod dashboard;
pub mod form;
pub mod gate;
pub mod help;
pub mod placeholder;
pub mod planner;
pub mod reflection;
pub mod status_bar;
pub mod tabs;
pub mod task_card;

// Re-export primary rendering functions for convenience
pub use anxiety::render_anxiety;
pub use dashboard::render_dashboard;
pub use form::render_form;
pub use gate::render_auth_gate;
pub use help::render_help_overlay;
pub use placeholder::render_placeholder;
pub use planner::{planner_cell_at, render_planner};
pub use reflection::render_reflection;
pub use status_bar::render_status_bar;
pub use tabs::{render_tab_bar, tab_at};
pub use task_card::{priority_color, render_task_card};

/// Creates a rectangle of at most `width`×`height` centered in `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(x, y, popup_width, popup_height)
}

/// Truncates `s` to `max_width` characters, ending with `...` when cut.
pub(crate) fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}

/// A text progress bar `width` cells wide, filled to `ratio` (0..=1).
pub(crate) fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (0..width)
        .take_while(|cell| ((*cell as f64) + 0.5) / (width as f64) <= ratio)
        .count();
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_positions_correctly() {
        let centered = centered_rect(20, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(centered, Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let centered = centered_rect(100, 50, Rect::new(0, 0, 40, 12));
        assert_eq!(centered, Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn truncate_variants() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello", 5), "Hello");
        assert_eq!(truncate("Hello, World!", 10), "Hello, ...");
        assert_eq!(truncate("Hello", 3), "Hel");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(0.5, 4), "██░░");
        assert_eq!(progress_bar(1.0, 4), "████");
        assert_eq!(progress_bar(3.0, 2), "██");
    }
}
