//! Tab bar widget.
//!
//! Tabs are laid out left to right as ` N Title ` labels separated by one
//! column. [`tab_at`] uses the same layout for mouse clicks.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::state::Tab;

fn label(tab: Tab) -> String {
    format!(" {} {} ", tab.index() + 1, tab.title())
}

/// Column ranges `(start, end)` of each tab label, relative to the bar.
fn tab_columns() -> impl Iterator<Item = (Tab, u16, u16)> {
    Tab::ALL.into_iter().scan(0u16, |x, tab| {
        let width = u16::try_from(label(tab).chars().count()).unwrap_or(u16::MAX);
        let start = *x;
        *x = start.saturating_add(width).saturating_add(1);
        Some((tab, start, start.saturating_add(width)))
    })
}

/// Renders the tab bar with `active` highlighted.
pub fn render_tab_bar(active: Tab, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }
    for (tab, start, end) in tab_columns() {
        if start >= area.width {
            break;
        }
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let width = end.min(area.width) - start;
        buf.set_stringn(
            area.x + start,
            area.y,
            label(tab),
            usize::from(width),
            style,
        );
    }
}

/// Returns the tab whose label covers `column`, if any.
#[must_use]
pub fn tab_at(area: Rect, column: u16) -> Option<Tab> {
    let relative = column.checked_sub(area.x)?;
    if relative >= area.width {
        return None;
    }
    tab_columns()
        .find(|(_, start, end)| (*start..*end).contains(&relative))
        .map(|(tab, _, _)| tab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn renders_every_tab() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_tab_bar(Tab::Dashboard, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.starts_with(" 1 Dashboard   2 Planner "));
        assert!(content.contains("5 Anxiety"));
    }

    #[test]
    fn active_tab_is_highlighted() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_tab_bar(Tab::Dashboard, area, &mut buf);

        let cell = buf.cell((1, 0)).expect("cell");
        assert_eq!(cell.bg, Color::Cyan);
    }

    #[test]
    fn hit_testing_matches_layout() {
        let area = Rect::new(2, 5, 80, 1);
        // " 1 Dashboard " is 13 wide, then a gap
        assert_eq!(tab_at(area, 2), Some(Tab::Dashboard));
        assert_eq!(tab_at(area, 14), Some(Tab::Dashboard));
        assert_eq!(tab_at(area, 15), None);
        assert_eq!(tab_at(area, 16), Some(Tab::Planner));
        assert_eq!(tab_at(area, 1), None);
        assert_eq!(tab_at(area, 79), None);
    }

    #[test]
    fn narrow_bar_does_not_panic() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        render_tab_bar(Tab::Anxiety, area, &mut buf);
    }
}
