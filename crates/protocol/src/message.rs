//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state. What a message does can depend on the active tab:
/// [`Message::Select`] completes a task on the dashboard but opens the
/// add-block form on an empty planner cell.
///
/// # Examples
///
/// ```
/// use anchor_protocol::Message;
///
/// let msg = Message::NextTab;
/// assert!(matches!(msg, Message::NextTab));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    NavigateLeft,
    NavigateRight,
    NavigateUp,
    NavigateDown,
    /// Activate the highlighted item.
    Select,
    /// Escape: close an overlay or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },

    // --- Shell ---
    NextTab,
    PrevTab,
    /// Jump to a tab by its zero-based position.
    GoToTab {
        index: usize,
    },
    /// Move the header energy gauge by `delta` percentage points.
    AdjustEnergy {
        delta: i8,
    },
    SignIn,
    SignOut,

    // --- Tab actions ---
    /// Open the active tab's "new entry" form.
    NewEntry,
    /// Start or pause the selected task's timer.
    ToggleTimer,
    /// Contextual +/- (actual minutes on the dashboard, check-in level on
    /// the anxiety tab).
    Adjust {
        delta: i8,
    },
    PrevWeek,
    NextWeek,
    ThisWeek,

    // --- Form messages ---
    FormNextField,
    FormPrevField,
    /// Step the focused choice, slider or toggle.
    FormAdjust {
        delta: i8,
    },
    /// Input a character into the focused text field.
    FormInput {
        ch: char,
    },
    FormBackspace,
    FormSubmit,
    FormCancel,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(Message::NextTab.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft
                | Self::NavigateRight
                | Self::NavigateUp
                | Self::NavigateDown
                | Self::NextTab
                | Self::PrevTab
                | Self::GoToTab { .. }
                | Self::PrevWeek
                | Self::NextWeek
                | Self::ThisWeek
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message edits an open form.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_protocol::Message;
    ///
    /// assert!(Message::FormSubmit.is_form());
    /// assert!(Message::FormInput { ch: 'a' }.is_form());
    /// assert!(!Message::NewEntry.is_form());
    /// ```
    #[must_use]
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FormNextField
                | Self::FormPrevField
                | Self::FormAdjust { .. }
                | Self::FormInput { .. }
                | Self::FormBackspace
                | Self::FormSubmit
                | Self::FormCancel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_json_format() {
        let json = serde_json::to_string(&Message::ClickAt { column: 3, row: 7 }).expect("serialize");
        assert_eq!(json, r#"{"click_at":{"column":3,"row":7}}"#);
    }

    #[test]
    fn unit_variant_json_format() {
        let json = serde_json::to_string(&Message::PrevWeek).expect("serialize");
        assert_eq!(json, r#""prev_week""#);
    }

    #[test]
    fn form_messages_are_not_navigation() {
        for msg in [
            Message::FormNextField,
            Message::FormPrevField,
            Message::FormSubmit,
        ] {
            assert!(msg.is_form());
            assert!(!msg.is_navigation());
        }
    }
}
