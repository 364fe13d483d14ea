//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use anchor_config::SessionProvider;
use anchor_protocol::{AuthGate, AuthSnapshot, Message, WeekGrid, planner::BlockDraft};
use chrono::Utc;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{
    AppState, Tab,
    event::{event_to_message, key_to_form_message, poll_event},
    form::{FormState, Submission},
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT,
        TAB_BAR_HEIGHT,
    },
    terminal::AppTerminal,
    widgets::{
        planner_cell_at, render_anxiety, render_auth_gate, render_dashboard, render_form,
        render_help_overlay, render_placeholder, render_planner, render_reflection,
        render_status_bar, render_tab_bar, tab_at,
    },
};

/// Minutes added or removed per `+`/`-` press on a task.
const MINUTES_PER_ADJUST: i32 = 5;

/// The screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Regions {
    header: Option<Rect>,
    tabs: Rect,
    content: Rect,
    status: Rect,
}

impl Regions {
    fn split(area: Rect, show_header: bool) -> Self {
        let header_height = if show_header { HEADER_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);
        Self {
            header: show_header.then_some(chunks[0]),
            tabs: chunks[1],
            content: chunks[2],
            status: chunks[3],
        }
    }
}

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects click hit-testing).
    header_visible: bool,
    session: Box<dyn SessionProvider>,
    auth: watch::Receiver<AuthSnapshot>,
}

impl App {
    /// Creates a new application over `state`, gated by `session`.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_config::{LocalSession, ProfileConfig, SessionProvider};
    /// use anchor_protocol::{AuthGate, SlotHours, Store};
    /// use anchor_tui::{App, AppState};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
    /// let state = AppState::new(Store::in_memory(), today, SlotHours::default());
    /// let session = LocalSession::new(ProfileConfig::default());
    /// session.restore();
    ///
    /// let app = App::new(state, Box::new(session));
    /// assert_eq!(app.auth_gate(), AuthGate::SignedOut);
    /// ```
    #[must_use]
    pub fn new(state: AppState, session: Box<dyn SessionProvider>) -> Self {
        let auth = session.subscribe();
        Self {
            state,
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            session,
            auth,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns which screen the current session allows.
    #[must_use]
    pub fn auth_gate(&self) -> AuthGate {
        self.auth.borrow().gate()
    }

    /// Updates the application state based on a message.
    ///
    /// Until the session is signed in only quitting and signing in are
    /// possible. An open form receives every message. When the help overlay
    /// is visible, most messages dismiss it instead of their normal action;
    /// only `Quit` and `ToggleHelp` work normally when help is shown.
    pub fn update(&mut self, msg: Message) {
        if msg == Message::Quit {
            self.should_quit = true;
            return;
        }

        match self.auth_gate() {
            AuthGate::Loading => return,
            AuthGate::SignedOut => {
                if matches!(msg, Message::Select | Message::SignIn) {
                    self.session.login();
                }
                return;
            }
            AuthGate::SignedIn => {}
        }

        if self.state.form.is_some() {
            self.update_form(msg);
            return;
        }

        // When help is visible, most keys should dismiss it
        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::ToggleHelp => self.state.toggle_help(),
            Message::NextTab => self.state.next_tab(),
            Message::PrevTab => self.state.prev_tab(),
            Message::GoToTab { index } => self.state.go_to_tab(index),
            Message::AdjustEnergy { delta } => self.state.adjust_energy(delta),
            Message::SignOut => self.session.logout(),
            Message::ClickAt { column, row } => self.handle_click(column, row),
            msg => match self.state.tab {
                Tab::Dashboard => self.update_dashboard(msg),
                Tab::Planner => self.update_planner(msg),
                Tab::Tracker => {}
                Tab::Reflection => self.update_reflection(msg),
                Tab::Anxiety => self.update_anxiety(msg),
            },
        }
    }

    fn update_dashboard(&mut self, msg: Message) {
        match msg {
            Message::NavigateUp => self.state.select_prev_task(),
            Message::NavigateDown => self.state.select_next_task(),
            Message::NewEntry => self.state.form = Some(FormState::new_task()),
            Message::Select => {
                if let Some(id) = self.state.selected_task_id() {
                    report(self.state.store.toggle_task_complete(id), "toggle completion");
                }
            }
            Message::ToggleTimer => {
                if let Some(id) = self.state.selected_task_id() {
                    report(self.state.store.toggle_task_timer(id), "toggle timer");
                }
            }
            Message::Adjust { delta } => {
                if let Some(id) = self.state.selected_task_id() {
                    let minutes = i32::from(delta) * MINUTES_PER_ADJUST;
                    report(
                        self.state.store.adjust_actual_minutes(id, minutes),
                        "record actual time",
                    );
                }
            }
            _ => {}
        }
    }

    fn update_planner(&mut self, msg: Message) {
        match msg {
            Message::NavigateLeft => self.state.move_planner_day(false),
            Message::NavigateRight => self.state.move_planner_day(true),
            Message::NavigateUp => self.state.move_planner_hour(false),
            Message::NavigateDown => self.state.move_planner_hour(true),
            Message::PrevWeek => self.state.prev_week(),
            Message::NextWeek => self.state.next_week(),
            Message::ThisWeek => self.state.this_week(),
            Message::Select => self.open_block_form_at_cursor(),
            Message::NewEntry => {
                let date = self.state.planner_date();
                let draft = BlockDraft {
                    date: Some(date),
                    ..BlockDraft::default()
                };
                self.state.form = Some(FormState::new_block(date, draft));
            }
            _ => {}
        }
    }

    /// Opens the add-block form for the cursor cell if nothing is scheduled
    /// there.
    fn open_block_form_at_cursor(&mut self) {
        let week = self.state.week_reference();
        let grid = WeekGrid::compute(self.state.store.time_blocks(), week, self.state.slot_hours);
        let hour = self.state.planner.hour;
        if !grid.is_empty_cell(self.state.planner.day, hour) {
            return;
        }
        let date = self.state.planner_date();
        self.state.form = Some(FormState::new_block(date, BlockDraft::for_slot(date, hour)));
    }

    fn update_reflection(&mut self, msg: Message) {
        match msg {
            Message::NavigateLeft => self.state.prev_reflection_tab(),
            Message::NavigateRight => self.state.next_reflection_tab(),
            Message::NewEntry => self.state.form = Some(FormState::reflection()),
            _ => {}
        }
    }

    fn update_anxiety(&mut self, msg: Message) {
        match msg {
            Message::NavigateLeft => self.state.adjust_check_in(-1),
            Message::NavigateRight => self.state.adjust_check_in(1),
            Message::Adjust { delta } => self.state.adjust_check_in(delta),
            Message::Select if self.state.check_in.suggests_coping() => {
                self.state.form = Some(FormState::anxiety_log(&self.state.strategies));
            }
            Message::NewEntry => {
                self.state.form = Some(FormState::anxiety_log(&self.state.strategies));
            }
            _ => {}
        }
    }

    fn update_form(&mut self, msg: Message) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        match msg {
            Message::FormNextField => form.next_field(),
            Message::FormPrevField => form.prev_field(),
            Message::FormAdjust { delta } => form.adjust(delta),
            Message::FormInput { ch } => form.insert_char(ch),
            Message::FormBackspace => form.backspace(),
            Message::FormCancel | Message::Escape => self.state.form = None,
            Message::FormSubmit => self.submit_form(),
            _ => {}
        }
    }

    /// Hands the open form to the store. The form closes only when the store
    /// accepted the input.
    fn submit_form(&mut self) {
        let Some(submission) = self.state.form.as_ref().map(FormState::submission) else {
            return;
        };
        let store = &mut self.state.store;
        let saved = match submission {
            Submission::Task(draft) => store.add_task(draft).map(|id| id.is_some()),
            Submission::Block(draft) => store.add_time_block(draft).map(|id| id.is_some()),
            Submission::AnxietyLog(draft) => store
                .log_anxiety(draft, self.state.check_in, Utc::now())
                .map(|id| id.is_some()),
            Submission::Reflection(draft) => {
                store.save_reflection(draft, self.state.today).map(|_| true)
            }
        };

        match saved {
            Ok(true) => {
                self.state.form = None;
                if self.state.selected_task.is_none() && !self.state.store.tasks().is_empty() {
                    self.state.selected_task = Some(0);
                }
            }
            Ok(false) => debug!("form submission incomplete, keeping form open"),
            Err(err) => warn!(error = %err, "failed to save form"),
        }
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// Clicks on the tab bar switch tabs. On the planner, a click moves the
    /// cursor to the cell and selects it.
    fn handle_click(&mut self, column: u16, row: u16) {
        let regions = Regions::split(self.last_area, self.header_visible);

        if regions.tabs.contains((column, row).into()) {
            if let Some(tab) = tab_at(regions.tabs, column) {
                self.state.tab = tab;
            }
            return;
        }

        if self.state.tab == Tab::Planner {
            let cell = planner_cell_at(
                regions.content,
                self.state.slot_hours,
                self.state.planner.hour,
                column,
                row,
            );
            if let Some((day, hour)) = cell {
                self.state.select_planner_cell(day, hour);
                self.open_block_form_at_cursor();
            }
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        // Check if terminal is too small for any useful rendering
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.render_terminal_too_small(frame, area);
            return;
        }

        let gate = self.auth_gate();
        if gate != AuthGate::SignedIn {
            render_auth_gate(gate, area, frame.buffer_mut());
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;
        let regions = Regions::split(area, show_header);

        if let Some(header) = regions.header {
            self.render_header(frame, header);
        }

        let buf = frame.buffer_mut();
        render_tab_bar(self.state.tab, regions.tabs, buf);
        self.render_content(regions.content, buf);
        let greeting = self
            .auth
            .borrow()
            .user
            .as_ref()
            .map(|user| format!("Signed in as {}", user.name));
        render_status_bar(greeting.as_deref(), self.hints(), regions.status, buf);

        if let Some(form) = &self.state.form {
            render_form(form, area, buf);
        }

        // Render help overlay on top if visible
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        let state = &self.state;
        match state.tab {
            Tab::Dashboard => render_dashboard(state, area, buf),
            Tab::Planner => {
                let grid = WeekGrid::compute(
                    state.store.time_blocks(),
                    state.week_reference(),
                    state.slot_hours,
                );
                let cursor = (state.planner.day, state.planner.hour);
                render_planner(&grid, cursor, state.today, area, buf);
            }
            Tab::Tracker => render_placeholder(
                "Time Tracker",
                "Track and refine your time estimates",
                "Time tracker coming soon...",
                area,
                buf,
            ),
            Tab::Reflection => render_reflection(state, area, buf),
            Tab::Anxiety => render_anxiety(state, area, buf),
        }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.tab {
            Tab::Dashboard => &[
                ("↑↓", "select"),
                ("Enter", "complete"),
                ("t", "timer"),
                ("n", "add task"),
                ("?", "help"),
            ],
            Tab::Planner => &[
                ("←→↑↓", "move"),
                ("Enter", "add block"),
                ("[ ]", "week"),
                (".", "today"),
                ("?", "help"),
            ],
            Tab::Tracker => &[("Tab", "next tab"), ("?", "help")],
            Tab::Reflection => &[("←→", "section"), ("n", "reflect"), ("?", "help")],
            Tab::Anxiety => &[
                ("←→", "level"),
                ("Enter", "cope"),
                ("n", "log event"),
                ("?", "help"),
            ],
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use anchor_config::{LocalSession, ProfileConfig, SessionProvider};
    /// use anchor_protocol::{SlotHours, Store};
    /// use anchor_tui::{App, AppState, terminal};
    /// use chrono::{Local, Utc};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let today = Local::now().date_naive();
    ///     let state = AppState::new(Store::seeded(today, Utc::now()), today, SlotHours::default());
    ///     let session = LocalSession::new(ProfileConfig::default());
    ///     session.restore();
    ///
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(state, Box::new(session));
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        use crossterm::event::Event;

        loop {
            // Render
            terminal.draw(|frame| self.view(frame))?;

            // Poll for events (keyboard and mouse)
            if let Some(event) = poll_event()? {
                // Forms take raw keys so typed characters reach the fields
                let msg = match (&self.state.form, &event) {
                    (Some(form), Event::Key(key)) => {
                        key_to_form_message(*key, form.is_text_focused())
                    }
                    _ => event_to_message(&event),
                };

                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title, energy gauge and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        // Create the block first to get inner area (with rounded borders)
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, energy_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(16), // "Energy: 100%" plus padding
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "anchor",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("ADHD Personal OS", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let energy_color = match self.state.energy {
            0..=33 => Color::Red,
            34..=66 => Color::Yellow,
            _ => Color::Green,
        };
        let energy = Paragraph::new(Line::from(vec![
            Span::styled("Energy: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}%", self.state.energy),
                Style::default()
                    .fg(energy_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(energy, energy_area);

        // Render help cue on right
        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}

/// Logs a failed store write; the UI carries on either way.
fn report<T>(result: anchor_protocol::Result<T>, action: &str) {
    if let Err(err) = result {
        warn!(error = %err, action, "store update failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_app;
    use anchor_config::{LocalSession, ProfileConfig};
    use anchor_protocol::{AnxietyLevel, SlotHours, Store};
    use chrono::{NaiveDate, TimeZone};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 16).expect("valid date")
    }

    fn session(auto_sign_in: bool) -> Box<dyn SessionProvider> {
        let session = LocalSession::new(ProfileConfig {
            display_name: Some("Sam".into()),
            email: None,
            auto_sign_in,
        });
        session.restore();
        Box::new(session)
    }

    fn app_with(store: Store) -> App {
        App::new(
            AppState::new(store, today(), SlotHours::default()),
            session(true),
        )
    }

    fn seeded_app() -> App {
        let now = Utc
            .with_ymd_and_hms(2025, 7, 16, 9, 0, 0)
            .single()
            .expect("valid time");
        app_with(Store::seeded(today(), now))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.update(Message::FormInput { ch });
        }
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = seeded_app();

        assert!(!app.should_quit);
        app.update(Message::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn signed_out_app_only_signs_in() {
        let mut app = App::new(
            AppState::new(Store::in_memory(), today(), SlotHours::default()),
            session(false),
        );
        assert_eq!(app.auth_gate(), AuthGate::SignedOut);

        app.update(Message::NextTab);
        assert_eq!(app.state.tab, Tab::Dashboard);

        app.update(Message::Select);
        assert_eq!(app.auth_gate(), AuthGate::SignedIn);
    }

    #[test]
    fn loading_gate_ignores_input() {
        let session = LocalSession::new(ProfileConfig::default());
        let mut app = App::new(
            AppState::new(Store::in_memory(), today(), SlotHours::default()),
            Box::new(session),
        );
        assert_eq!(app.auth_gate(), AuthGate::Loading);

        app.update(Message::Select);
        assert_eq!(app.auth_gate(), AuthGate::Loading);
        let content = render_app(&mut app, 80, 24);
        assert!(content.contains("Loading..."));
    }

    #[test]
    fn sign_out_returns_to_gate() {
        let mut app = seeded_app();
        app.update(Message::SignOut);
        assert_eq!(app.auth_gate(), AuthGate::SignedOut);
        let content = render_app(&mut app, 80, 24);
        assert!(content.contains("Press Enter to sign in"));
    }

    #[test]
    fn tabs_switch_by_key_and_index() {
        let mut app = seeded_app();
        app.update(Message::NextTab);
        assert_eq!(app.state.tab, Tab::Planner);
        app.update(Message::GoToTab { index: 4 });
        assert_eq!(app.state.tab, Tab::Anxiety);
        app.update(Message::PrevTab);
        assert_eq!(app.state.tab, Tab::Reflection);
    }

    #[test]
    fn select_toggles_task_completion() {
        let mut app = seeded_app();
        let before = app.state.store.remaining_tasks();

        app.update(Message::Select);
        assert_eq!(app.state.store.remaining_tasks(), before - 1);
        assert!(app.state.store.tasks()[0].completed);

        app.update(Message::Select);
        assert_eq!(app.state.store.remaining_tasks(), before);
    }

    #[test]
    fn adjust_records_actual_minutes() {
        let mut app = seeded_app();
        app.update(Message::Adjust { delta: 1 });
        app.update(Message::Adjust { delta: 1 });
        assert_eq!(app.state.store.tasks()[0].actual_minutes, Some(10));
    }

    #[test]
    fn timer_toggles_on_selected_task() {
        let mut app = seeded_app();
        app.update(Message::ToggleTimer);
        assert!(app.state.store.tasks()[0].timer_running);
    }

    #[test]
    fn add_task_form_round_trip() {
        let mut app = seeded_app();
        let before = app.state.store.tasks().len();

        app.update(Message::NewEntry);
        assert!(app.state.form.is_some());

        // Empty title keeps the form open and adds nothing
        app.update(Message::FormSubmit);
        assert!(app.state.form.is_some());
        assert_eq!(app.state.store.tasks().len(), before);

        type_text(&mut app, "Plan sprint");
        app.update(Message::FormNextField);
        type_text(&mut app, "30");
        app.update(Message::FormSubmit);

        assert!(app.state.form.is_none());
        assert_eq!(app.state.store.tasks().len(), before + 1);
        let added = app.state.store.tasks().last().expect("task added");
        assert_eq!(added.title, "Plan sprint");
        assert_eq!(added.estimated_minutes, 30);
    }

    #[test]
    fn empty_planner_cell_opens_prefilled_form() {
        let mut app = app_with(Store::in_memory());
        app.update(Message::GoToTab { index: 1 });
        app.state.select_planner_cell(2, 14);

        app.update(Message::Select);
        let form = app.state.form.as_ref().expect("form open");
        let Submission::Block(draft) = form.submission() else {
            panic!("expected a block form");
        };
        assert_eq!(draft.start, "14:00");
        assert_eq!(draft.date, Some(today()));

        // Title and end are still missing
        app.update(Message::FormSubmit);
        assert!(app.state.form.is_some());
        assert!(app.state.store.time_blocks().is_empty());

        type_text(&mut app, "Write report");
        app.update(Message::FormNextField);
        app.update(Message::FormNextField);
        type_text(&mut app, "16:00");
        app.update(Message::FormSubmit);

        assert!(app.state.form.is_none());
        let grid = WeekGrid::compute(app.state.store.time_blocks(), today(), SlotHours::default());
        assert_eq!(grid.cell(2, 14)[0].title, "Write report");
        assert_eq!(grid.cell(2, 15)[0].title, "Write report");
        assert!(grid.is_empty_cell(2, 16));
    }

    #[test]
    fn occupied_planner_cell_does_not_open_form() {
        let mut app = seeded_app();
        app.update(Message::GoToTab { index: 1 });
        // Project Review runs 10:00-11:30 today
        app.state.select_planner_cell(2, 10);
        app.update(Message::Select);
        assert!(app.state.form.is_none());
    }

    #[test]
    fn cancel_discards_form() {
        let mut app = seeded_app();
        app.update(Message::NewEntry);
        type_text(&mut app, "Draft");
        app.update(Message::FormCancel);
        assert!(app.state.form.is_none());

        app.update(Message::NewEntry);
        let form = app.state.form.as_ref().expect("form open");
        assert_eq!(form.submission(), FormState::new_task().submission());
    }

    #[test]
    fn anxiety_prompt_starts_at_six() {
        let mut app = seeded_app();
        app.update(Message::GoToTab { index: 4 });
        app.state.check_in = AnxietyLevel::clamped(5);

        app.update(Message::Select);
        assert!(app.state.form.is_none());

        app.update(Message::NavigateRight);
        assert_eq!(app.state.check_in.value(), 6);
        app.update(Message::Select);
        assert!(app.state.form.is_some());
    }

    #[test]
    fn anxiety_log_uses_check_in_level() {
        let mut app = seeded_app();
        app.update(Message::GoToTab { index: 4 });
        app.state.check_in = AnxietyLevel::clamped(8);
        let before = app.state.store.anxiety_logs().len();

        app.update(Message::Select);
        type_text(&mut app, "Surprise deadline");
        app.update(Message::FormSubmit);

        let logs = app.state.store.anxiety_logs();
        assert_eq!(logs.len(), before + 1);
        let logged = logs.last().expect("log added");
        assert_eq!(logged.trigger, "Surprise deadline");
        assert_eq!(logged.level.value(), 8);
    }

    #[test]
    fn reflection_saves_with_defaults() {
        let mut app = seeded_app();
        app.update(Message::GoToTab { index: 3 });
        let before = app.state.store.reflections().len();

        app.update(Message::NewEntry);
        app.update(Message::FormSubmit);

        assert!(app.state.form.is_none());
        let reflections = app.state.store.reflections();
        assert_eq!(reflections.len(), before + 1);
        let saved = reflections.last().expect("reflection saved");
        assert_eq!(saved.date, today());
        assert_eq!(saved.energy.value(), 7);
    }

    #[test]
    fn app_help_dismisses_on_any_key() {
        let mut app = seeded_app();

        app.update(Message::ToggleHelp);
        assert!(app.state.help_visible);

        // Navigation is swallowed while dismissing
        app.update(Message::NextTab);
        assert!(!app.state.help_visible);
        assert_eq!(app.state.tab, Tab::Dashboard);
    }

    #[test]
    fn app_quit_works_with_help_visible() {
        let mut app = seeded_app();
        app.update(Message::ToggleHelp);
        app.update(Message::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn energy_moves_in_steps() {
        let mut app = seeded_app();
        app.update(Message::AdjustEnergy { delta: 5 });
        assert_eq!(app.state.energy, 80);
        for _ in 0..10 {
            app.update(Message::AdjustEnergy { delta: 5 });
        }
        assert_eq!(app.state.energy, 100);
    }

    #[test]
    fn click_on_tab_bar_switches_tab() {
        let mut app = seeded_app();
        let _ = render_app(&mut app, 80, 24);

        // Header takes three rows; " 1 Dashboard " spans columns 0-12
        app.update(Message::ClickAt { column: 16, row: 3 });
        assert_eq!(app.state.tab, Tab::Planner);
    }

    #[test]
    fn click_on_empty_planner_cell_opens_form() {
        let mut app = app_with(Store::in_memory());
        app.update(Message::GoToTab { index: 1 });
        let _ = render_app(&mut app, 76, 24);

        // Content starts below header and tab bar; grid rows two lower
        app.update(Message::ClickAt { column: 6 + 30, row: 4 + 2 + 1 });
        assert_eq!(app.state.planner.day, 3);
        assert_eq!(app.state.planner.hour, 9);
        assert!(app.state.form.is_some());
    }

    #[test]
    fn app_view_shows_too_small_message_when_height_below_minimum() {
        let mut app = seeded_app();
        let content = render_app(&mut app, 80, 8);
        assert!(!app.header_visible);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn app_view_shows_too_small_message_when_width_below_minimum() {
        let mut app = seeded_app();
        let content = render_app(&mut app, 30, 24);
        assert!(!app.header_visible);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn app_view_hides_header_in_compact_mode() {
        let mut app = seeded_app();
        let content = render_app(&mut app, 80, 13);
        assert!(!app.header_visible);
        assert!(content.contains("1 Dashboard"));
        assert!(!content.contains("too small"));
    }

    #[test]
    fn app_view_shows_header_when_terminal_large_enough() {
        let mut app = seeded_app();
        let content = render_app(&mut app, 80, 24);
        assert!(app.header_visible);
        assert!(content.contains("anchor - ADHD Personal OS"));
        assert!(content.contains("Energy: 75%"));
        assert!(content.contains("Press ? for help"));
        assert!(content.contains("Signed in as Sam"));
    }

    #[test]
    fn app_view_renders_each_tab() {
        let mut app = seeded_app();
        let expected = [
            "Today's Focus",
            "Weekly Planner",
            "Time tracker coming soon...",
            "Reflection Hub",
            "Anxiety Check-in",
        ];
        for (index, text) in expected.into_iter().enumerate() {
            app.update(Message::GoToTab { index });
            let content = render_app(&mut app, 100, 30);
            assert!(content.contains(text), "tab {index} should show {text}");
        }
    }

    #[test]
    fn app_view_draws_form_and_help_overlays() {
        let mut app = seeded_app();
        app.update(Message::NewEntry);
        assert!(render_app(&mut app, 100, 30).contains("Add Task"));

        app.update(Message::FormCancel);
        app.update(Message::ToggleHelp);
        assert!(render_app(&mut app, 100, 30).contains("Help"));
    }
}
