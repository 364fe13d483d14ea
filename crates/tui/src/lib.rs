//! Terminal UI for the anchor application.
//!
//! This crate provides a Ratatui-based terminal interface for planning the
//! day: today's tasks, a weekly time-block planner, daily reflections and
//! anxiety check-ins.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`form`]: Modal entry forms and their conversion to drafts
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering for each tab and overlay
//!
//! # Example
//!
//! ```no_run
//! use anchor_config::{LocalSession, ProfileConfig, SessionProvider};
//! use anchor_protocol::{SlotHours, Store};
//! use anchor_tui::{App, AppState, terminal};
//! use chrono::{Local, Utc};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let today = Local::now().date_naive();
//!     let state = AppState::new(Store::seeded(today, Utc::now()), today, SlotHours::default());
//!     let session = LocalSession::new(ProfileConfig::default());
//!     session.restore();
//!
//!     let mut app = App::new(state, Box::new(session));
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod form;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, ReflectionTab, Tab};
