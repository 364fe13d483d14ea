//! anchor - a terminal productivity companion for ADHD brains.
//!
//! This is the main binary that launches the TUI application.

mod logging;

use anchor_config::{Config, LocalSession, SessionProvider, journal};
use anchor_protocol::Store;
use anchor_tui::{App, AppState, terminal};
use chrono::{Local, Utc};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().await?;
    let _log_guard = logging::init(&config.log)?;

    let today = Local::now().date_naive();
    let now = Utc::now();
    let store = match &config.journal.path {
        Some(dir) => {
            info!(path = %dir.display(), "opening journal");
            journal::open_store(dir, today, now)?
        }
        None => Store::seeded(today, now),
    };

    let session = LocalSession::new(config.profile.clone());
    session.restore();

    let state = AppState::new(store, today, config.planner.slot_hours()?);

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(state, Box::new(session));

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    info!("exiting");
    result
}
