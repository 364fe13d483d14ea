//! Configuration management for the anchor application.
//!
//! This crate handles loading, validating and persisting configuration, and
//! provides the two environment-facing collaborators of the store and the
//! UI: the local session and the JSON journal.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`profile`]: The local user profile
//! - [`planner`]: Planner hour window
//! - [`journal`]: Durable JSON repositories for the store
//! - [`log`]: Log file settings
//! - [`session`]: The session collaborator and its local implementation
//! - [`persistence`]: File locations and JSON5 reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./anchor.json5` or `./anchor.json`)
//! 2. User config (`~/.config/anchor/config.json5` or `~/.config/anchor/config.json`)
//! 3. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   profile: { display_name: "Sam", auto_sign_in: true },
//!   planner: { first_hour: 8, last_hour: 20 },
//!   // Omit to keep everything in memory
//!   journal: { path: "/home/sam/.local/share/anchor/journal" },
//!   log: { level: "info" },
//! }
//! ```
//!
//! # Examples
//!
//! Loading configuration:
//!
//! ```no_run
//! use anchor_config::Config;
//!
//! # async fn example() -> anchor_config::Result<()> {
//! // Load from default locations
//! let config = Config::load().await?;
//!
//! // Resolve the planner window
//! let hours = config.planner.slot_hours()?;
//! println!("{} hour slots per day", hours.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod journal;
pub mod log;
pub mod persistence;
pub mod planner;
pub mod profile;
pub mod session;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use journal::{JournalConfig, JournalRepository};
pub use log::LogConfig;
pub use planner::PlannerConfig;
pub use profile::ProfileConfig;
pub use session::{LocalSession, SessionProvider};
