//! Shared protocol types for the anchor application.
//!
//! This crate defines the domain of anchor: the tasks, time blocks, anxiety
//! check-ins and reflections a user records, the pure logic that lays time
//! blocks out on the weekly planner, and the store that owns them all.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Tasks, priorities, energy levels and estimate accuracy
//! - [`time_block`]: Time blocks and wall-clock times
//! - [`planner`]: Week resolution and the planner grid layout
//! - [`anxiety`]: Anxiety levels, coping strategies and the event log
//! - [`reflection`]: Daily reflections, moods and insights
//! - [`stats`]: Weekly summary figures
//! - [`session`]: Authentication snapshots
//! - [`repository`]: The storage interface and its in-memory implementation
//! - [`store`]: The application state owner
//! - [`seed`]: Demo data for a fresh store
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Scheduling a block and finding it on the grid:
//!
//! ```
//! use anchor_protocol::planner::{BlockDraft, SlotHours, WeekGrid};
//! use anchor_protocol::Store;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 7, 16).unwrap();
//! let mut store = Store::in_memory();
//!
//! // Select the empty 14:00 cell, then fill in the rest of the form
//! let mut draft = BlockDraft::for_slot(today, 14);
//! draft.title = "Write report".into();
//! draft.end = "16:00".into();
//! store.add_time_block(draft).unwrap();
//!
//! let grid = WeekGrid::compute(store.time_blocks(), today, SlotHours::default());
//! assert_eq!(grid.cell(2, 15)[0].title, "Write report");
//! ```

pub mod anxiety;
pub mod error;
pub mod message;
pub mod planner;
pub mod reflection;
pub mod repository;
pub mod seed;
pub mod session;
pub mod stats;
pub mod store;
pub mod task;
pub mod time_block;

// Re-export primary types at crate root for convenience
pub use anxiety::{
    AnxietyBand, AnxietyLevel, AnxietyLog, AnxietyLogDraft, AnxietyLogId, CopingStrategy,
    StrategyCategory,
};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use planner::{BlockDraft, SlotHours, WeekGrid};
pub use reflection::{
    Impact, Insight, InsightKind, InsightTone, Mood, Rating, Reflection, ReflectionDraft,
    ReflectionId,
};
pub use repository::{Identified, InMemoryRepository, Repository};
pub use session::{AuthGate, AuthSnapshot, User};
pub use stats::{ReflectionStats, WeeklyStats};
pub use store::Store;
pub use task::{AccuracyBand, EnergyLevel, Priority, Task, TaskDraft, TaskId};
pub use time_block::{BlockKind, ClockTime, TimeBlock, TimeBlockId};
