//! The single owner of application state.
//!
//! [`Store`] holds every entity collection behind a [`Repository`] and exposes
//! the operations the UI may perform. Drafts that fail validation are
//! reported as `Ok(None)` and leave the store untouched.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use crate::anxiety::{AnxietyLevel, AnxietyLog, AnxietyLogDraft, AnxietyLogId};
use crate::error::{ProtocolError, Result};
use crate::planner::BlockDraft;
use crate::reflection::{Reflection, ReflectionDraft, ReflectionId};
use crate::repository::{InMemoryRepository, Repository};
use crate::seed;
use crate::task::{Task, TaskDraft, TaskId};
use crate::time_block::{TimeBlock, TimeBlockId};

/// Boxed repository for one entity type.
pub type BoxedRepository<T> = Box<dyn Repository<T>>;

/// Application state: tasks, time blocks, anxiety logs and reflections.
///
/// # Examples
///
/// ```
/// use anchor_protocol::Store;
/// use anchor_protocol::planner::BlockDraft;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
/// let mut store = Store::in_memory();
///
/// let rejected = store.add_time_block(BlockDraft::for_slot(today, 9)).unwrap();
/// assert!(rejected.is_none());
/// assert!(store.time_blocks().is_empty());
/// ```
#[derive(Debug)]
pub struct Store {
    tasks: BoxedRepository<Task>,
    time_blocks: BoxedRepository<TimeBlock>,
    anxiety_logs: BoxedRepository<AnxietyLog>,
    reflections: BoxedRepository<Reflection>,
}

impl Store {
    /// Creates a store over the given repositories.
    #[must_use]
    pub fn new(
        tasks: BoxedRepository<Task>,
        time_blocks: BoxedRepository<TimeBlock>,
        anxiety_logs: BoxedRepository<AnxietyLog>,
        reflections: BoxedRepository<Reflection>,
    ) -> Self {
        Self {
            tasks,
            time_blocks,
            anxiety_logs,
            reflections,
        }
    }

    /// Creates an empty store backed by in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(InMemoryRepository::<Task>::new()),
            Box::new(InMemoryRepository::<TimeBlock>::new()),
            Box::new(InMemoryRepository::<AnxietyLog>::new()),
            Box::new(InMemoryRepository::<Reflection>::new()),
        )
    }

    /// Creates an in-memory store populated with the demo data.
    #[must_use]
    pub fn seeded(today: NaiveDate, now: DateTime<Utc>) -> Self {
        Self::new(
            Box::new(InMemoryRepository::from(seed::tasks())),
            Box::new(InMemoryRepository::from(seed::time_blocks(today))),
            Box::new(InMemoryRepository::from(seed::anxiety_logs(now))),
            Box::new(InMemoryRepository::from(seed::reflections(today))),
        )
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.list()
    }

    #[must_use]
    pub fn time_blocks(&self) -> &[TimeBlock] {
        self.time_blocks.list()
    }

    #[must_use]
    pub fn anxiety_logs(&self) -> &[AnxietyLog] {
        self.anxiety_logs.list()
    }

    #[must_use]
    pub fn reflections(&self) -> &[Reflection] {
        self.reflections.list()
    }

    /// Number of tasks not yet completed.
    #[must_use]
    pub fn remaining_tasks(&self) -> usize {
        self.tasks().iter().filter(|task| !task.completed).count()
    }

    /// Applies `edit` to the task with `id` and writes it back.
    fn edit_task<R>(&mut self, id: TaskId, edit: impl FnOnce(&mut Task) -> R) -> Result<R> {
        let mut task = self
            .tasks
            .get(id)
            .cloned()
            .ok_or(ProtocolError::NotFound(id))?;
        let outcome = edit(&mut task);
        self.tasks.update(task)?;
        Ok(outcome)
    }

    /// Flips a task's completion flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::NotFound`] for an unknown id, or the
    /// repository's error if the write fails.
    pub fn toggle_task_complete(&mut self, id: TaskId) -> Result<bool> {
        let completed = self.edit_task(id, |task| {
            task.toggle_complete();
            task.completed
        })?;
        info!(task = %id, completed, "task completion toggled");
        Ok(completed)
    }

    /// Flips a task's timer flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::NotFound`] for an unknown id, or the
    /// repository's error if the write fails.
    pub fn toggle_task_timer(&mut self, id: TaskId) -> Result<bool> {
        let running = self.edit_task(id, Task::toggle_timer)?;
        debug!(task = %id, running, "task timer toggled");
        Ok(running)
    }

    /// Moves a task's recorded actual time by `delta` minutes.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::NotFound`] for an unknown id, or the
    /// repository's error if the write fails.
    pub fn adjust_actual_minutes(&mut self, id: TaskId, delta: i32) -> Result<Option<u32>> {
        let actual = self.edit_task(id, |task| {
            task.adjust_actual_minutes(delta);
            task.actual_minutes
        })?;
        info!(task = %id, actual = ?actual, "actual time recorded");
        Ok(actual)
    }

    /// Adds a task from form input.
    ///
    /// # Errors
    ///
    /// Returns the repository's error if the write fails.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<Option<TaskId>> {
        let Some(task) = draft.into_task() else {
            debug!("add-task draft incomplete, ignoring");
            return Ok(None);
        };
        info!(title = %task.title, estimate = task.estimated_minutes, "task added");
        self.tasks.create(task).map(Some)
    }

    /// Adds a time block from form input.
    ///
    /// # Errors
    ///
    /// Returns the repository's error if the write fails.
    pub fn add_time_block(&mut self, draft: BlockDraft) -> Result<Option<TimeBlockId>> {
        let Some(block) = draft.into_block() else {
            debug!("add-block draft incomplete, ignoring");
            return Ok(None);
        };
        if block.is_degenerate() {
            debug!(title = %block.title, range = %block.time_range(), "block occupies no slot");
        }
        info!(
            title = %block.title,
            date = %block.date,
            range = %block.time_range(),
            kind = ?block.kind,
            "time block added"
        );
        self.time_blocks.create(block).map(Some)
    }

    /// Records an anxiety event at the current check-in level.
    ///
    /// # Errors
    ///
    /// Returns the repository's error if the write fails.
    pub fn log_anxiety(
        &mut self,
        draft: AnxietyLogDraft,
        level: AnxietyLevel,
        now: DateTime<Utc>,
    ) -> Result<Option<AnxietyLogId>> {
        let Some(log) = draft.into_log(level, now) else {
            debug!("anxiety log draft has no trigger, ignoring");
            return Ok(None);
        };
        info!(
            trigger = %log.trigger,
            level = log.level.value(),
            strategy = %log.coping_strategy,
            priority_maintained = log.priority_maintained,
            "anxiety event logged"
        );
        self.anxiety_logs.create(log).map(Some)
    }

    /// Saves a daily reflection dated `date`.
    ///
    /// # Errors
    ///
    /// Returns the repository's error if the write fails.
    pub fn save_reflection(&mut self, draft: ReflectionDraft, date: NaiveDate) -> Result<ReflectionId> {
        let reflection = draft.into_reflection(date);
        info!(
            date = %reflection.date,
            energy = reflection.energy.value(),
            focus = reflection.focus.value(),
            anxiety = reflection.anxiety.value(),
            mood = reflection.mood.label(),
            "reflection saved"
        );
        self.reflections.create(reflection)
    }
}
