//! Durable JSON journal for the application store.
//!
//! When `journal.path` is set, each collection of the store is kept in its
//! own JSON file inside that directory:
//!
//! - `tasks.json`
//! - `time_blocks.json`
//! - `anxiety_logs.json`
//! - `reflections.json`
//!
//! Records are cached in memory and every create or update rewrites the
//! whole file. A collection whose file does not exist yet is seeded with the
//! demo data and written out immediately.

use std::fmt;
use std::path::{Path, PathBuf};

use anchor_protocol::repository::{insert, replace};
use anchor_protocol::{
    AnxietyLog, Identified, ProtocolError, Reflection, Repository, Store, Task, TimeBlock, seed,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::persistence::{load_json5, store_json};

/// Journal configuration.
///
/// # Examples
///
/// ```
/// use anchor_config::JournalConfig;
///
/// assert!(!JournalConfig::default().is_enabled());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Directory holding the journal files. Unset keeps everything in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl JournalConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }
}

/// A [`Repository`] persisted as a JSON array on disk.
pub struct JournalRepository<T> {
    path: PathBuf,
    items: Vec<T>,
}

impl<T> fmt::Debug for JournalRepository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JournalRepository")
            .field("path", &self.path)
            .field("records", &self.items.len())
            .finish()
    }
}

impl<T> JournalRepository<T>
where
    T: Identified + Serialize + DeserializeOwned,
{
    /// Opens the journal file at `path`, starting empty if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_or_seed(path, Vec::new)
    }

    /// Opens the journal file at `path`, writing `seed()` to it if it does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or created.
    pub fn open_or_seed(path: impl Into<PathBuf>, seed: impl FnOnce() -> Vec<T>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            let items: Vec<T> = load_json5(&path)?;
            debug!(path = %path.display(), records = items.len(), "journal opened");
            return Ok(Self { path, items });
        }

        let journal = Self {
            path,
            items: seed(),
        };
        journal.flush()?;
        debug!(path = %journal.path.display(), records = journal.items.len(), "journal created");
        Ok(journal)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        store_json(&self.path, &self.items)
    }

    /// Writes `next` to disk and only then makes it the cache.
    ///
    /// A failed write leaves both the file and the cache as they were.
    fn commit(&mut self, next: Vec<T>) -> anchor_protocol::Result<()> {
        store_json(&self.path, &next).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "journal write failed");
            ProtocolError::storage(err)
        })?;
        self.items = next;
        Ok(())
    }
}

impl<T> Repository<T> for JournalRepository<T>
where
    T: Identified + Clone + Serialize + DeserializeOwned,
{
    fn list(&self) -> &[T] {
        &self.items
    }

    fn create(&mut self, item: T) -> anchor_protocol::Result<uuid::Uuid> {
        let mut next = self.items.clone();
        let id = insert(&mut next, item)?;
        self.commit(next)?;
        Ok(id)
    }

    fn update(&mut self, item: T) -> anchor_protocol::Result<()> {
        let mut next = self.items.clone();
        replace(&mut next, item)?;
        self.commit(next)
    }
}

/// Opens a store whose collections live in the journal directory `dir`.
///
/// Missing files are seeded relative to `today` and `now`.
///
/// # Errors
///
/// Returns an error if any journal file cannot be read, parsed or created.
pub fn open_store(dir: &Path, today: NaiveDate, now: DateTime<Utc>) -> Result<Store> {
    let tasks = JournalRepository::<Task>::open_or_seed(dir.join("tasks.json"), seed::tasks)?;
    let time_blocks = JournalRepository::<TimeBlock>::open_or_seed(dir.join("time_blocks.json"), || {
        seed::time_blocks(today)
    })?;
    let anxiety_logs =
        JournalRepository::<AnxietyLog>::open_or_seed(dir.join("anxiety_logs.json"), || {
            seed::anxiety_logs(now)
        })?;
    let reflections =
        JournalRepository::<Reflection>::open_or_seed(dir.join("reflections.json"), || {
            seed::reflections(today)
        })?;

    Ok(Store::new(
        Box::new(tasks),
        Box::new(time_blocks),
        Box::new(anxiety_logs),
        Box::new(reflections),
    ))
}

#[cfg(test)]
mod tests {
    use anchor_protocol::planner::BlockDraft;
    use tempfile::TempDir;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 18).expect("valid date")
    }

    #[test]
    fn open_missing_file_starts_empty() {
        let dir = TempDir::new().expect("tempdir");
        let repo = JournalRepository::<Task>::open(dir.path().join("tasks.json")).expect("open");
        assert!(repo.list().is_empty());
        assert!(repo.path().exists());
    }

    #[test]
    fn create_persists_to_disk() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tasks.json");

        let mut repo = JournalRepository::<Task>::open(&path).expect("open");
        let id = repo.create(Task::new("Inbox zero", 15)).expect("create");

        let reopened = JournalRepository::<Task>::open(&path).expect("reopen");
        assert_eq!(reopened.list().len(), 1);
        assert_eq!(reopened.list()[0].id, id);
    }

    #[test]
    fn update_persists_to_disk() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tasks.json");
        let task = Task::new("Code review", 20);

        let mut repo = JournalRepository::open_or_seed(&path, || vec![task.clone()]).expect("open");
        let mut done = task;
        done.completed = true;
        repo.update(done).expect("update");

        let reopened = JournalRepository::<Task>::open(&path).expect("reopen");
        assert!(reopened.list()[0].completed);
    }

    /// Swaps the journal file for a directory so the next write fails.
    fn block_writes(path: &Path) {
        std::fs::remove_file(path).expect("remove journal");
        std::fs::create_dir(path).expect("directory in its place");
    }

    #[test]
    fn failed_create_leaves_cache_unchanged() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tasks.json");
        let mut repo = JournalRepository::<Task>::open(&path).expect("open");
        block_writes(&path);

        let err = repo.create(Task::new("Inbox zero", 10)).expect_err("write must fail");
        assert!(matches!(err, ProtocolError::Storage(_)));
        assert!(repo.list().is_empty());
    }

    #[test]
    fn failed_update_leaves_cache_unchanged() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tasks.json");
        let task = Task::new("Code review", 20);
        let mut repo = JournalRepository::open_or_seed(&path, || vec![task.clone()]).expect("open");
        block_writes(&path);

        let mut done = task.clone();
        done.completed = true;
        assert!(repo.update(done).is_err());
        assert_eq!(repo.list(), [task]);
    }

    #[test]
    fn existing_file_is_not_reseeded() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tasks.json");
        JournalRepository::<Task>::open(&path).expect("create empty");

        let repo = JournalRepository::<Task>::open_or_seed(&path, seed::tasks).expect("open");
        assert!(repo.list().is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "not json").expect("write");
        assert!(JournalRepository::<Task>::open(&path).is_err());
    }

    #[test]
    fn store_survives_restart() {
        let dir = TempDir::new().expect("tempdir");
        let now = Utc::now();

        let mut store = open_store(dir.path(), today(), now).expect("open");
        assert_eq!(store.tasks().len(), 4);
        let draft = BlockDraft {
            title: "Deep work".into(),
            end: "16:00".into(),
            ..BlockDraft::for_slot(today(), 14)
        };
        store.add_time_block(draft).expect("write").expect("created");

        let reopened = open_store(dir.path(), today(), now).expect("reopen");
        assert_eq!(reopened.time_blocks().len(), 4);
        assert_eq!(reopened.time_blocks()[3].title, "Deep work");
    }
}
