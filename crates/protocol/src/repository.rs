//! Storage interface for the store's collections.
//!
//! Each entity collection sits behind a [`Repository`]. The store only ever
//! lists, creates and updates; nothing is deleted.

use std::fmt;

use crate::anxiety::AnxietyLog;
use crate::error::{ProtocolError, Result};
use crate::reflection::Reflection;
use crate::task::Task;
use crate::time_block::TimeBlock;

/// An entity with a stable identifier.
pub trait Identified {
    fn id(&self) -> uuid::Uuid;
}

impl Identified for Task {
    fn id(&self) -> uuid::Uuid {
        self.id
    }
}

impl Identified for TimeBlock {
    fn id(&self) -> uuid::Uuid {
        self.id
    }
}

impl Identified for AnxietyLog {
    fn id(&self) -> uuid::Uuid {
        self.id
    }
}

impl Identified for Reflection {
    fn id(&self) -> uuid::Uuid {
        self.id
    }
}

/// A collection of entities in insertion order.
pub trait Repository<T: Identified>: fmt::Debug {
    /// Returns every record in insertion order.
    fn list(&self) -> &[T];

    /// Appends a new record and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Duplicate`] if the id is already present, or
    /// [`ProtocolError::Storage`] if the back-end fails.
    fn create(&mut self, item: T) -> Result<uuid::Uuid>;

    /// Replaces the record with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::NotFound`] if no record has that id, or
    /// [`ProtocolError::Storage`] if the back-end fails.
    fn update(&mut self, item: T) -> Result<()>;

    /// Looks up a record by id.
    fn get(&self, id: uuid::Uuid) -> Option<&T> {
        self.list().iter().find(|item| item.id() == id)
    }
}

/// A repository that lives only as long as the process.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for InMemoryRepository<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Identified + fmt::Debug> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> &[T] {
        &self.items
    }

    fn create(&mut self, item: T) -> Result<uuid::Uuid> {
        insert(&mut self.items, item)
    }

    fn update(&mut self, item: T) -> Result<()> {
        replace(&mut self.items, item)
    }
}

/// Appends `item` to `items` unless its id is taken.
///
/// Shared by repository implementations that cache their records in a `Vec`.
///
/// # Errors
///
/// Returns [`ProtocolError::Duplicate`] if the id is already present.
pub fn insert<T: Identified>(items: &mut Vec<T>, item: T) -> Result<uuid::Uuid> {
    let id = item.id();
    if items.iter().any(|existing| existing.id() == id) {
        return Err(ProtocolError::Duplicate(id));
    }
    items.push(item);
    Ok(id)
}

/// Replaces the element of `items` sharing `item`'s id.
///
/// # Errors
///
/// Returns [`ProtocolError::NotFound`] if no element has that id.
pub fn replace<T: Identified>(items: &mut [T], item: T) -> Result<()> {
    let id = item.id();
    let slot = items
        .iter_mut()
        .find(|existing| existing.id() == id)
        .ok_or(ProtocolError::NotFound(id))?;
    *slot = item;
    Ok(())
}
