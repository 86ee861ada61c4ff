//! In-memory task list synchronized with a backing store

use crate::models::Task;
use crate::storage::{RepositoryError, TaskRepository};
use thiserror::Error;

/// Errors raised by task store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
    #[error("Task not found: {0}")]
    TaskNotFound(u64),
    #[error("Failed to read backing store: {0}")]
    StorageRead(#[source] RepositoryError),
    #[error("Failed to write backing store: {0}")]
    StorageWrite(#[source] RepositoryError),
}

/// Ordered list of tasks kept consistent with a persistent backing store.
///
/// The repository handle is injected at construction. All operations are
/// synchronous and run to completion; the in-memory list only changes when
/// the corresponding persistent write has succeeded, so a failed operation
/// leaves the list exactly as it was.
pub struct TaskStore<R: TaskRepository> {
    repository: R,
    items: Vec<Task>,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Create an empty store over the given repository.
    ///
    /// Call [`load`](Self::load) to populate it from persisted state.
    pub fn new(repository: R) -> Self {
        TaskStore {
            repository,
            items: Vec::new(),
        }
    }

    /// Get the current task list, in display order
    pub fn items(&self) -> &[Task] {
        &self.items
    }

    /// Get the number of tasks
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a task by id
    pub fn get(&self, id: u64) -> Result<&Task, StoreError> {
        self.items
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))
    }

    /// Read all persisted tasks, replacing the in-memory list.
    ///
    /// On read failure the list is left unchanged and the error is
    /// returned to the caller; retrying is the caller's decision.
    pub fn load(&mut self) -> Result<&[Task], StoreError> {
        let tasks = self
            .repository
            .read_all()
            .map_err(StoreError::StorageRead)?;
        self.items = tasks;
        Ok(&self.items)
    }

    /// Create a new task with the given title and persist it.
    ///
    /// The task is appended at the end of the list. Empty and
    /// whitespace-only titles are rejected.
    pub fn add(&mut self, title: &str) -> Result<Task, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let task = Task::new(self.next_id(), title);
        self.items.push(task.clone());

        if let Err(e) = self.repository.write_all(&self.items) {
            self.items.pop();
            return Err(StoreError::StorageWrite(e));
        }

        log::debug!("Added task #{}: {}", task.id, task.title);
        Ok(task)
    }

    /// Replace the title of an existing task in place and persist it.
    ///
    /// The task keeps its id and position in the list.
    pub fn update(&mut self, id: u64, new_title: &str) -> Result<Task, StoreError> {
        if new_title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let index = self.index_of(id)?;
        let previous = self.items[index].clone();
        self.items[index].set_title(new_title);

        if let Err(e) = self.repository.write_all(&self.items) {
            self.items[index] = previous;
            return Err(StoreError::StorageWrite(e));
        }

        log::debug!("Updated task #{}: {}", id, new_title);
        Ok(self.items[index].clone())
    }

    /// Remove a task by id and persist the remaining list.
    ///
    /// The relative order of the remaining tasks is preserved.
    pub fn remove(&mut self, id: u64) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        let removed = self.items.remove(index);

        if let Err(e) = self.repository.write_all(&self.items) {
            self.items.insert(index, removed);
            return Err(StoreError::StorageWrite(e));
        }

        log::debug!("Removed task #{}", id);
        Ok(())
    }

    /// Next available id: one past the current maximum
    fn next_id(&self) -> u64 {
        self.items.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    fn index_of(&self, id: u64) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))
    }
}
