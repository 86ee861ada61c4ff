//! Backing-store interface for task records

use crate::models::Task;
use thiserror::Error;

/// Errors raised by a backing store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse task data: {0}")]
    Json(#[from] serde_json::Error),
}

/// A durable, key-less record set of tasks.
///
/// The store is read and written as a whole; the engine behind it is
/// opaque to callers.
pub trait TaskRepository {
    /// Read every persisted task, in stored order
    fn read_all(&self) -> Result<Vec<Task>, RepositoryError>;

    /// Replace the persisted record set with the given tasks
    fn write_all(&self, tasks: &[Task]) -> Result<(), RepositoryError>;
}
