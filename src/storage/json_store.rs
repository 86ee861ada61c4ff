//! JSON file backing store

use crate::models::Task;
use crate::storage::repository::{RepositoryError, TaskRepository};
use std::fs;
use std::path::PathBuf;

/// Backing store persisting tasks as a JSON array in a single file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }
}

impl TaskRepository for JsonFileStore {
    fn read_all(&self) -> Result<Vec<Task>, RepositoryError> {
        if !self.path.exists() {
            log::debug!("Task file {:?} does not exist, starting empty", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    fn write_all(&self, tasks: &[Task]) -> Result<(), RepositoryError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
