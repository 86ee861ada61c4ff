//! Task model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A titled to-do item with a stable identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Task {
    /// Create a new task with the given id and title
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Task {
            id,
            title: title.into(),
            created: now,
            updated: now,
        }
    }

    /// Replace the title and bump the updated timestamp
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.updated = Utc::now();
    }
}
