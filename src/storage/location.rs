//! Data file location resolution

use std::path::PathBuf;
use thiserror::Error;

/// Directory under the home directory holding the task file
const DATA_DIR: &str = ".tasklist";

/// Task data file name
const DATA_FILE: &str = "tasks.json";

/// Errors related to store location
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Failed to access home directory")]
    NoHomeDirectory,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the task data file lives
#[derive(Debug, Clone)]
pub struct StoreLocation {
    /// Path to the JSON data file
    pub data_file: PathBuf,
}

impl StoreLocation {
    /// Default location (~/.tasklist/tasks.json)
    pub fn default_location() -> Result<Self, LocationError> {
        let home = dirs::home_dir().ok_or(LocationError::NoHomeDirectory)?;
        Ok(StoreLocation {
            data_file: home.join(DATA_DIR).join(DATA_FILE),
        })
    }

    /// Location at an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        StoreLocation {
            data_file: path.into(),
        }
    }

    /// Create the parent directory if it doesn't exist
    pub fn ensure_parent(&self) -> Result<(), LocationError> {
        if let Some(parent) = self.data_file.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
