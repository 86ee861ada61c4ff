//! Storage layer for task records

pub mod json_store;
pub mod location;
pub mod repository;

pub use json_store::JsonFileStore;
pub use location::{LocationError, StoreLocation};
pub use repository::{RepositoryError, TaskRepository};
