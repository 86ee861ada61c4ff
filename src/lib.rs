//! tasklist - Local task list management backed by a JSON store
//!
//! This library provides an ordered in-memory task list kept consistent
//! with a durable backing store through a plain repository interface.

pub mod cli;
pub mod models;
pub mod storage;
pub mod store;

pub use models::Task;
pub use storage::{JsonFileStore, RepositoryError, StoreLocation, TaskRepository};
pub use store::{StoreError, TaskStore};
