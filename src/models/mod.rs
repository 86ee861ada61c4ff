//! Data models for tasklist

pub mod task;

pub use task::Task;
