//! CLI command and display modules

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands};
