//! CLI command definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Local task list management backed by a JSON store
#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task file path (default: ~/.tasklist/tasks.json)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,
    },

    /// List all tasks
    List,

    /// Show task details
    Show {
        /// Task ID
        id: u64,
    },

    /// Replace a task's title
    Update {
        /// Task ID
        id: u64,

        /// New title
        title: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}
