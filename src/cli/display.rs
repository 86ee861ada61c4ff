//! Display formatting for CLI output

use crate::models::Task;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

/// Task row for table display
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        TaskRow {
            id: format!("{}", task.id),
            title: truncate(&task.title, 50),
            created: task.created.format("%Y-%m-%d").to_string(),
            updated: task.updated.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Display a list of tasks as a table
pub fn display_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        log::info!("No tasks found.");
        return;
    }

    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(0)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Display detailed task information
pub fn display_task_detail(task: &Task) {
    println!("ID:      {}", task.id);
    println!("Title:   {}", task.title);
    println!("Created: {}", task.created.format("%Y-%m-%d %H:%M:%S"));
    println!("Updated: {}", task.updated.format("%Y-%m-%d %H:%M:%S"));
}

/// Truncate a string to a maximum byte length, respecting char boundaries
fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }

    let mut end = max - 3;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Format for success messages
pub fn success(msg: &str) {
    println!("{}", msg);
}

/// Format for error messages
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("a very long task title", 10), "a very ...");
    }

    #[test]
    fn test_truncate_multibyte_title() {
        let title = "é".repeat(30);
        let out = truncate(&title, 50);
        assert_eq!(out, format!("{}...", "é".repeat(23)));
    }
}
