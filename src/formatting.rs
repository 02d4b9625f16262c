//! Formatting helper functions for the to-do menu
//!
//! All user-visible text lives here so the session and handlers only decide
//! *what* to print.

use crate::todo::Task;

pub const MENU: &str = "\n--- To-Do List ---\n1. Add Task\n2. View Tasks\n3. Remove Task\n4. Exit";
pub const CHOICE_PROMPT: &str = "Enter choice: ";
pub const TASK_PROMPT: &str = "Enter task: ";
pub const PRIORITY_PROMPT: &str = "Enter priority (H for High, M for Medium, L for Low): ";
pub const REMOVE_PROMPT: &str = "Enter task number to remove: ";

pub const TASK_ADDED: &str = "Task added!";
pub const PRIORITY_DEFAULTED: &str = "Invalid priority! Defaulting to Low.";
pub const NO_TASKS: &str = "No tasks available.";
pub const TASK_REMOVED: &str = "Task removed.";
pub const INVALID_TASK_NUMBER: &str = "Invalid task number.";
pub const INVALID_CHOICE: &str = "Invalid choice. Try again.";
pub const EXITING: &str = "Exiting...";

/// Format tasks into the numbered display list
///
/// # Arguments
/// * `tasks` - Tasks in display order
///
/// # Returns
/// `NO_TASKS` when empty, otherwise a blank line, the `Your Tasks:` header
/// and one `<n>. [<PRIORITY>] <description>` line per task (1-based)
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return NO_TASKS.to_string();
    }

    let mut result = String::from("\nYour Tasks:");
    for (i, task) in tasks.iter().enumerate() {
        result.push_str(&format!("\n{}. {}", i + 1, task));
    }
    result
}
