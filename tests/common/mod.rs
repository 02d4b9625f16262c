//! Common test utilities for integration tests

#![allow(dead_code)]

use std::io::Cursor;
use todo_list::{TaskStore, TodoSession};

/// Menu block printed before every choice prompt
pub const MENU_BLOCK: &str =
    "\n--- To-Do List ---\n1. Add Task\n2. View Tasks\n3. Remove Task\n4. Exit\nEnter choice: ";

/// Run a scripted session to completion in hardened (re-prompting) mode
///
/// # Returns
/// Everything the session printed, plus the final store
pub fn run_script(input: &str) -> (String, TaskStore) {
    let mut session = TodoSession::new(Cursor::new(input.to_string()), Vec::new(), false);
    session.run().unwrap();
    let store = session.store().clone();
    let output = String::from_utf8(session.into_writer()).unwrap();
    (output, store)
}

/// Build the input lines for an add action
pub fn add_input(description: &str, priority: &str) -> String {
    format!("1\n{}\n{}\n", description, priority)
}

/// Descriptions of the store's tasks in their current order
pub fn descriptions(store: &TaskStore) -> Vec<String> {
    store
        .tasks()
        .iter()
        .map(|t| t.description().to_string())
        .collect()
}
