//! To-do domain models and business logic
//!
//! This module contains the core to-do data structures and their implementations:
//! - `task`: Task record and its priority level
//! - `task_store`: In-memory ordered collection of tasks with all list operations

mod task;
mod task_store;

// Re-export all public types
pub use task::{Priority, Task};
pub use task_store::TaskStore;
