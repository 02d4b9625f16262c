use crate::error::TodoError;
use crate::todo::task::{Priority, Task};
use tracing::debug;

/// In-memory ordered collection of tasks
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    /// Tasks in insertion order until the first view, then in the last
    /// displayed (priority-sorted) order. Positions shown to the user index
    /// into this Vec, so it is only reordered by `list_sorted_by_priority`.
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create a new empty TaskStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks currently stored
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in their current order, without sorting
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a new task
    ///
    /// # Arguments
    /// * `description` - Task description (no validation, empty is allowed)
    /// * `priority` - Priority level of the task
    pub fn add(&mut self, description: impl Into<String>, priority: Priority) {
        let task = Task::new(description, priority);
        debug!(priority = %task.priority(), description = task.description(), "adding task");
        self.tasks.push(task);
    }

    /// Sort the store by priority and return the sorted tasks
    ///
    /// The sort is stable and happens in place: tasks of equal priority keep
    /// their relative order, and the store keeps the sorted order afterwards
    /// so that 1-based positions match what was just displayed.
    ///
    /// # Returns
    /// The tasks ordered High, Medium, Low (empty slice when the store is empty)
    pub fn list_sorted_by_priority(&mut self) -> &[Task] {
        self.tasks.sort_by_key(|task| task.priority());
        debug!(count = self.tasks.len(), "listing tasks by priority");
        &self.tasks
    }

    /// Remove the task at a 1-based position of the current order
    ///
    /// # Arguments
    /// * `one_based_index` - Position as shown to the user, starting at 1
    ///
    /// # Returns
    /// The removed task, or `TodoError::InvalidIndex` without touching the
    /// store when the position is out of range
    pub fn remove_at(&mut self, one_based_index: i64) -> Result<Task, TodoError> {
        let len = self.tasks.len();
        let position = usize::try_from(one_based_index)
            .ok()
            .filter(|&i| (1..=len).contains(&i))
            .ok_or(TodoError::InvalidIndex {
                index: one_based_index,
                len,
            })?;

        let removed = self.tasks.remove(position - 1);
        debug!(index = one_based_index, description = removed.description(), "removed task");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.description()).collect()
    }

    #[test]
    fn test_add_keeps_insertion_order_until_viewed() {
        let mut store = TaskStore::new();
        store.add("low", Priority::Low);
        store.add("high", Priority::High);

        assert_eq!(descriptions(store.tasks()), vec!["low", "high"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_sorted_reorders_store_in_place() {
        let mut store = TaskStore::new();
        store.add("Buy milk", Priority::Low);
        store.add("Fix bug", Priority::High);
        store.add("Write report", Priority::Medium);

        let sorted = descriptions(store.list_sorted_by_priority());
        assert_eq!(sorted, vec!["Fix bug", "Write report", "Buy milk"]);

        // The store itself now holds the displayed order
        assert_eq!(
            descriptions(store.tasks()),
            vec!["Fix bug", "Write report", "Buy milk"]
        );
    }

    #[test]
    fn test_sort_is_stable_across_repeated_views() {
        let mut store = TaskStore::new();
        store.add("m1", Priority::Medium);
        store.add("h1", Priority::High);
        store.add("m2", Priority::Medium);
        store.add("h2", Priority::High);
        store.add("m3", Priority::Medium);

        for _ in 0..3 {
            assert_eq!(
                descriptions(store.list_sorted_by_priority()),
                vec!["h1", "h2", "m1", "m2", "m3"]
            );
        }
    }

    #[test]
    fn test_list_sorted_on_empty_store() {
        let mut store = TaskStore::new();
        assert!(store.list_sorted_by_priority().is_empty());
    }

    #[test]
    fn test_remove_at_out_of_range_leaves_store_unchanged() {
        let mut store = TaskStore::new();
        store.add("only", Priority::Medium);

        for index in [0, -1, 2, i64::MAX, i64::MIN] {
            let result = store.remove_at(index);
            assert_eq!(result, Err(TodoError::InvalidIndex { index, len: 1 }));
            assert_eq!(store.len(), 1);
        }
    }

    #[test]
    fn test_remove_at_shifts_following_tasks() {
        let mut store = TaskStore::new();
        store.add("a", Priority::High);
        store.add("b", Priority::High);
        store.add("c", Priority::High);

        let removed = store.remove_at(2).unwrap();
        assert_eq!(removed.description(), "b");
        assert_eq!(descriptions(store.tasks()), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_only_task_empties_store() {
        let mut store = TaskStore::new();
        store.add("solo", Priority::Low);
        store.list_sorted_by_priority();

        assert!(store.remove_at(1).is_ok());
        assert!(store.is_empty());
        assert_eq!(
            store.remove_at(1),
            Err(TodoError::InvalidIndex { index: 1, len: 0 })
        );
    }
}
