//! In-memory change log for task audit and tests.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{TaskChange, TaskId},
    ports::TaskChangeListener,
};

/// Thread-safe listener that keeps every task change in arrival order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskChangeLog {
    changes: Arc<RwLock<Vec<TaskChange>>>,
}

impl InMemoryTaskChangeLog {
    /// Creates an empty change log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded changes.
    #[must_use]
    pub fn changes(&self) -> Vec<TaskChange> {
        self.changes
            .read()
            .map(|changes| changes.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Returns the recorded changes for a single task.
    #[must_use]
    pub fn changes_for(&self, id: &TaskId) -> Vec<TaskChange> {
        self.changes()
            .into_iter()
            .filter(|change| change.task_id() == id)
            .collect()
    }

    /// Returns the number of recorded changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes
            .read()
            .map_or_else(|poisoned| poisoned.into_inner().len(), |changes| changes.len())
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TaskChangeListener for InMemoryTaskChangeLog {
    fn on_task_changed(&self, change: &TaskChange) {
        let mut changes = self
            .changes
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        changes.push(change.clone());
    }
}
