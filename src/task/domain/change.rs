//! Task change notifications delivered to subscribed collaborators.

use super::{AssignedTask, Task, TaskId, TaskStatus};
use serde::Serialize;

/// A successful mutation of a tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TaskChange {
    /// A pending task moved into the assigned list.
    Accepted {
        /// The task as assigned.
        task: AssignedTask,
    },
    /// A pending task was declined and dropped.
    Declined {
        /// The task as it was pending.
        task: Task,
    },
    /// An assigned task moved to an ordinal status.
    StatusChanged {
        /// The task after the change.
        task: AssignedTask,
        /// Status before the change.
        previous: TaskStatus,
    },
    /// An assigned task was marked as not completed.
    MarkedNotCompleted {
        /// The task after the change.
        task: AssignedTask,
        /// Status before the change.
        previous: TaskStatus,
    },
}

impl TaskChange {
    /// Returns the identifier of the changed task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        match self {
            Self::Declined { task } => task.id(),
            Self::Accepted { task }
            | Self::StatusChanged { task, .. }
            | Self::MarkedNotCompleted { task, .. } => task.id(),
        }
    }

    /// Returns the status after the change, or `None` for a declined task.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        match self {
            Self::Declined { .. } => None,
            Self::Accepted { task }
            | Self::StatusChanged { task, .. }
            | Self::MarkedNotCompleted { task, .. } => Some(task.status()),
        }
    }
}
