//! Operational status transitions for assigned tasks.

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info};

use super::TaskQueue;
use crate::config::DashboardConfig;
use crate::error::{NotFoundError, ValidationError};
use crate::task::domain::{
    AssignedTask, FailureReason, NotCompletedCapture, NotCompletedIssue, TaskId, TaskStatus,
};

/// Service-level errors for status operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStatusError {
    /// The task is not in the assigned list.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// The requested change is malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type for status machine operations.
pub type TaskStatusResult<T> = Result<T, TaskStatusError>;

/// Outcome of a successful status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransition {
    /// The task after the change.
    pub task: AssignedTask,
    /// Status before the change.
    pub previous: TaskStatus,
}

/// Applies status changes to tasks in a queue's assigned list.
///
/// Any ordinal status may be set from any current status. `NotCompleted`
/// is only entered through [`Self::mark_not_completed`], which validates the
/// structured reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStatusMachine {
    max_reason_length: usize,
}

impl TaskStatusMachine {
    /// Creates a status machine accepting reasons up to the given length.
    #[must_use]
    pub const fn new(max_reason_length: usize) -> Self {
        Self { max_reason_length }
    }

    /// Creates a status machine from dashboard configuration.
    #[must_use]
    pub const fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.max_reason_length)
    }

    /// Moves an assigned task to `target`, clearing any recorded failure.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatusError::NotFound`] when the task is not assigned,
    /// or [`TaskStatusError::Validation`] when `target` is `NotCompleted`.
    pub fn set_status<C>(
        &self,
        queue: &mut TaskQueue<C>,
        id: &TaskId,
        target: TaskStatus,
    ) -> TaskStatusResult<StatusTransition>
    where
        C: Clock + Send + Sync,
    {
        let clock = std::sync::Arc::clone(queue.clock_handle());
        let task = queue.find_assigned_mut(id)?;
        let previous = task.status();
        task.set_status(target, &*clock).inspect_err(|err| {
            debug!(task_id = %id, %err, "status change rejected");
        })?;
        info!(
            task_id = %id,
            from = previous.as_str(),
            to = target.as_str(),
            "task status changed"
        );
        Ok(StatusTransition {
            task: task.clone(),
            previous,
        })
    }

    /// Returns the reason options for marking an assigned task not completed.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::AssignedTask`] when the task is not assigned.
    pub fn begin_not_completed_capture<C>(
        &self,
        queue: &TaskQueue<C>,
        id: &TaskId,
    ) -> Result<NotCompletedCapture, NotFoundError>
    where
        C: Clock + Send + Sync,
    {
        let task = queue.find_assigned(id)?;
        Ok(NotCompletedCapture::new(id.clone(), task.status()))
    }

    /// Marks an assigned task not completed with a structured reason.
    ///
    /// `selected_issue` accepts an issue code or label. The stored reason is
    /// `free_text` when given, otherwise the issue label.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatusError::NotFound`] when the task is not assigned,
    /// or [`TaskStatusError::Validation`] when the issue is blank or
    /// unknown, `Other` comes without free text, or the text is too long.
    pub fn mark_not_completed<C>(
        &self,
        queue: &mut TaskQueue<C>,
        id: &TaskId,
        selected_issue: &str,
        free_text: &str,
    ) -> TaskStatusResult<StatusTransition>
    where
        C: Clock + Send + Sync,
    {
        let clock = std::sync::Arc::clone(queue.clock_handle());
        let task = queue.find_assigned_mut(id)?;
        let failure = self
            .resolve_failure(selected_issue, free_text)
            .inspect_err(|err| {
                debug!(task_id = %id, %err, "not-completed capture rejected");
            })?;
        let previous = task.status();
        info!(
            task_id = %id,
            issue = failure.selected_issue().as_str(),
            from = previous.as_str(),
            "task marked not completed"
        );
        task.mark_not_completed(failure, &*clock);
        Ok(StatusTransition {
            task: task.clone(),
            previous,
        })
    }

    fn resolve_failure(
        &self,
        selected_issue: &str,
        free_text: &str,
    ) -> Result<FailureReason, ValidationError> {
        if selected_issue.trim().is_empty() {
            return Err(ValidationError::missing("selectedIssue"));
        }
        let issue = NotCompletedIssue::try_from(selected_issue)?;
        FailureReason::resolve(issue, free_text, self.max_reason_length)
    }
}

impl Default for TaskStatusMachine {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}
