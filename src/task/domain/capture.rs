//! First step of the two-step "not completed" capture.

use super::{NotCompletedIssue, TaskId, TaskStatus};
use serde::Serialize;

/// A selectable not-completed issue as offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueOption {
    /// Issue code to submit back.
    pub issue: NotCompletedIssue,
    /// Label to display.
    pub label: &'static str,
    /// Whether a free-text reason must accompany this issue.
    pub requires_free_text: bool,
}

impl From<NotCompletedIssue> for IssueOption {
    fn from(issue: NotCompletedIssue) -> Self {
        Self {
            issue,
            label: issue.label(),
            requires_free_text: issue.requires_free_text(),
        }
    }
}

/// Reason options for an assigned task about to be marked not completed.
///
/// Beginning a capture changes no state; the commit is a separate validated
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotCompletedCapture {
    task_id: TaskId,
    current_status: TaskStatus,
    options: Vec<IssueOption>,
}

impl NotCompletedCapture {
    /// Builds the capture for a task in `current_status`.
    #[must_use]
    pub fn new(task_id: TaskId, current_status: TaskStatus) -> Self {
        Self {
            task_id,
            current_status,
            options: NotCompletedIssue::ALL
                .into_iter()
                .map(IssueOption::from)
                .collect(),
        }
    }

    /// Returns the task being captured.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the task's status when the capture began.
    #[must_use]
    pub const fn current_status(&self) -> TaskStatus {
        self.current_status
    }

    /// Returns the selectable issues in display order.
    #[must_use]
    pub fn options(&self) -> &[IssueOption] {
        &self.options
    }
}
