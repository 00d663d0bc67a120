//! Error types shared by the dashboard's bounded contexts.
//!
//! Every caller-visible failure is one of two kinds: a [`NotFoundError`] when
//! an identifier is not in the collection an operation expects, or a
//! [`ValidationError`] when the input to a mutating call is malformed. Both
//! carry enough detail for a presentation layer to re-prompt the user.

use crate::item::domain::ItemId;
use crate::task::domain::TaskId;
use thiserror::Error;

/// A referenced record is not in the expected collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotFoundError {
    /// The task is not waiting in the pending queue.
    #[error("task {0} is not in the pending queue")]
    PendingTask(TaskId),

    /// The task has not been accepted into the assigned list.
    #[error("task {0} is not in the assigned list")]
    AssignedTask(TaskId),

    /// The lost item is not (or no longer) registered.
    #[error("lost item {0} is not registered")]
    LostItem(ItemId),
}

impl NotFoundError {
    /// Returns the identifier that could not be resolved.
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::PendingTask(id) | Self::AssignedTask(id) => id.to_string(),
            Self::LostItem(id) => id.to_string(),
        }
    }
}

/// Malformed input to a mutating operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or absent.
    #[error("{field} is required")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The `Other` not-completed issue was chosen without an explanation.
    #[error("a reason must be provided when the issue is 'Other'")]
    MissingOtherReason,

    /// A value is not part of the field's fixed vocabulary.
    #[error("unknown {field} '{value}'")]
    UnknownValue {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A free-text field exceeds its configured limit.
    #[error("{field} is {actual} characters long, limit is {max}")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Configured maximum length in characters.
        max: usize,
        /// Length of the rejected input in characters.
        actual: usize,
    },

    /// `NotCompleted` can only be entered together with a structured reason.
    #[error("marking a task not completed requires a selected issue")]
    ReasonRequired,

    /// A task with the same identifier is already tracked.
    #[error("task {0} is already tracked")]
    DuplicateTask(TaskId),

    /// An item with the same identifier is already registered.
    #[error("item {0} is already registered")]
    DuplicateItem(ItemId),
}

impl ValidationError {
    /// Creates a missing-field error.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an unknown-value error.
    #[must_use]
    pub fn unknown(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            field,
            value: value.into(),
        }
    }

    /// Returns the field the presentation layer should re-prompt for.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::UnknownValue { field, .. }
            | Self::TooLong { field, .. } => field,
            Self::MissingOtherReason => "reason",
            Self::ReasonRequired => "selectedIssue",
            Self::DuplicateTask(_) | Self::DuplicateItem(_) => "id",
        }
    }
}

/// Rejects free text longer than `max` characters.
pub(crate) fn ensure_max_length(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}
