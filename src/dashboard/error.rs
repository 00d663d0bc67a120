//! Errors surfaced to the presentation layer.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::error::{NotFoundError, ValidationError};
use crate::task::services::TaskStatusError;

/// Stable classification of a dashboard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A referenced id is not in the expected collection.
    NotFound,
    /// The input to a mutating call is malformed.
    Validation,
}

impl ErrorKind {
    /// Returns the stable code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a dashboard intent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// A referenced id is not in the expected collection.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// The input to a mutating call is malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DashboardError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
        }
    }

    /// Returns the field to re-prompt for, for validation failures.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotFound(_) => None,
            Self::Validation(err) => Some(err.field()),
        }
    }
}

impl From<TaskStatusError> for DashboardError {
    fn from(err: TaskStatusError) -> Self {
        match err {
            TaskStatusError::NotFound(inner) => Self::NotFound(inner),
            TaskStatusError::Validation(inner) => Self::Validation(inner),
        }
    }
}
