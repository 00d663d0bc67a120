//! Parse errors for task vocabulary types.

use crate::error::ValidationError;
use thiserror::Error;

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a not-completed issue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown not-completed issue: {0}")]
pub struct ParseIssueError(pub String);

impl From<ParseTaskStatusError> for ValidationError {
    fn from(err: ParseTaskStatusError) -> Self {
        Self::unknown("status", err.0)
    }
}

impl From<ParseIssueError> for ValidationError {
    fn from(err: ParseIssueError) -> Self {
        Self::unknown("selectedIssue", err.0)
    }
}
