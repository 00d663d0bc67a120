//! Domain model for booking-service tasks.
//!
//! Covers the pending request as delivered by booking intake, the assigned
//! task with its operational status, the structured "not completed" failure,
//! and the change notifications emitted after each successful mutation.

mod capture;
mod change;
mod error;
mod failure;
mod ids;
mod status;
mod task;

pub use capture::{IssueOption, NotCompletedCapture};
pub use change::TaskChange;
pub use error::{ParseIssueError, ParseTaskStatusError};
pub use failure::{FailureReason, NotCompletedIssue};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{AssignedTask, AssignedTaskRecord, Task};
