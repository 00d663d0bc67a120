//! Read-only view models returned to the presentation layer.

use serde::Serialize;

use super::{DashboardError, ErrorKind};
use crate::help::domain::AckToken;
use crate::item::domain::{FoundItem, LostItem};
use crate::task::domain::{AssignedTask, NotCompletedCapture, Task};

/// Snapshot of everything the dashboard displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Pending tasks in arrival order.
    pub pending: Vec<Task>,
    /// Assigned tasks in acceptance order.
    pub assigned: Vec<AssignedTask>,
    /// Unresolved lost items in report order.
    pub lost_items: Vec<LostItem>,
    /// Number of pending tasks, computed when the view was taken.
    pub notification_badge: usize,
}

/// Payload of a successful intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IntentData {
    /// A single assigned task.
    AssignedTask(AssignedTask),
    /// Reason options for a not-completed capture.
    Capture(NotCompletedCapture),
    /// A stored lost item.
    LostItem(LostItem),
    /// A stored found item.
    FoundItem(FoundItem),
    /// A help request acknowledgement.
    Ack(AckToken),
    /// The pending queue.
    Tasks(Vec<Task>),
    /// The assigned list.
    AssignedTasks(Vec<AssignedTask>),
    /// Unresolved lost items.
    LostItems(Vec<LostItem>),
    /// Found items.
    FoundItems(Vec<FoundItem>),
    /// The notification badge count.
    Badge(usize),
    /// The full dashboard snapshot.
    View(Box<DashboardView>),
}

/// Serializable error description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Stable error code.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
    /// Field to re-prompt for, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl From<&DashboardError> for ErrorBody {
    fn from(err: &DashboardError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            field: err.field(),
        }
    }
}

/// Result envelope for [`DashboardIntent`](super::DashboardIntent)s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentOutcome {
    /// Whether the intent succeeded.
    pub ok: bool,
    /// Payload of a successful intent, if it returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<IntentData>,
    /// Failure details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl IntentOutcome {
    /// Builds a successful outcome.
    #[must_use]
    pub const fn success(data: Option<IntentData>) -> Self {
        Self {
            ok: true,
            data,
            error: None,
        }
    }

    /// Builds a failed outcome.
    #[must_use]
    pub fn failure(err: &DashboardError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(ErrorBody::from(err)),
        }
    }
}

impl From<Result<Option<IntentData>, DashboardError>> for IntentOutcome {
    fn from(result: Result<Option<IntentData>, DashboardError>) -> Self {
        result.map_or_else(|err| Self::failure(&err), Self::success)
    }
}
