//! Serializable user intents.

use serde::{Deserialize, Serialize};

use crate::item::domain::{ItemId, ItemReport};
use crate::task::domain::TaskId;

/// One user intent, as issued by a presentation layer.
///
/// Intents are tagged by an `intent` key:
///
/// ```
/// use labkeeper::dashboard::DashboardIntent;
///
/// let intent: DashboardIntent =
///     serde_json::from_str(r#"{"intent": "setTaskStatus", "id": "1", "status": "Closed"}"#)
///         .expect("valid intent");
/// assert!(matches!(intent, DashboardIntent::SetTaskStatus { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DashboardIntent {
    /// List the pending queue.
    ListPendingTasks,
    /// List the assigned tasks.
    ListAssignedTasks,
    /// Read the notification badge.
    NotificationBadge,
    /// Accept a pending task.
    AcceptTask {
        /// Task to accept.
        id: TaskId,
    },
    /// Decline a pending task.
    DeclineTask {
        /// Task to decline.
        id: TaskId,
    },
    /// Move an assigned task to an ordinal status.
    SetTaskStatus {
        /// Task to update.
        id: TaskId,
        /// Status code or label.
        status: String,
    },
    /// Fetch the reason options for a not-completed capture.
    BeginNotCompleted {
        /// Task to capture.
        id: TaskId,
    },
    /// Mark an assigned task not completed.
    MarkTaskNotCompleted {
        /// Task to update.
        id: TaskId,
        /// Issue code or label.
        #[serde(default)]
        selected_issue: String,
        /// Optional free-text reason.
        #[serde(default)]
        reason: String,
    },
    /// Report a lost item.
    ReportLostItem {
        /// The report.
        item: ItemReport,
    },
    /// Report a found item.
    ReportFoundItem {
        /// The report.
        item: ItemReport,
    },
    /// Resolve a lost item.
    MarkItemFound {
        /// Lost item to remove.
        id: ItemId,
    },
    /// List unresolved lost items.
    ListLostItems,
    /// List found items.
    ListFoundItems,
    /// Submit a help request.
    SubmitHelpRequest {
        /// Issue code, label or free text.
        #[serde(default)]
        issue: String,
        /// Free-text description.
        #[serde(default)]
        description: String,
    },
    /// Take a full dashboard snapshot.
    View,
}

impl DashboardIntent {
    /// Returns the intent's tag as it appears on the wire.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ListPendingTasks => "listPendingTasks",
            Self::ListAssignedTasks => "listAssignedTasks",
            Self::NotificationBadge => "notificationBadge",
            Self::AcceptTask { .. } => "acceptTask",
            Self::DeclineTask { .. } => "declineTask",
            Self::SetTaskStatus { .. } => "setTaskStatus",
            Self::BeginNotCompleted { .. } => "beginNotCompleted",
            Self::MarkTaskNotCompleted { .. } => "markTaskNotCompleted",
            Self::ReportLostItem { .. } => "reportLostItem",
            Self::ReportFoundItem { .. } => "reportFoundItem",
            Self::MarkItemFound { .. } => "markItemFound",
            Self::ListLostItems => "listLostItems",
            Self::ListFoundItems => "listFoundItems",
            Self::SubmitHelpRequest { .. } => "submitHelpRequest",
            Self::View => "view",
        }
    }

    /// Returns `true` for intents that never change dashboard state.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(
            self,
            Self::ListPendingTasks
                | Self::ListAssignedTasks
                | Self::NotificationBadge
                | Self::BeginNotCompleted { .. }
                | Self::ListLostItems
                | Self::ListFoundItems
                | Self::View
        )
    }
}
