//! Booking-service task types.

use super::{FailureReason, NotCompletedIssue, TaskId, TaskStatus};
use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A room-servicing request as delivered by booking intake.
///
/// Pending tasks carry no status; a status only exists once the task has
/// been accepted into an [`AssignedTask`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    room_name: String,
    booking_time: String,
    floor: i32,
    building: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    requester_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    additional_info: Option<String>,
}

impl Task {
    /// Creates a task with the required booking fields.
    #[must_use]
    pub fn new(
        id: impl Into<TaskId>,
        room_name: impl Into<String>,
        booking_time: impl Into<String>,
        floor: i32,
        building: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            room_name: room_name.into(),
            booking_time: booking_time.into(),
            floor,
            building: building.into(),
            requester_name: None,
            additional_info: None,
        }
    }

    /// Sets the name of the person who booked the room.
    #[must_use]
    pub fn with_requester(mut self, requester_name: impl Into<String>) -> Self {
        self.requester_name = Some(requester_name.into());
        self
    }

    /// Sets free-text notes from the requester.
    #[must_use]
    pub fn with_additional_info(mut self, additional_info: impl Into<String>) -> Self {
        self.additional_info = Some(additional_info.into());
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the room name.
    #[must_use]
    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    /// Returns the display-opaque booking time range.
    #[must_use]
    pub fn booking_time(&self) -> &str {
        &self.booking_time
    }

    /// Returns the floor number.
    #[must_use]
    pub const fn floor(&self) -> i32 {
        self.floor
    }

    /// Returns the building name.
    #[must_use]
    pub fn building(&self) -> &str {
        &self.building
    }

    /// Returns the requester's name, if known.
    #[must_use]
    pub fn requester_name(&self) -> Option<&str> {
        self.requester_name.as_deref()
    }

    /// Returns the requester's notes, if any.
    #[must_use]
    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }

    /// Checks the fields booking intake must always supply.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] naming the first blank
    /// required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::missing("id"));
        }
        if self.room_name.trim().is_empty() {
            return Err(ValidationError::missing("roomName"));
        }
        Ok(())
    }
}

/// A task accepted by the acting lab keeper.
///
/// A failure reason is present exactly when the status is
/// [`TaskStatus::NotCompleted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTask {
    #[serde(flatten)]
    task: Task,
    status: TaskStatus,
    #[serde(flatten)]
    failure: Option<FailureReason>,
    assigned_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for restoring an assigned task from external storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTaskRecord {
    /// Booking fields of the task.
    #[serde(flatten)]
    pub task: Task,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted issue code or label; only read for `NotCompleted`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_issue: Option<String>,
    /// Persisted reason text; only read for `NotCompleted`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AssignedTask {
    /// Accepts a pending task with the initial status `ToBeOpened`.
    #[must_use]
    pub fn accept(task: Task, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            task,
            status: TaskStatus::ToBeOpened,
            failure: None,
            assigned_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Restores an assigned task from a persisted record.
    ///
    /// A `NotCompleted` record goes through the same reason resolution as
    /// a live capture; any issue or reason stored alongside another status
    /// is discarded as stale.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the booking fields are incomplete
    /// or a `NotCompleted` record lacks a valid issue and reason.
    pub fn restore(
        record: AssignedTaskRecord,
        max_reason_length: usize,
        clock: &impl Clock,
    ) -> Result<Self, ValidationError> {
        record.task.validate()?;
        let failure = if record.status == TaskStatus::NotCompleted {
            let issue_text = record.selected_issue.as_deref().unwrap_or_default();
            if issue_text.trim().is_empty() {
                return Err(ValidationError::missing("selectedIssue"));
            }
            let issue = NotCompletedIssue::try_from(issue_text)?;
            Some(FailureReason::resolve(
                issue,
                record.reason.as_deref().unwrap_or_default(),
                max_reason_length,
            )?)
        } else {
            None
        };

        let timestamp = clock.utc();
        Ok(Self {
            task: record.task,
            status: record.status,
            failure,
            assigned_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the underlying booking task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        self.task.id()
    }

    /// Returns the operational status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the recorded failure, present only for `NotCompleted`.
    #[must_use]
    pub const fn failure(&self) -> Option<&FailureReason> {
        self.failure.as_ref()
    }

    /// Returns the selected not-completed issue, if any.
    #[must_use]
    pub fn selected_issue(&self) -> Option<NotCompletedIssue> {
        self.failure.as_ref().map(FailureReason::selected_issue)
    }

    /// Returns the resolved not-completed reason text, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.failure.as_ref().map(FailureReason::reason)
    }

    /// Returns when the task was accepted.
    #[must_use]
    pub const fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    /// Returns when the status last changed.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to any ordinal status, discarding a stale failure.
    ///
    /// Backward moves are allowed so staff can correct a status.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ReasonRequired`] when `target` is
    /// [`TaskStatus::NotCompleted`]; use [`Self::mark_not_completed`].
    pub fn set_status(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), ValidationError> {
        if target == TaskStatus::NotCompleted {
            return Err(ValidationError::ReasonRequired);
        }
        self.status = target;
        self.failure = None;
        self.touch(clock);
        Ok(())
    }

    /// Records that the task could not be completed.
    pub fn mark_not_completed(&mut self, failure: FailureReason, clock: &impl Clock) {
        self.status = TaskStatus::NotCompleted;
        self.failure = Some(failure);
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
