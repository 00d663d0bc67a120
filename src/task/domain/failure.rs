//! Structured reasons for tasks that could not be completed.

use super::ParseIssueError;
use crate::error::{ValidationError, ensure_max_length};
use crate::vocabulary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed vocabulary of reasons a task could not be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotCompletedIssue {
    /// The room could not be opened.
    CannotOpenRoom,
    /// The key is missing.
    KeyMissing,
    /// Somebody is already using the room.
    RoomInUse,
    /// The booking time changed.
    TimeChanged,
    /// Somebody else booked the room.
    BookedByOther,
    /// A technical fault prevented the work.
    TechnicalIssue,
    /// Completing the work would raise a security concern.
    SecurityConcern,
    /// Any other reason; requires a free-text explanation.
    Other,
}

impl NotCompletedIssue {
    /// Every issue in display order.
    pub const ALL: [Self; 8] = [
        Self::CannotOpenRoom,
        Self::KeyMissing,
        Self::RoomInUse,
        Self::TimeChanged,
        Self::BookedByOther,
        Self::TechnicalIssue,
        Self::SecurityConcern,
        Self::Other,
    ];

    /// Returns the canonical code, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CannotOpenRoom => "CannotOpenRoom",
            Self::KeyMissing => "KeyMissing",
            Self::RoomInUse => "RoomInUse",
            Self::TimeChanged => "TimeChanged",
            Self::BookedByOther => "BookedByOther",
            Self::TechnicalIssue => "TechnicalIssue",
            Self::SecurityConcern => "SecurityConcern",
            Self::Other => "Other",
        }
    }

    /// Returns the human-readable label, also used as the fallback reason.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CannotOpenRoom => "Can't open the room",
            Self::KeyMissing => "Key is missing",
            Self::RoomInUse => "Room is already in use",
            Self::TimeChanged => "Time changed",
            Self::BookedByOther => "Booked by another person",
            Self::TechnicalIssue => "Technical issue",
            Self::SecurityConcern => "Security concern",
            Self::Other => "Other",
        }
    }

    /// Returns `true` when the issue needs a free-text explanation.
    #[must_use]
    pub const fn requires_free_text(self) -> bool {
        matches!(self, Self::Other)
    }
}

impl TryFrom<&str> for NotCompletedIssue {
    type Error = ParseIssueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        vocabulary::lookup(value, &Self::ALL, Self::as_str, Self::label)
            .ok_or_else(|| ParseIssueError(value.to_owned()))
    }
}

impl fmt::Display for NotCompletedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A selected issue together with the resolved explanation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReason {
    selected_issue: NotCompletedIssue,
    reason: String,
}

impl FailureReason {
    /// Resolves the stored reason text for a selected issue.
    ///
    /// Free text wins when present; otherwise the issue label is stored.
    /// Free text is trimmed before it is stored, and text that is blank
    /// after trimming counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingOtherReason`] when the issue is
    /// [`NotCompletedIssue::Other`] and `free_text` is blank, or
    /// [`ValidationError::TooLong`] when the text exceeds `max_length`.
    pub fn resolve(
        selected_issue: NotCompletedIssue,
        free_text: &str,
        max_length: usize,
    ) -> Result<Self, ValidationError> {
        let text = free_text.trim();
        if text.is_empty() {
            if selected_issue.requires_free_text() {
                return Err(ValidationError::MissingOtherReason);
            }
            return Ok(Self {
                selected_issue,
                reason: selected_issue.label().to_owned(),
            });
        }

        ensure_max_length("reason", text, max_length)?;
        Ok(Self {
            selected_issue,
            reason: text.to_owned(),
        })
    }

    /// Returns the selected issue.
    #[must_use]
    pub const fn selected_issue(&self) -> NotCompletedIssue {
        self.selected_issue
    }

    /// Returns the resolved reason text.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.selected_issue.label(), self.reason)
    }
}
