//! Operational status of an assigned task.

use super::ParseTaskStatusError;
use crate::vocabulary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical-space state of an assigned task.
///
/// The ordinal states run `ToBeOpened -> Opened -> ToBeClosed -> Closed ->
/// Completed`. `NotCompleted` is a side branch that always carries a
/// structured failure reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Accepted; the room still has to be opened.
    ToBeOpened,
    /// The room has been opened.
    Opened,
    /// The booking is over and the room has to be closed.
    ToBeClosed,
    /// The room has been closed.
    Closed,
    /// The obligation has been fulfilled.
    Completed,
    /// The obligation could not be fulfilled.
    NotCompleted,
}

impl TaskStatus {
    /// States reachable through a plain status change, in forward order.
    pub const ORDINAL: [Self; 5] = [
        Self::ToBeOpened,
        Self::Opened,
        Self::ToBeClosed,
        Self::Closed,
        Self::Completed,
    ];

    /// Every status, including the `NotCompleted` side branch.
    pub const ALL: [Self; 6] = [
        Self::ToBeOpened,
        Self::Opened,
        Self::ToBeClosed,
        Self::Closed,
        Self::Completed,
        Self::NotCompleted,
    ];

    /// Returns the canonical code, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToBeOpened => "ToBeOpened",
            Self::Opened => "Opened",
            Self::ToBeClosed => "ToBeClosed",
            Self::Closed => "Closed",
            Self::Completed => "Completed",
            Self::NotCompleted => "NotCompleted",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToBeOpened => "To Be Opened",
            Self::Opened => "Opened",
            Self::ToBeClosed => "To Be Closed",
            Self::Closed => "Closed",
            Self::Completed => "Completed",
            Self::NotCompleted => "Not Completed",
        }
    }

    /// Returns `true` for `Completed` and `NotCompleted`.
    ///
    /// Terminal states can still be corrected with an explicit status change.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::NotCompleted)
    }

    /// Returns the next state in the forward sequence, if any.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::ToBeOpened => Some(Self::Opened),
            Self::Opened => Some(Self::ToBeClosed),
            Self::ToBeClosed => Some(Self::Closed),
            Self::Closed => Some(Self::Completed),
            Self::Completed | Self::NotCompleted => None,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        vocabulary::lookup(value, &Self::ALL, Self::as_str, Self::label)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
