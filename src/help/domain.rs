//! Help request vocabulary and acknowledgement.

use crate::vocabulary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Common problems a lab keeper can raise with support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HelpIssue {
    /// A classroom cannot be opened.
    CannotOpenClassroom,
    /// A system login fails.
    CannotAccessSystem,
    /// The booking system misbehaves.
    BookingSystemIssue,
    /// The app is unresponsive.
    AppNotResponding,
    /// Anything else.
    Other,
}

impl HelpIssue {
    /// Every issue in display order.
    pub const ALL: [Self; 5] = [
        Self::CannotOpenClassroom,
        Self::CannotAccessSystem,
        Self::BookingSystemIssue,
        Self::AppNotResponding,
        Self::Other,
    ];

    /// Returns the canonical code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CannotOpenClassroom => "CannotOpenClassroom",
            Self::CannotAccessSystem => "CannotAccessSystem",
            Self::BookingSystemIssue => "BookingSystemIssue",
            Self::AppNotResponding => "AppNotResponding",
            Self::Other => "Other",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CannotOpenClassroom => "Cannot open the classroom",
            Self::CannotAccessSystem => "Cannot access the system",
            Self::BookingSystemIssue => "Booking system issue",
            Self::AppNotResponding => "App not responding",
            Self::Other => "Other",
        }
    }

    /// Matches free text against the vocabulary, returning `None` when it
    /// names no known issue.
    #[must_use]
    pub fn recognise(value: &str) -> Option<Self> {
        vocabulary::lookup(value, &Self::ALL, Self::as_str, Self::label)
    }
}

impl fmt::Display for HelpIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receipt for a submitted help request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckToken {
    token: Uuid,
    received_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issue: Option<HelpIssue>,
    issue_text: String,
    description: String,
}

impl AckToken {
    pub(crate) fn new(
        received_at: DateTime<Utc>,
        issue_text: String,
        description: String,
    ) -> Self {
        Self {
            token: Uuid::new_v4(),
            received_at,
            issue: HelpIssue::recognise(&issue_text),
            issue_text,
            description,
        }
    }

    /// Returns the unique acknowledgement token.
    #[must_use]
    pub const fn token(&self) -> Uuid {
        self.token
    }

    /// Returns when the request was received.
    #[must_use]
    pub const fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Returns the recognised issue, if the text named one.
    #[must_use]
    pub const fn issue(&self) -> Option<HelpIssue> {
        self.issue
    }

    /// Returns the issue as submitted, trimmed.
    #[must_use]
    pub fn issue_text(&self) -> &str {
        &self.issue_text
    }

    /// Returns the description as stored.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
