//! Help request intake service.

use std::fmt;
use std::sync::Arc;

use mockable::Clock;
use tracing::{info, warn};

use super::domain::{AckToken, HelpIssue};
use crate::config::DashboardConfig;

/// Accepts help requests and acknowledges every one of them.
pub struct HelpRequestIntake<C>
where
    C: Clock + Send + Sync,
{
    max_description_length: usize,
    clock: Arc<C>,
}

impl<C> HelpRequestIntake<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an intake applying the configured description limit.
    #[must_use]
    pub const fn new(config: &DashboardConfig, clock: Arc<C>) -> Self {
        Self {
            max_description_length: config.max_description_length,
            clock,
        }
    }

    /// Submits a help request.
    ///
    /// Both fields may be empty. Issue text that names no known
    /// [`HelpIssue`] is kept verbatim. A
    /// description over the configured limit is truncated rather than
    /// rejected.
    #[must_use]
    pub fn submit(&self, issue: &str, description: &str) -> AckToken {
        let trimmed = description.trim();
        let stored: String = trimmed.chars().take(self.max_description_length).collect();
        if stored.len() < trimmed.len() {
            warn!(
                limit = self.max_description_length,
                "help request description truncated"
            );
        }
        let ack = AckToken::new(self.clock.utc(), issue.trim().to_owned(), stored);
        info!(
            token = %ack.token(),
            issue = ack.issue().map_or("unrecognised", HelpIssue::as_str),
            "help request received"
        );
        ack
    }
}

impl<C> fmt::Debug for HelpRequestIntake<C>
where
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpRequestIntake")
            .field("max_description_length", &self.max_description_length)
            .finish_non_exhaustive()
    }
}
