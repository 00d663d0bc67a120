//! Listener port for task change notifications.

use crate::task::domain::TaskChange;

/// Subscriber notified after every successful task mutation.
///
/// External storage or audit collaborators implement this to mirror the
/// dashboard's state. Notifications are delivered synchronously, in
/// mutation order, after the change is already visible in the queue.
#[cfg_attr(test, mockall::automock)]
pub trait TaskChangeListener: Send + Sync {
    /// Receives a committed task change.
    fn on_task_changed(&self, change: &TaskChange);
}
