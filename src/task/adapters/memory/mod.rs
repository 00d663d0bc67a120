//! In-memory adapters for the task context.

mod change_log;

pub use change_log::InMemoryTaskChangeLog;
