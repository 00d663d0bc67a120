//! Port contracts for the task context.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod listener;

pub use listener::TaskChangeListener;

#[cfg(test)]
pub use listener::MockTaskChangeListener;
