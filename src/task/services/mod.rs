//! Application services for task queue and status orchestration.

mod queue;
mod status_machine;

pub use queue::TaskQueue;
pub use status_machine::{StatusTransition, TaskStatusError, TaskStatusMachine, TaskStatusResult};
