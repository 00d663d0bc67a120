//! Step definitions for dashboard task scenarios.

pub mod when;
pub mod world;
