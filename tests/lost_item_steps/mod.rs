//! Step definitions for lost-and-found scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
