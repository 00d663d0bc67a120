//! Help-request submission.
//!
//! A pass-through intake: every submission is acknowledged, whatever it
//! contains.

pub mod domain;
pub mod services;
