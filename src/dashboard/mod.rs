//! Facade consumed by presentation layers.
//!
//! [`DashboardController`] owns every collaborator for one acting lab
//! keeper, maps each user intent onto exactly one collaborator operation,
//! and reports failures as [`DashboardError`] values rather than panics.
//! [`DashboardIntent`] and [`IntentOutcome`] give the same contract a
//! serializable command form.

mod controller;
mod error;
mod intent;
mod view;

pub use controller::{DashboardController, DashboardResult, SessionSeed};
pub use error::{DashboardError, ErrorKind};
pub use intent::DashboardIntent;
pub use view::{DashboardView, ErrorBody, IntentData, IntentOutcome};

#[cfg(test)]
mod tests;
