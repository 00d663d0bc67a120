//! Lost-and-found item registry.
//!
//! Lab keepers report items lost or found in the rooms they service and
//! remove a lost item once it turns up. Lost and found records are never
//! matched against each other.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
