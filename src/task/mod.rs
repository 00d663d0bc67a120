//! Booking-service task lifecycle.
//!
//! A booking request enters the pending queue through booking intake, is
//! accepted into the acting lab keeper's assigned list or declined, and then
//! moves through the physical-space states of its room. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
