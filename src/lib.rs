//! Labkeeper: facilities dashboard core for lab keepers.
//!
//! Lab keepers service room bookings and look after lost property. This
//! crate holds the stateful core of their dashboard: the pending queue and
//! assigned worklist of booking tasks, the open/close status machine with
//! its structured "not completed" capture, a lost-and-found registry, and a
//! help-request intake. Presentation layers talk only to
//! [`dashboard::DashboardController`].
//!
//! # Architecture
//!
//! Each bounded context is split into:
//!
//! - **Domain**: value types and invariants, free of infrastructure
//! - **Ports**: trait seams for external collaborators
//! - **Adapters**: in-memory implementations of those ports
//! - **Services**: orchestration over domain types
//!
//! # Modules
//!
//! - [`task`]: booking tasks, queue and status machine
//! - [`item`]: lost and found items
//! - [`help`]: help-request intake
//! - [`dashboard`]: controller, intents and view models
//! - [`config`]: validation limits and display defaults
//! - [`error`]: shared not-found and validation errors

pub mod config;
pub mod dashboard;
pub mod error;
pub mod help;
pub mod item;
pub mod task;

mod vocabulary;
