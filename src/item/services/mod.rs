//! Application services for lost-and-found items.

mod registry;

pub use registry::ItemRegistry;
