//! Shared world state for lost-and-found BDD scenarios.

use std::sync::Arc;

use labkeeper::config::DashboardConfig;
use labkeeper::dashboard::{DashboardController, DashboardError};
use labkeeper::item::domain::LostItem;
use mockable::DefaultClock;
use rstest::fixture;

/// Scenario world for lost-and-found behaviour tests.
pub struct ItemWorld {
    /// The controller under test.
    pub dashboard: DashboardController<DefaultClock>,
    /// The most recently reported lost item.
    pub last_lost: Option<LostItem>,
    /// Error from the most recent intent, if it failed.
    pub last_error: Option<DashboardError>,
}

impl Default for ItemWorld {
    fn default() -> Self {
        Self {
            dashboard: DashboardController::new(DashboardConfig::default(), Arc::new(DefaultClock)),
            last_lost: None,
            last_error: None,
        }
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ItemWorld {
    ItemWorld::default()
}
