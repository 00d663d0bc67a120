//! Shared world state for dashboard task BDD scenarios.

use std::sync::Arc;

use labkeeper::config::DashboardConfig;
use labkeeper::dashboard::{DashboardController, DashboardError};
use labkeeper::task::adapters::memory::InMemoryTaskChangeLog;
use mockable::DefaultClock;
use rstest::fixture;

/// Controller type used by the BDD world.
pub type TestDashboard = DashboardController<DefaultClock>;

/// Scenario world for dashboard task behaviour tests.
pub struct DashboardWorld {
    /// The controller under test.
    pub dashboard: TestDashboard,
    /// Listener subscribed to every task change.
    pub change_log: InMemoryTaskChangeLog,
    /// Error from the most recent intent, if it failed.
    pub last_error: Option<DashboardError>,
}

impl DashboardWorld {
    /// Creates a world with an empty dashboard and a subscribed change log.
    #[must_use]
    pub fn new() -> Self {
        let mut dashboard =
            DashboardController::new(DashboardConfig::default(), Arc::new(DefaultClock));
        let change_log = InMemoryTaskChangeLog::new();
        dashboard.subscribe(Arc::new(change_log.clone()));
        Self {
            dashboard,
            change_log,
            last_error: None,
        }
    }

    /// Records the outcome of an intent.
    pub fn record<T>(&mut self, result: Result<T, DashboardError>) {
        self.last_error = result.err();
    }
}

impl Default for DashboardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DashboardWorld {
    DashboardWorld::default()
}
