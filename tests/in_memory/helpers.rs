//! Shared test helpers for in-memory dashboard integration tests.

use std::sync::Arc;

use labkeeper::config::DashboardConfig;
use labkeeper::dashboard::DashboardController;
use labkeeper::task::adapters::memory::InMemoryTaskChangeLog;
use labkeeper::task::domain::Task;
use mockable::DefaultClock;
use rstest::fixture;

/// Controller type used across the in-memory suites.
pub type TestDashboard = DashboardController<DefaultClock>;

/// A dashboard paired with the change log subscribed to it.
pub struct Harness {
    /// The controller under test.
    pub dashboard: TestDashboard,
    /// Listener receiving every task change.
    pub log: InMemoryTaskChangeLog,
}

/// Builds a booking task on the given floor of the science building.
#[must_use]
pub fn booking(id: &str, floor: i32) -> Task {
    Task::new(id, format!("Lab {id}"), "10:00-11:00", floor, "Science")
}

/// Provides a dashboard with `count` pending tasks named `t0`, `t1`, ...
///
/// # Panics
///
/// Panics if a generated task is rejected.
#[fixture]
pub fn harness(#[default(5)] count: i32) -> Harness {
    let mut dashboard =
        DashboardController::new(DashboardConfig::default(), Arc::new(DefaultClock));
    let log = InMemoryTaskChangeLog::new();
    dashboard.subscribe(Arc::new(log.clone()));
    for index in 0..count {
        dashboard
            .enqueue_task(booking(&format!("t{index}"), index))
            .expect("generated task should enqueue");
    }
    Harness { dashboard, log }
}
