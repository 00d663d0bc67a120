//! When steps for dashboard task BDD scenarios.

use super::world::DashboardWorld;
use labkeeper::task::domain::{TaskId, TaskStatus};
use rstest_bdd_macros::when;

#[when(r#"the lab keeper accepts task "{id}""#)]
fn accept_task(world: &mut DashboardWorld, id: String) {
    let result = world.dashboard.accept_task(&TaskId::new(id));
    world.record(result);
}

#[when(r#"the lab keeper declines task "{id}""#)]
fn decline_task(world: &mut DashboardWorld, id: String) {
    let result = world.dashboard.decline_task(&TaskId::new(id));
    world.record(result);
}

#[when(r#"the lab keeper sets task "{id}" to "{status}""#)]
fn set_task_status(
    world: &mut DashboardWorld,
    id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let result = world.dashboard.set_task_status(&TaskId::new(id), target);
    world.record(result);
    Ok(())
}

#[when(r#"the lab keeper marks task "{id}" not completed with issue "{issue}" and no reason"#)]
fn mark_not_completed_without_reason(world: &mut DashboardWorld, id: String, issue: String) {
    let result = world
        .dashboard
        .mark_task_not_completed(&TaskId::new(id), &issue, "");
    world.record(result);
}

#[when(r#"the lab keeper marks task "{id}" not completed with issue "{issue}" and reason "{reason}""#)]
fn mark_not_completed_with_reason(
    world: &mut DashboardWorld,
    id: String,
    issue: String,
    reason: String,
) {
    let result = world
        .dashboard
        .mark_task_not_completed(&TaskId::new(id), &issue, &reason);
    world.record(result);
}
