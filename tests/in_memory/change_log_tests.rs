//! In-memory integration tests for task change delivery.

use std::thread;

use super::helpers::{Harness, harness};
use labkeeper::task::adapters::memory::InMemoryTaskChangeLog;
use labkeeper::task::domain::{TaskChange, TaskId, TaskStatus};
use labkeeper::task::ports::TaskChangeListener;
use rstest::rstest;

#[rstest]
fn changes_arrive_in_mutation_order(mut harness: Harness) -> eyre::Result<()> {
    let id = TaskId::from("t0");
    harness.dashboard.accept_task(&id)?;
    harness.dashboard.decline_task(&TaskId::from("t1"))?;
    harness.dashboard.set_task_status(&id, TaskStatus::Opened)?;
    harness
        .dashboard
        .mark_task_not_completed(&id, "SecurityConcern", "")?;

    let changes = harness.log.changes();
    eyre::ensure!(changes.len() == 4);
    eyre::ensure!(matches!(changes.first(), Some(TaskChange::Accepted { .. })));
    eyre::ensure!(matches!(changes.get(1), Some(TaskChange::Declined { .. })));
    eyre::ensure!(matches!(
        changes.get(2),
        Some(TaskChange::StatusChanged {
            previous: TaskStatus::ToBeOpened,
            ..
        })
    ));
    eyre::ensure!(matches!(
        changes.get(3),
        Some(TaskChange::MarkedNotCompleted {
            previous: TaskStatus::Opened,
            ..
        })
    ));
    eyre::ensure!(harness.log.changes_for(&id).len() == 3);
    Ok(())
}

#[rstest]
fn changes_serialize_with_type_tag(mut harness: Harness) -> eyre::Result<()> {
    let id = TaskId::from("t3");
    harness.dashboard.accept_task(&id)?;
    harness
        .dashboard
        .mark_task_not_completed(&id, "Other", "broke lock")?;

    let encoded: Vec<serde_json::Value> = harness
        .log
        .changes()
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()?;

    let last = encoded
        .last()
        .ok_or_else(|| eyre::eyre!("expected a recorded change"))?;
    eyre::ensure!(last["type"] == "markedNotCompleted");
    eyre::ensure!(last["previous"] == "ToBeOpened");
    eyre::ensure!(last["task"]["reason"] == "broke lock");
    eyre::ensure!(last["task"]["roomName"] == "Lab t3");
    Ok(())
}

#[rstest]
fn log_is_shared_between_clones_and_threads(mut harness: Harness) -> eyre::Result<()> {
    harness.dashboard.accept_task(&TaskId::from("t0"))?;
    let seen = harness.log.changes();
    let shared = InMemoryTaskChangeLog::new();

    let workers: Vec<_> = seen
        .into_iter()
        .map(|change| {
            let log = shared.clone();
            thread::spawn(move || log.on_task_changed(&change))
        })
        .collect();
    for worker in workers {
        worker
            .join()
            .map_err(|_| eyre::eyre!("listener thread panicked"))?;
    }

    eyre::ensure!(shared.len() == 1);
    eyre::ensure!(!shared.is_empty());
    Ok(())
}
