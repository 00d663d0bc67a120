//! In-memory integration tests for queue membership invariants.

use super::helpers::{Harness, harness};
use labkeeper::dashboard::ErrorKind;
use labkeeper::task::domain::{TaskId, TaskStatus};
use rstest::rstest;

fn pending_ids(harness: &Harness) -> Vec<String> {
    harness
        .dashboard
        .list_pending_tasks()
        .iter()
        .map(|task| task.id().to_string())
        .collect()
}

fn assigned_ids(harness: &Harness) -> Vec<String> {
    harness
        .dashboard
        .list_assigned_tasks()
        .iter()
        .map(|task| task.id().to_string())
        .collect()
}

#[rstest]
fn every_id_lives_in_exactly_one_collection(#[with(8)] mut harness: Harness) -> eyre::Result<()> {
    let script = [
        ("t3", true),
        ("t0", false),
        ("t7", true),
        ("t3", true),
        ("t5", false),
        ("t1", true),
        ("t0", true),
    ];
    for (raw_id, accept) in script {
        let id = TaskId::from(raw_id);
        let _outcome = if accept {
            harness.dashboard.accept_task(&id).map(|_| ())
        } else {
            harness.dashboard.decline_task(&id)
        };

        let pending = pending_ids(&harness);
        let assigned = assigned_ids(&harness);
        eyre::ensure!(
            pending.iter().all(|p| !assigned.contains(p)),
            "id in both collections after {raw_id}"
        );
        eyre::ensure!(harness.dashboard.notification_badge() == pending.len());
    }

    eyre::ensure!(pending_ids(&harness) == vec!["t2", "t4", "t6"]);
    eyre::ensure!(assigned_ids(&harness) == vec!["t3", "t7", "t1"]);
    Ok(())
}

#[rstest]
fn failed_intents_leave_no_trace(mut harness: Harness) -> eyre::Result<()> {
    harness.dashboard.accept_task(&TaskId::from("t2"))?;
    let before = harness.dashboard.view();
    let logged = harness.log.len();

    let failures = [
        harness.dashboard.accept_task(&TaskId::from("t2")).err(),
        harness.dashboard.decline_task(&TaskId::from("t2")).err(),
        harness
            .dashboard
            .set_task_status(&TaskId::from("t0"), TaskStatus::Opened)
            .err(),
        harness
            .dashboard
            .set_task_status(&TaskId::from("t2"), TaskStatus::NotCompleted)
            .err(),
        harness
            .dashboard
            .mark_task_not_completed(&TaskId::from("t2"), "Other", "")
            .err(),
    ];

    eyre::ensure!(failures.iter().all(Option::is_some));
    let kinds: Vec<_> = failures.iter().flatten().map(|err| err.kind()).collect();
    eyre::ensure!(
        kinds
            == vec![
                ErrorKind::NotFound,
                ErrorKind::NotFound,
                ErrorKind::NotFound,
                ErrorKind::Validation,
                ErrorKind::Validation,
            ]
    );
    eyre::ensure!(harness.dashboard.view() == before);
    eyre::ensure!(harness.log.len() == logged);
    Ok(())
}

#[rstest]
fn status_can_walk_the_full_sequence_and_back(mut harness: Harness) -> eyre::Result<()> {
    let id = TaskId::from("t4");
    harness.dashboard.accept_task(&id)?;

    let mut current = TaskStatus::ToBeOpened;
    while let Some(next) = current.successor() {
        let task = harness.dashboard.set_task_status(&id, next)?;
        eyre::ensure!(task.status() == next);
        current = next;
    }
    eyre::ensure!(current == TaskStatus::Completed);

    let reset = harness
        .dashboard
        .set_task_status(&id, TaskStatus::ToBeOpened)?;
    eyre::ensure!(reset.status() == TaskStatus::ToBeOpened);
    eyre::ensure!(reset.updated_at() >= reset.assigned_at());
    Ok(())
}

#[rstest]
fn not_completed_can_be_corrected_from_terminal_states(mut harness: Harness) -> eyre::Result<()> {
    let id = TaskId::from("t1");
    harness.dashboard.accept_task(&id)?;
    harness
        .dashboard
        .set_task_status(&id, TaskStatus::Completed)?;

    let first = harness
        .dashboard
        .mark_task_not_completed(&id, "RoomInUse", "")?;
    let corrected = harness
        .dashboard
        .mark_task_not_completed(&id, "Time changed", "moved to Friday")?;

    eyre::ensure!(first.reason() == Some("Room is already in use"));
    eyre::ensure!(corrected.reason() == Some("moved to Friday"));
    eyre::ensure!(corrected.status() == TaskStatus::NotCompleted);
    Ok(())
}
