//! In-memory integration tests for seeding a dashboard from storage.

use std::sync::Arc;

use labkeeper::config::DashboardConfig;
use labkeeper::dashboard::{DashboardController, DashboardError, SessionSeed};
use labkeeper::error::ValidationError;
use labkeeper::task::domain::{NotCompletedIssue, TaskStatus};
use mockable::DefaultClock;
use rstest::rstest;

const SEED: &str = r#"{
    "pending": [
        {"id": "p1", "roomName": "Lab 1", "bookingTime": "08:00-09:00", "floor": 0,
         "building": "North", "requesterName": "Ana"}
    ],
    "assigned": [
        {"id": "a1", "roomName": "Lab 2", "bookingTime": "09:00-10:00", "floor": 1,
         "building": "North", "status": "NotCompleted", "selectedIssue": "Key is missing"},
        {"id": "a2", "roomName": "Lab 3", "bookingTime": "10:00-11:00", "floor": 2,
         "building": "North", "status": "Opened", "selectedIssue": "Other", "reason": "stale"}
    ]
}"#;

fn seed_from(raw: &str) -> eyre::Result<SessionSeed> {
    Ok(serde_json::from_str(raw)?)
}

#[rstest]
fn json_seed_restores_queue_and_reasons() -> eyre::Result<()> {
    let dashboard = DashboardController::with_seed(
        DashboardConfig::default(),
        Arc::new(DefaultClock),
        seed_from(SEED)?,
    )?;

    eyre::ensure!(dashboard.notification_badge() == 1);
    let assigned = dashboard.list_assigned_tasks();
    let [failed, opened] = assigned.as_slice() else {
        return Err(eyre::eyre!("expected two assigned tasks"));
    };
    eyre::ensure!(failed.selected_issue() == Some(NotCompletedIssue::KeyMissing));
    eyre::ensure!(failed.reason() == Some("Key is missing"));
    eyre::ensure!(opened.status() == TaskStatus::Opened);
    eyre::ensure!(opened.failure().is_none());
    Ok(())
}

#[rstest]
#[case(
    r#"{"assigned": [{"id": "x", "roomName": "Lab", "bookingTime": "", "floor": 0,
        "building": "", "status": "NotCompleted", "selectedIssue": "Other"}]}"#,
    ValidationError::MissingOtherReason
)]
#[case(
    r#"{"pending": [{"id": "x", "roomName": " ", "bookingTime": "", "floor": 0,
        "building": ""}]}"#,
    ValidationError::missing("roomName")
)]
fn invalid_seed_is_rejected(#[case] raw: &str, #[case] expected: ValidationError) -> eyre::Result<()> {
    let result = DashboardController::with_seed(
        DashboardConfig::default(),
        Arc::new(DefaultClock),
        seed_from(raw)?,
    );

    eyre::ensure!(
        result.err() == Some(DashboardError::Validation(expected)),
        "seed should fail validation"
    );
    Ok(())
}

#[rstest]
fn strict_config_limits_seeded_reasons() -> eyre::Result<()> {
    let long_reason = "x".repeat(201);
    let raw = format!(
        r#"{{"assigned": [{{"id": "x", "roomName": "Lab", "bookingTime": "", "floor": 0,
            "building": "", "status": "NotCompleted", "selectedIssue": "Other",
            "reason": "{long_reason}"}}]}}"#
    );

    let result = DashboardController::with_seed(
        DashboardConfig::strict(),
        Arc::new(DefaultClock),
        seed_from(&raw)?,
    );

    eyre::ensure!(matches!(
        result.err(),
        Some(DashboardError::Validation(ValidationError::TooLong { max: 200, .. }))
    ));
    Ok(())
}

fn lost_item_seed(item_name: &str, description: &str) -> String {
    format!(
        r#"{{"lostItems": [{{"id": "6f1c2a7e-3b4d-4e5f-8a9b-0c1d2e3f4a5b",
            "itemName": "{item_name}", "category": "PersonalItems",
            "description": "{description}", "timestamp": "2024-05-01T09:30:00Z"}}]}}"#
    )
}

#[rstest]
#[case("   ", "", ValidationError::missing("itemName"))]
#[case(
    "Scarf",
    "red wool x",
    ValidationError::TooLong { field: "description", max: 3, actual: 10 }
)]
fn seeded_lost_items_follow_report_rules(
    #[case] item_name: &str,
    #[case] description: &str,
    #[case] expected: ValidationError,
) -> eyre::Result<()> {
    let config = DashboardConfig {
        max_description_length: 3,
        ..DashboardConfig::default()
    };

    let result = DashboardController::with_seed(
        config,
        Arc::new(DefaultClock),
        seed_from(&lost_item_seed(item_name, description))?,
    );

    eyre::ensure!(
        result.err() == Some(DashboardError::Validation(expected)),
        "seeded lost item should fail validation"
    );
    Ok(())
}

#[rstest]
fn valid_seeded_lost_item_is_listed() -> eyre::Result<()> {
    let dashboard = DashboardController::with_seed(
        DashboardConfig::default(),
        Arc::new(DefaultClock),
        seed_from(&lost_item_seed("Scarf", "red wool"))?,
    )?;

    let lost = dashboard.list_lost_items();
    eyre::ensure!(lost.len() == 1);
    eyre::ensure!(lost.iter().all(|item| item.record().item_name() == "Scarf"));
    Ok(())
}
