//! Then steps for lost-and-found BDD scenarios.

use super::world::ItemWorld;
use labkeeper::dashboard::ErrorKind;
use rstest_bdd_macros::then;

#[then("the lost item list has {count:usize} entries")]
fn lost_list_count(world: &ItemWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = world.dashboard.list_lost_items().len();
    if listed != count {
        return Err(eyre::eyre!("expected {count} lost items, found {listed}"));
    }
    Ok(())
}

#[then("the found item list has {count:usize} entries")]
fn found_list_count(world: &ItemWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = world.dashboard.list_found_items().len();
    if listed != count {
        return Err(eyre::eyre!("expected {count} found items, found {listed}"));
    }
    Ok(())
}

#[then(r#"the reporter is shown as "{label}""#)]
fn reporter_shown_as(world: &ItemWorld, label: String) -> Result<(), eyre::Report> {
    let item = world
        .last_lost
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing lost item in scenario world"))?;
    let shown = item.reporter_display(world.dashboard.config());
    if shown != label {
        return Err(eyre::eyre!("expected reporter {label}, found {shown}"));
    }
    Ok(())
}

#[then("the intent fails with a not found error")]
fn fails_not_found(world: &ItemWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        other => Err(eyre::eyre!("expected a not found error, got {other:?}")),
    }
}

#[then(r#"the intent fails with a validation error on "{field}""#)]
fn fails_validation(world: &ItemWorld, field: String) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(err) if err.kind() == ErrorKind::Validation && err.field() == Some(field.as_str()) => {
            Ok(())
        }
        other => Err(eyre::eyre!(
            "expected a validation error on {field}, got {other:?}"
        )),
    }
}
