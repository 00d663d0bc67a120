//! When steps for lost-and-found BDD scenarios.

use super::world::ItemWorld;
use labkeeper::item::domain::ItemReport;
use rstest_bdd_macros::when;

#[when("the lost item is marked found")]
fn mark_lost_item_found(world: &mut ItemWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_lost
        .as_ref()
        .map(|item| item.id())
        .ok_or_else(|| eyre::eyre!("missing lost item in scenario world"))?;
    world.last_error = world.dashboard.mark_item_found(id).err();
    Ok(())
}

#[when(r#"a lost item without a name is reported in category "{category}""#)]
fn report_nameless_item(world: &mut ItemWorld, category: String) {
    world.last_error = world
        .dashboard
        .report_lost_item(ItemReport::new("", category))
        .err();
}

#[when(r#"a found "{name}" is reported in category "{category}""#)]
fn found_item_reported(world: &mut ItemWorld, name: String, category: String) {
    world.last_error = world
        .dashboard
        .report_found_item(ItemReport::new(name, category))
        .err();
}
