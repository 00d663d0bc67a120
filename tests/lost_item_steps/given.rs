//! Given steps for lost-and-found BDD scenarios.

use super::world::ItemWorld;
use eyre::WrapErr;
use labkeeper::item::domain::ItemReport;
use rstest_bdd_macros::given;

#[given(r#"a lost "{name}" reported in category "{category}""#)]
fn lost_item_reported(
    world: &mut ItemWorld,
    name: String,
    category: String,
) -> Result<(), eyre::Report> {
    let item = world
        .dashboard
        .report_lost_item(ItemReport::new(name, category).with_location("Lab 204"))
        .wrap_err("report lost item for scenario")?;
    world.last_lost = Some(item);
    Ok(())
}
