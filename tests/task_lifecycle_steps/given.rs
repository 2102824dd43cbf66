//! Given steps for task lifecycle BDD scenarios.

use super::world::AgendaWorld;
use rstest_bdd_macros::given;

#[given("an empty agenda")]
fn empty_agenda(world: &mut AgendaWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.controller.repository().active().is_empty(),
        "scenario world should start without tasks"
    );
    Ok(())
}

#[given("the user confirms every prompt")]
fn confirms_every_prompt(world: &mut AgendaWorld) {
    world.answer.answer(true);
}

#[given("the user declines every prompt")]
fn declines_every_prompt(world: &mut AgendaWorld) {
    world.answer.answer(false);
}
