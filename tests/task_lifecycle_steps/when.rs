//! When steps for task lifecycle BDD scenarios.

use super::world::AgendaWorld;
use agenda::controller::ActionOutcome;
use agenda::view::{PriorityFilter, SortOrder};
use chrono::TimeDelta;
use rstest_bdd_macros::when;

#[when(r#"the user adds "{activity}" at "{schedule}" with priority "{priority}""#)]
fn user_adds(
    world: &mut AgendaWorld,
    activity: String,
    schedule: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let form = world.controller.form_mut();
    form.set_activity(activity);
    form.set_schedule(schedule);
    form.set_priority(priority);

    let result = world.controller.submit();
    if let Ok(ref view) = result {
        world.last_view = Some(view.clone());
    }
    world.last_submit = Some(result);
    Ok(())
}

#[when("the user submits the form without an activity")]
fn submits_without_activity(world: &mut AgendaWorld) {
    let form = world.controller.form_mut();
    form.set_activity("");
    form.set_schedule("2024-06-11T09:00");
    form.set_priority("high");
    world.last_submit = Some(world.controller.submit());
}

#[when(r#"the user completes "{activity}""#)]
fn user_completes(world: &mut AgendaWorld, activity: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&activity)?;
    let outcome = world.controller.complete(id);
    eyre::ensure!(
        matches!(outcome, ActionOutcome::Applied(_)),
        "completing {activity:?} returned {outcome:?}"
    );
    world.last_view = None;
    Ok(())
}

#[when(r#"the user restores "{activity}""#)]
fn user_restores(world: &mut AgendaWorld, activity: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&activity)?;
    let outcome = world.controller.restore(id);
    eyre::ensure!(
        matches!(outcome, ActionOutcome::Applied(_)),
        "restoring {activity:?} returned {outcome:?}"
    );
    world.last_view = None;
    Ok(())
}

#[when(r#"the user deletes "{activity}""#)]
fn user_deletes(world: &mut AgendaWorld, activity: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&activity)?;
    world.controller.delete(id);
    world.last_view = None;
    Ok(())
}

#[when(r#"the user sorts by "{order}""#)]
fn user_sorts(world: &mut AgendaWorld, order: String) -> Result<(), eyre::Report> {
    let sort = SortOrder::try_from(order.as_str()).map_err(|err| eyre::eyre!("{err}"))?;
    world.last_view = Some(world.controller.set_sort(sort));
    Ok(())
}

#[when(r#"the user filters by "{filter}""#)]
fn user_filters(world: &mut AgendaWorld, filter: String) -> Result<(), eyre::Report> {
    let selected =
        PriorityFilter::try_from(filter.as_str()).map_err(|err| eyre::eyre!("{err}"))?;
    world.last_view = Some(world.controller.set_filter(selected));
    Ok(())
}

#[when("more than an hour passes")]
fn an_hour_passes(world: &mut AgendaWorld) {
    world.clock.advance(TimeDelta::milliseconds(3_600_001));
}

#[when("the agenda is reloaded")]
fn agenda_reloaded(world: &mut AgendaWorld) {
    world.reload();
}
