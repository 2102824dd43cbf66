//! Then steps for task lifecycle BDD scenarios.

use super::world::AgendaWorld;
use agenda::{
    controller::SubmitError,
    task::domain::{Priority, TaskField},
    view::Tab,
};
use rstest_bdd_macros::then;

#[then(r#"the active list shows "{expected}""#)]
fn active_list_shows(world: &AgendaWorld, expected: String) -> Result<(), eyre::Report> {
    let view = world.view();
    let shown = view
        .tasks()
        .iter()
        .map(|task| task.activity())
        .collect::<Vec<_>>()
        .join(", ");
    eyre::ensure!(shown == expected, "expected [{expected}], found [{shown}]");
    Ok(())
}

#[then("the active list is empty")]
fn active_list_is_empty(world: &AgendaWorld) -> Result<(), eyre::Report> {
    let view = world.view();
    eyre::ensure!(
        view.tasks().is_empty() && view.counts.active == 0,
        "expected no active tasks, found {}",
        view.counts.active
    );
    Ok(())
}

#[then(r#"the "{priority}" count is {count:u64}"#)]
fn priority_count_is(
    world: &AgendaWorld,
    priority: String,
    count: u64,
) -> Result<(), eyre::Report> {
    let expected = usize::try_from(count)?;
    let tier = Priority::try_from(priority.as_str()).map_err(|err| eyre::eyre!("{err}"))?;
    let actual = world.view().counts.for_priority(tier);
    eyre::ensure!(actual == expected, "expected {expected} {tier} tasks, found {actual}");
    Ok(())
}

#[then(r#"the history shows "{activity}" with a completion date"#)]
fn history_shows(world: &mut AgendaWorld, activity: String) -> Result<(), eyre::Report> {
    let view = world.controller.switch_tab(Tab::History);
    world.controller.switch_tab(Tab::Active);
    let history = view
        .history()
        .ok_or_else(|| eyre::eyre!("history tab did not produce a history listing"))?;
    let task = history
        .tasks
        .iter()
        .find(|task| task.activity() == activity)
        .ok_or_else(|| eyre::eyre!("{activity:?} missing from history"))?;
    eyre::ensure!(task.completed_date().is_some(), "completion date not set");
    eyre::ensure!(history.this_week == history.total, "completion should be recent");
    Ok(())
}

#[then("the history is empty")]
fn history_is_empty(world: &AgendaWorld) -> Result<(), eyre::Report> {
    let completed = world.controller.repository().completed().len();
    eyre::ensure!(completed == 0, "expected empty history, found {completed}");
    Ok(())
}

#[then(r#"the submission fails on field "{field}""#)]
fn submission_fails_on(world: &AgendaWorld, field: String) -> Result<(), eyre::Report> {
    let result = world
        .last_submit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result"))?;
    let Err(SubmitError::Invalid(error)) = result else {
        return Err(eyre::eyre!("expected a validation failure, got {result:?}"));
    };
    let rejected = error
        .errors()
        .iter()
        .map(|err| err.field)
        .find(|rejected| rejected.as_str() == field);
    eyre::ensure!(
        rejected.is_some(),
        "field {field:?} was not rejected: {error}"
    );
    eyre::ensure!(
        error.for_field(TaskField::Schedule).is_none(),
        "schedule should have been accepted"
    );
    Ok(())
}
