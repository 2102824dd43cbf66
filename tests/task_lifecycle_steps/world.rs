//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use agenda::{
    cache::adapters::InMemoryStore,
    clock::ManualClock,
    config::AgendaConfig,
    controller::{
        InteractionController, SubmitError, View,
        adapters::NotificationLog,
        ports::ConfirmationPrompt,
    },
    task::{domain::TaskId, services::TaskRepository},
};
use chrono::{TimeZone, Utc};
use rstest::fixture;

/// Prompt whose answer the scenario can change between steps.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswer(Arc<AtomicBool>);

impl ScriptedAnswer {
    /// Sets the answer given to every following prompt.
    pub fn answer(&self, yes: bool) {
        self.0.store(yes, Ordering::SeqCst);
    }
}

impl ConfirmationPrompt for ScriptedAnswer {
    fn confirm(&self, _question: &str) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Controller type used by the BDD world.
pub type TestController =
    InteractionController<InMemoryStore, ManualClock, ScriptedAnswer, NotificationLog>;

/// Scenario world for task lifecycle behaviour tests.
pub struct AgendaWorld {
    pub store: InMemoryStore,
    pub clock: ManualClock,
    pub answer: ScriptedAnswer,
    pub notifications: NotificationLog,
    pub controller: TestController,
    pub last_view: Option<View>,
    pub last_submit: Option<Result<View, SubmitError>>,
}

impl AgendaWorld {
    /// Creates a world with an empty store and a fixed clock.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let clock = ManualClock::new(
            Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0)
                .single()
                .unwrap_or_default(),
        );
        let answer = ScriptedAnswer::default();
        answer.answer(true);
        let notifications = NotificationLog::new();
        let controller = build_controller(&store, &clock, &answer, &notifications);

        Self {
            store,
            clock,
            answer,
            notifications,
            controller,
            last_view: None,
            last_submit: None,
        }
    }

    /// Rebuilds the controller from whatever the store still holds.
    pub fn reload(&mut self) {
        self.controller =
            build_controller(&self.store, &self.clock, &self.answer, &self.notifications);
        self.last_view = None;
    }

    /// Returns the current view, preferring the one produced by the last
    /// step.
    #[must_use]
    pub fn view(&self) -> View {
        self.last_view
            .clone()
            .unwrap_or_else(|| self.controller.view())
    }

    /// Finds a task by activity in either collection.
    pub fn task_id(&self, activity: &str) -> Result<TaskId, eyre::Report> {
        let repository = self.controller.repository();
        repository
            .active()
            .iter()
            .chain(repository.completed())
            .find(|task| task.activity() == activity)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task named {activity:?} in scenario world"))
    }
}

impl Default for AgendaWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn build_controller(
    store: &InMemoryStore,
    clock: &ManualClock,
    answer: &ScriptedAnswer,
    notifications: &NotificationLog,
) -> TestController {
    let config = AgendaConfig::default();
    let repository = TaskRepository::from_config(store.clone(), Arc::new(clock.clone()), &config);
    InteractionController::new(repository, answer.clone(), notifications.clone(), &config)
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AgendaWorld {
    AgendaWorld::default()
}
