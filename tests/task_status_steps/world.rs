//! Shared world state for task status BDD scenarios.

use std::sync::Arc;

use fms::activity::adapters::memory::InMemoryActivityLog;
use fms::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{ProjectLaunch, Task},
    services::{ProjectInstantiationService, TaskLifecycleError, TaskLifecycleService},
};
use fms::template::{
    adapters::memory::InMemoryTemplateRepository, domain::Template,
    services::TemplateCatalogueService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    pub catalogue:
        TemplateCatalogueService<InMemoryTemplateRepository, InMemoryActivityLog, DefaultClock>,
    pub instantiation: ProjectInstantiationService<
        InMemoryTemplateRepository,
        InMemoryProjectRepository,
        InMemoryActivityLog,
        DefaultClock,
    >,
    pub lifecycle:
        TaskLifecycleService<InMemoryProjectRepository, InMemoryActivityLog, DefaultClock>,
    pub projects: Arc<InMemoryProjectRepository>,
    pub activity: Arc<InMemoryActivityLog>,
    pub template: Option<Template>,
    pub launch: Option<ProjectLaunch>,
    pub last_update: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskStatusWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let templates = Arc::new(InMemoryTemplateRepository::new());
        let projects = Arc::new(InMemoryProjectRepository::new());
        let activity = Arc::new(InMemoryActivityLog::new());
        let clock = Arc::new(DefaultClock);

        Self {
            catalogue: TemplateCatalogueService::new(
                templates.clone(),
                activity.clone(),
                clock.clone(),
            ),
            instantiation: ProjectInstantiationService::new(
                templates,
                projects.clone(),
                activity.clone(),
                clock.clone(),
            ),
            lifecycle: TaskLifecycleService::new(projects.clone(), activity.clone(), clock),
            projects,
            activity,
            template: None,
            launch: None,
            last_update: None,
        }
    }

    /// Returns the task generated for step `position` of the started project.
    ///
    /// # Errors
    ///
    /// Returns an error if no project was started or the step does not exist.
    pub fn task_at_step(&self, position: u32) -> eyre::Result<&Task> {
        self.launch
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no project started in scenario world"))?
            .tasks()
            .iter()
            .find(|task| task.position().value() == position)
            .ok_or_else(|| eyre::eyre!("project has no step {position}"))
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
