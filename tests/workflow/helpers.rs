//! Shared engine wiring for workflow integration tests.

use std::sync::Arc;

use fms::activity::{adapters::memory::InMemoryActivityLog, services::ActivityFeedService};
use fms::config::EngineConfig;
use fms::directory::{
    adapters::memory::InMemoryDirectory,
    domain::{ActorId, Department},
};
use fms::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{ProjectLaunch, Task},
    services::{
        ProjectInstantiationService, StartProjectRequest, TaskLifecycleService,
        WorkflowQueryService,
    },
};
use fms::template::{
    adapters::memory::InMemoryTemplateRepository,
    domain::Template,
    services::{CreateTemplateRequest, StepInput, TemplateCatalogueService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Template service wired to in-memory storage.
pub type Catalogue =
    TemplateCatalogueService<InMemoryTemplateRepository, InMemoryActivityLog, DefaultClock>;
/// Instantiation service wired to in-memory storage.
pub type Instantiation = ProjectInstantiationService<
    InMemoryTemplateRepository,
    InMemoryProjectRepository,
    InMemoryActivityLog,
    DefaultClock,
>;
/// Lifecycle service wired to in-memory storage.
pub type Lifecycle =
    TaskLifecycleService<InMemoryProjectRepository, InMemoryActivityLog, DefaultClock>;
/// Query service wired to in-memory storage.
pub type Queries = WorkflowQueryService<InMemoryProjectRepository, InMemoryDirectory>;

/// Every service of the engine sharing one set of in-memory stores.
pub struct Engine {
    pub catalogue: Catalogue,
    pub instantiation: Instantiation,
    pub lifecycle: Arc<Lifecycle>,
    pub queries: Queries,
    pub feed: ActivityFeedService<InMemoryActivityLog>,
    pub projects: Arc<InMemoryProjectRepository>,
    pub activity: Arc<InMemoryActivityLog>,
}

impl Engine {
    /// Wires the engine with `config` and a directory placing bob in HR,
    /// carol in Security, and dana in both.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory fixture is invalid.
    pub fn with_config(config: &EngineConfig) -> eyre::Result<Self> {
        let templates = Arc::new(InMemoryTemplateRepository::new());
        let projects = Arc::new(InMemoryProjectRepository::new());
        let activity = Arc::new(InMemoryActivityLog::new());
        let clock = Arc::new(DefaultClock);
        let directory = InMemoryDirectory::new()
            .with_member(ActorId::new("bob")?, Department::new("HR")?)?
            .with_member(ActorId::new("carol")?, Department::new("Security")?)?
            .with_member(ActorId::new("dana")?, Department::new("HR")?)?
            .with_member(ActorId::new("dana")?, Department::new("Security")?)?;

        Ok(Self {
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
            lifecycle: Arc::new(
                TaskLifecycleService::new(projects.clone(), activity.clone(), clock)
                    .with_config(config),
            ),
            queries: WorkflowQueryService::new(projects.clone(), Arc::new(directory))
                .with_config(config),
            feed: ActivityFeedService::from_config(activity.clone(), config),
            projects,
            activity,
        })
    }

    /// Creates the two-step onboarding template as alice.
    ///
    /// # Errors
    ///
    /// Returns an error if template creation fails.
    pub async fn onboarding(&self) -> eyre::Result<Template> {
        let request = CreateTemplateRequest::new("Onboarding", "alice")
            .with_step(StepInput::new("Collect docs", "HR", "Email", 2))
            .with_step(StepInput::new("Issue badge", "Security", "In person", 1));
        Ok(self.catalogue.create_template(request).await?)
    }

    /// Starts a project from `template` on 2024-01-01 as alice.
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be started.
    pub async fn start(&self, template: &Template, name: &str) -> eyre::Result<ProjectLaunch> {
        let request = StartProjectRequest::parse(template.id(), name, "2024-01-01", "alice")?;
        Ok(self.instantiation.start_project(request).await?)
    }
}

/// Provides an engine with the default configuration.
///
/// # Errors
///
/// Returns an error if the engine cannot be wired.
#[fixture]
pub fn engine() -> eyre::Result<Engine> {
    Engine::with_config(&EngineConfig::default())
}

/// Returns the task at `index` of a launch.
///
/// # Errors
///
/// Returns an error if the launch has fewer tasks.
pub fn task_at(launch: &ProjectLaunch, index: usize) -> eyre::Result<Task> {
    launch
        .tasks()
        .get(index)
        .cloned()
        .ok_or_else(|| eyre::eyre!("launch has no task at index {index}"))
}
