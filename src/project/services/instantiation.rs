//! Service that starts projects from templates.

use crate::activity::{
    domain::{ActivityEntry, ActivityEvent},
    ports::ActivityLog,
    services::record_best_effort,
};
use crate::directory::domain::{ActorId, DirectoryDomainError};
use crate::error::ErrorKind;
use crate::project::{
    domain::{ProjectDomainError, ProjectLaunch, ProjectName, parse_start_date},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::template::{
    domain::TemplateId,
    ports::{TemplateRepository, TemplateRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for starting a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartProjectRequest {
    template_id: TemplateId,
    name: String,
    start_date: NaiveDate,
    actor: String,
}

impl StartProjectRequest {
    /// Creates a request with an already parsed start date.
    #[must_use]
    pub fn new(
        template_id: TemplateId,
        name: impl Into<String>,
        start_date: NaiveDate,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            template_id,
            name: name.into(),
            start_date,
            actor: actor.into(),
        }
    }

    /// Creates a request from a `YYYY-MM-DD` start date.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidStartDate`] when the date does
    /// not parse.
    pub fn parse(
        template_id: TemplateId,
        name: impl Into<String>,
        start_date: &str,
        actor: impl Into<String>,
    ) -> Result<Self, ProjectDomainError> {
        let parsed = parse_start_date(start_date)?;
        Ok(Self::new(template_id, name, parsed, actor))
    }
}

/// Service-level errors for project instantiation.
#[derive(Debug, Error)]
pub enum InstantiationError {
    /// Project validation or scheduling failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// The actor identifier was invalid.
    #[error(transparent)]
    Actor(#[from] DirectoryDomainError),
    /// The template does not exist.
    #[error("template not found: {0}")]
    TemplateNotFound(TemplateId),
    /// Loading the template failed.
    #[error(transparent)]
    Template(#[from] TemplateRepositoryError),
    /// Storing the project failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

impl InstantiationError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::Actor(_) => ErrorKind::Validation,
            Self::TemplateNotFound(_) => ErrorKind::NotFound,
            Self::Template(err) => err.kind(),
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for instantiation operations.
pub type InstantiationResult<T> = Result<T, InstantiationError>;

/// Starts projects from templates.
#[derive(Clone)]
pub struct ProjectInstantiationService<T, P, A, C>
where
    T: TemplateRepository,
    P: ProjectRepository,
    A: ActivityLog,
    C: Clock + Send + Sync,
{
    templates: Arc<T>,
    projects: Arc<P>,
    activity: Arc<A>,
    clock: Arc<C>,
}

impl<T, P, A, C> ProjectInstantiationService<T, P, A, C>
where
    T: TemplateRepository,
    P: ProjectRepository,
    A: ActivityLog,
    C: Clock + Send + Sync,
{
    /// Creates a new instantiation service.
    #[must_use]
    pub const fn new(
        templates: Arc<T>,
        projects: Arc<P>,
        activity: Arc<A>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            templates,
            projects,
            activity,
            clock,
        }
    }

    /// Starts a project: one pending task per template step, due dates
    /// scheduled from the start date, then a `PROJECT_CREATED` entry.
    ///
    /// # Errors
    ///
    /// Returns [`InstantiationError::TemplateNotFound`] for an unknown
    /// template, [`InstantiationError::Domain`] or
    /// [`InstantiationError::Actor`] for invalid input, and a repository
    /// error when storage fails. Nothing is stored or logged on failure.
    pub async fn start_project(
        &self,
        request: StartProjectRequest,
    ) -> InstantiationResult<ProjectLaunch> {
        let name = ProjectName::new(request.name)?;
        let actor = ActorId::new(request.actor)?;
        let template = self
            .templates
            .find_by_id(request.template_id)
            .await?
            .ok_or(InstantiationError::TemplateNotFound(request.template_id))?;

        let launch = ProjectLaunch::from_template(
            &template,
            name,
            request.start_date,
            actor.clone(),
            &*self.clock,
        )?;
        self.projects.store(&launch).await?;
        info!(
            project_id = %launch.project().id(),
            template_id = %template.id(),
            tasks = launch.task_count(),
            actor = %actor,
            "project started"
        );

        let event = ActivityEvent::ProjectCreated {
            project_id: launch.project().id().into_inner(),
            project_name: launch.project().name().as_str().to_owned(),
            template_id: template.id().into_inner(),
            task_count: launch.task_count(),
        };
        let entry = ActivityEntry::new(event, actor, &*self.clock);
        record_best_effort(&*self.activity, &entry).await;
        Ok(launch)
    }
}
