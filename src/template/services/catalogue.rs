//! Service layer for creating, listing, and reading templates.

use crate::activity::{
    domain::{ActivityEntry, ActivityEvent},
    ports::ActivityLog,
    services::record_best_effort,
};
use crate::directory::domain::{ActorId, DirectoryDomainError};
use crate::error::ErrorKind;
use crate::template::{
    domain::{
        StepDefinition, StepPosition, Template, TemplateDomainError, TemplateId, TemplateName,
        TemplateSummary,
    },
    ports::{TemplateRepository, TemplateRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Raw step fields as supplied by an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInput {
    what: String,
    who: String,
    how: String,
    when_days: i64,
}

impl StepInput {
    /// Creates a step input. Validation happens when the template is created.
    #[must_use]
    pub fn new(
        what: impl Into<String>,
        who: impl Into<String>,
        how: impl Into<String>,
        when_days: i64,
    ) -> Self {
        Self {
            what: what.into(),
            who: who.into(),
            how: how.into(),
            when_days,
        }
    }
}

/// Request payload for creating a template.
///
/// Step order is list order; positions are assigned 1..N on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTemplateRequest {
    name: String,
    steps: Vec<StepInput>,
    actor: String,
}

impl CreateTemplateRequest {
    /// Creates a request with no steps.
    #[must_use]
    pub fn new(name: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            actor: actor.into(),
        }
    }

    /// Appends one step.
    #[must_use]
    pub fn with_step(mut self, step: StepInput) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends several steps in order.
    #[must_use]
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = StepInput>) -> Self {
        self.steps.extend(steps);
        self
    }
}

/// Service-level errors for template operations.
#[derive(Debug, Error)]
pub enum TemplateCatalogueError {
    /// Template validation failed.
    #[error(transparent)]
    Domain(#[from] TemplateDomainError),
    /// The actor identifier was invalid.
    #[error(transparent)]
    Actor(#[from] DirectoryDomainError),
    /// The template does not exist.
    #[error("template not found: {0}")]
    NotFound(TemplateId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TemplateRepositoryError),
}

impl TemplateCatalogueError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) | Self::Actor(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for template service operations.
pub type TemplateCatalogueResult<T> = Result<T, TemplateCatalogueError>;

/// Template authoring and lookup service.
#[derive(Clone)]
pub struct TemplateCatalogueService<R, A, C>
where
    R: TemplateRepository,
    A: ActivityLog,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    activity: Arc<A>,
    clock: Arc<C>,
}

impl<R, A, C> TemplateCatalogueService<R, A, C>
where
    R: TemplateRepository,
    A: ActivityLog,
    C: Clock + Send + Sync,
{
    /// Creates a new template service.
    #[must_use]
    pub const fn new(repository: Arc<R>, activity: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            repository,
            activity,
            clock,
        }
    }

    /// Validates and stores a template, then records `TEMPLATE_CREATED`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateCatalogueError::Domain`] or
    /// [`TemplateCatalogueError::Actor`] for invalid input and
    /// [`TemplateCatalogueError::Repository`] when storage fails. Nothing is
    /// stored or logged on failure.
    pub async fn create_template(
        &self,
        request: CreateTemplateRequest,
    ) -> TemplateCatalogueResult<Template> {
        let actor = ActorId::new(&request.actor)?;
        let name = TemplateName::new(&request.name)?;
        let definitions = validate_steps(request.steps)?;
        let template = Template::new(name, definitions, actor.clone(), &*self.clock)?;

        self.repository.store(&template).await?;
        info!(
            template_id = %template.id(),
            steps = template.step_count(),
            actor = %actor,
            "template created"
        );

        let event = ActivityEvent::TemplateCreated {
            template_id: template.id().into_inner(),
            template_name: template.name().as_str().to_owned(),
            step_count: template.step_count(),
        };
        let entry = ActivityEntry::new(event, actor, &*self.clock);
        record_best_effort(&*self.activity, &entry).await;
        Ok(template)
    }

    /// Lists template summaries, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateCatalogueError::Repository`] when storage fails.
    pub async fn list_templates(&self) -> TemplateCatalogueResult<Vec<TemplateSummary>> {
        let templates = self.repository.list().await?;
        Ok(templates.iter().map(Template::summary).collect())
    }

    /// Returns a template with its ordered steps.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateCatalogueError::NotFound`] when the template does
    /// not exist.
    pub async fn get_template(&self, id: TemplateId) -> TemplateCatalogueResult<Template> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TemplateCatalogueError::NotFound(id))
    }
}

fn validate_steps(steps: Vec<StepInput>) -> Result<Vec<StepDefinition>, TemplateDomainError> {
    if steps.is_empty() {
        return Err(TemplateDomainError::EmptySteps);
    }
    steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            let position = StepPosition::from_index(index)?;
            StepDefinition::new(step.what, step.who, step.how, step.when_days).map_err(|reason| {
                TemplateDomainError::InvalidStep {
                    position: position.value(),
                    reason,
                }
            })
        })
        .collect()
}
