//! Service that moves tasks through their lifecycle.

use crate::activity::{
    domain::{ActivityEntry, ActivityEvent},
    ports::ActivityLog,
    services::record_best_effort,
};
use crate::config::EngineConfig;
use crate::directory::domain::{ActorId, DirectoryDomainError};
use crate::error::ErrorKind;
use crate::project::{
    domain::{
        ParseTaskStatusError, ProjectDomainError, Task, TaskId, TaskStatus, VisibilityPolicy,
        blocking_task,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for a task status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskStatusRequest {
    task_id: TaskId,
    status: String,
    actor: String,
}

impl UpdateTaskStatusRequest {
    /// Creates a request. `status` accepts display (`"In Progress"`) and
    /// storage (`"in_progress"`) forms.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
            actor: actor.into(),
        }
    }

    /// Creates a request for an already typed status.
    #[must_use]
    pub fn for_status(task_id: TaskId, status: TaskStatus, actor: impl Into<String>) -> Self {
        Self::new(task_id, status.as_str(), actor)
    }
}

/// Service-level errors for task status changes.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The transition was refused.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// The requested status is not recognised.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The actor identifier was invalid.
    #[error(transparent)]
    Actor(#[from] DirectoryDomainError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

impl TaskLifecycleError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::InvalidStatus(_) | Self::Actor(_) => ErrorKind::Validation,
            Self::TaskNotFound(_) => ErrorKind::NotFound,
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for task lifecycle operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Applies status changes to tasks.
///
/// Same-state requests are refused as illegal transitions, so every
/// accepted call changes the stored status and logs exactly one
/// `TASK_UPDATED` entry.
#[derive(Clone)]
pub struct TaskLifecycleService<P, A, C>
where
    P: ProjectRepository,
    A: ActivityLog,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    activity: Arc<A>,
    clock: Arc<C>,
    visibility: VisibilityPolicy,
}

impl<P, A, C> TaskLifecycleService<P, A, C>
where
    P: ProjectRepository,
    A: ActivityLog,
    C: Clock + Send + Sync,
{
    /// Creates a lifecycle service using the backlog policy.
    #[must_use]
    pub const fn new(projects: Arc<P>, activity: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            projects,
            activity,
            clock,
            visibility: VisibilityPolicy::Backlog,
        }
    }

    /// Sets the visibility policy.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: VisibilityPolicy) -> Self {
        self.visibility = visibility;
        self
    }

    /// Applies the policy from `config`.
    #[must_use]
    pub const fn with_config(self, config: &EngineConfig) -> Self {
        self.with_visibility(config.visibility)
    }

    /// Changes a task's status and records `TASK_UPDATED`.
    ///
    /// Entering `Done` stamps the completion time once.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for an unknown task,
    /// [`TaskLifecycleError::Domain`] for a refused transition or a locked
    /// step, and [`TaskLifecycleError::Repository`] when storage fails or a
    /// concurrent writer changed the task first. Nothing is logged on
    /// failure.
    pub async fn update_status(
        &self,
        request: UpdateTaskStatusRequest,
    ) -> TaskLifecycleResult<Task> {
        let actor = ActorId::new(request.actor)?;
        let target = TaskStatus::try_from(request.status.as_str())?;
        let mut task = self
            .projects
            .find_task(request.task_id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(request.task_id))?;

        let expected = task.status();
        task.transition_to(target, &*self.clock)?;
        if self.visibility.gates_steps() {
            self.ensure_unlocked(&task).await?;
        }

        self.projects
            .update_task_status(&task, expected)
            .await
            .map_err(|err| resolve_conflict(err, target))?;
        info!(
            task_id = %task.id(),
            project_id = %task.project_id(),
            from = expected.as_str(),
            to = target.as_str(),
            actor = %actor,
            "task status changed"
        );

        let event = ActivityEvent::TaskUpdated {
            task_id: task.id().into_inner(),
            project_id: task.project_id().into_inner(),
            step_position: task.position().value(),
            description: task.description().to_owned(),
            status: target.display_name().to_owned(),
        };
        let entry = ActivityEntry::new(event, actor, &*self.clock);
        record_best_effort(&*self.activity, &entry).await;
        Ok(task)
    }

    async fn ensure_unlocked(&self, task: &Task) -> TaskLifecycleResult<()> {
        let siblings = self.projects.tasks_for_project(task.project_id()).await?;
        let Some(blocker) = blocking_task(task, &siblings) else {
            return Ok(());
        };
        debug!(
            task_id = %task.id(),
            blocked_by = %blocker.id(),
            "status change refused for locked step"
        );
        Err(ProjectDomainError::TaskLocked {
            task_id: task.id(),
            position: task.position().value(),
            blocked_by: blocker.position().value(),
        }
        .into())
    }
}

/// Reports a lost race as the transition the winner made illegal, when it
/// did; otherwise the conflict stays retryable.
fn resolve_conflict(err: ProjectRepositoryError, target: TaskStatus) -> TaskLifecycleError {
    match err {
        ProjectRepositoryError::Conflict {
            task_id, actual, ..
        } if !actual.can_transition_to(target) => ProjectDomainError::IllegalTransition {
            task_id,
            from: actual,
            to: target,
        }
        .into(),
        ProjectRepositoryError::TaskNotFound(task_id) => TaskLifecycleError::TaskNotFound(task_id),
        other => other.into(),
    }
}
