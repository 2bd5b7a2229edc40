//! Read-side queries over projects and personal task lists.

use crate::config::EngineConfig;
use crate::directory::{
    domain::{ActorId, Department, DirectoryDomainError},
    ports::{Directory, DirectoryError},
};
use crate::error::ErrorKind;
use crate::project::{
    domain::{
        Project, ProjectId, ProjectOverview, Task, TaskId, TaskView, VisibilityPolicy,
        blocking_task,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for workflow queries.
#[derive(Debug, Error)]
pub enum WorkflowQueryError {
    /// A department or user identifier was invalid.
    #[error(transparent)]
    Identity(#[from] DirectoryDomainError),
    /// The directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// A stored task references a project that cannot be loaded.
    #[error("task {0} belongs to a missing project")]
    OrphanedTask(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

impl WorkflowQueryError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Identity(_) => ErrorKind::Validation,
            Self::Directory(err) => err.kind(),
            Self::ProjectNotFound(_) => ErrorKind::NotFound,
            Self::OrphanedTask(_) => ErrorKind::Persistence,
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for workflow queries.
pub type WorkflowQueryResult<T> = Result<T, WorkflowQueryError>;

/// Project listings and personal task lists.
#[derive(Clone)]
pub struct WorkflowQueryService<P, D>
where
    P: ProjectRepository,
    D: Directory,
{
    projects: Arc<P>,
    directory: Arc<D>,
    visibility: VisibilityPolicy,
}

impl<P, D> WorkflowQueryService<P, D>
where
    P: ProjectRepository,
    D: Directory,
{
    /// Creates a query service using the backlog policy.
    #[must_use]
    pub const fn new(projects: Arc<P>, directory: Arc<D>) -> Self {
        Self {
            projects,
            directory,
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

    /// Lists every project with its tasks, newest project first.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowQueryError::Repository`] when storage fails.
    pub async fn list_projects(&self) -> WorkflowQueryResult<Vec<ProjectOverview>> {
        let mut overviews = Vec::new();
        for project in self.projects.list_projects().await? {
            let tasks = self.projects.tasks_for_project(project.id()).await?;
            overviews.push(ProjectOverview { project, tasks });
        }
        Ok(overviews)
    }

    /// Returns one project with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowQueryError::ProjectNotFound`] when the project does
    /// not exist.
    pub async fn get_project(&self, id: ProjectId) -> WorkflowQueryResult<ProjectOverview> {
        let project = self
            .projects
            .find_project(id)
            .await?
            .ok_or(WorkflowQueryError::ProjectNotFound(id))?;
        let tasks = self.projects.tasks_for_project(id).await?;
        Ok(ProjectOverview { project, tasks })
    }

    /// Lists the tasks assigned to `department`, earliest due date first.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowQueryError::Identity`] for a blank department and
    /// [`WorkflowQueryError::Repository`] when storage fails.
    pub async fn list_tasks_for_department(
        &self,
        department: &str,
    ) -> WorkflowQueryResult<Vec<TaskView>> {
        let parsed = Department::new(department)?;
        self.task_views(&[parsed]).await
    }

    /// Lists the tasks of every department `user` belongs to, earliest due
    /// date first.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowQueryError::Directory`] when the user is unknown or
    /// the directory is unavailable.
    pub async fn list_tasks_for_user(&self, user: &str) -> WorkflowQueryResult<Vec<TaskView>> {
        let actor = ActorId::new(user)?;
        let departments = self.directory.departments_of(&actor).await?;
        if departments.is_empty() {
            return Ok(Vec::new());
        }
        self.task_views(&departments).await
    }

    /// Lists known departments, sorted and without duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowQueryError::Directory`] when the directory is
    /// unavailable.
    pub async fn list_departments(&self) -> WorkflowQueryResult<Vec<Department>> {
        let departments = self.directory.departments().await?;
        Ok(departments
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    async fn task_views(&self, departments: &[Department]) -> WorkflowQueryResult<Vec<TaskView>> {
        let tasks = self.projects.tasks_for_departments(departments).await?;
        let mut contexts: HashMap<ProjectId, (Project, Vec<Task>)> = HashMap::new();
        let mut views = Vec::with_capacity(tasks.len());

        for task in tasks {
            let (project, siblings) = match contexts.entry(task.project_id()) {
                Entry::Occupied(slot) => slot.into_mut(),
                Entry::Vacant(slot) => {
                    let project = self
                        .projects
                        .find_project(task.project_id())
                        .await?
                        .ok_or(WorkflowQueryError::OrphanedTask(task.id()))?;
                    let siblings = self.projects.tasks_for_project(task.project_id()).await?;
                    slot.insert((project, siblings))
                }
            };
            let locked = blocking_task(&task, siblings).is_some();
            if locked && self.visibility.gates_steps() {
                continue;
            }
            views.push(TaskView {
                project_name: project.name().clone(),
                locked,
                task,
            });
        }

        views.sort_by(|left, right| {
            left.task
                .due_date()
                .cmp(&right.task.due_date())
                .then_with(|| left.project_name.as_str().cmp(right.project_name.as_str()))
                .then_with(|| left.task.position().cmp(&right.task.position()))
        });
        Ok(views)
    }
}
