//! Repository port for projects and their tasks.

use crate::directory::domain::Department;
use crate::error::ErrorKind;
use crate::postgres::StorageFailure;
use crate::project::domain::{Project, ProjectId, ProjectLaunch, Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project and task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a project together with all of its tasks.
    ///
    /// Either the project and every task become visible, or nothing does.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] or
    /// [`ProjectRepositoryError::DuplicateTask`] when an identifier already
    /// exists.
    async fn store(&self, launch: &ProjectLaunch) -> ProjectRepositoryResult<()>;

    /// Finds a project by identifier.
    async fn find_project(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns every project, newest first.
    async fn list_projects(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Finds a task by identifier.
    async fn find_task(&self, id: TaskId) -> ProjectRepositoryResult<Option<Task>>;

    /// Returns a project's tasks ordered by step position.
    async fn tasks_for_project(&self, id: ProjectId) -> ProjectRepositoryResult<Vec<Task>>;

    /// Returns every task assigned to any of `departments`, in no particular
    /// order.
    async fn tasks_for_departments(
        &self,
        departments: &[Department],
    ) -> ProjectRepositoryResult<Vec<Task>>;

    /// Persists `task` if the stored status still equals `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Conflict`] when another writer got
    /// there first and [`ProjectRepositoryError::TaskNotFound`] when the
    /// task does not exist.
    async fn update_task_status(
        &self,
        task: &Task,
        expected: TaskStatus,
    ) -> ProjectRepositoryResult<()>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The stored status changed since the task was read.
    #[error("task {task_id} was modified concurrently: expected {expected}, found {actual}")]
    Conflict {
        /// Task that could not be updated.
        task_id: TaskId,
        /// Status the writer read.
        expected: TaskStatus,
        /// Status found at write time.
        actual: TaskStatus,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskNotFound(_) => ErrorKind::NotFound,
            Self::DuplicateProject(_)
            | Self::DuplicateTask(_)
            | Self::Conflict { .. }
            | Self::Persistence(_) => ErrorKind::Persistence,
        }
    }
}

impl StorageFailure for ProjectRepositoryError {
    fn from_storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}
