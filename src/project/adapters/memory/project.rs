//! Thread-safe in-memory project repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::domain::Department;
use crate::project::{
    domain::{Project, ProjectId, ProjectLaunch, Task, TaskId, TaskStatus},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// In-memory project repository.
///
/// Every write takes the single state lock, which gives launches their
/// all-or-nothing visibility and makes the status compare-and-set atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectId, Project>,
    project_order: Vec<ProjectId>,
    tasks: HashMap<TaskId, Task>,
    tasks_by_project: HashMap<ProjectId, Vec<TaskId>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn store(&self, launch: &ProjectLaunch) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let project_id = launch.project().id();
        if state.projects.contains_key(&project_id) {
            return Err(ProjectRepositoryError::DuplicateProject(project_id));
        }
        if let Some(existing) = launch
            .tasks()
            .iter()
            .find(|task| state.tasks.contains_key(&task.id()))
        {
            return Err(ProjectRepositoryError::DuplicateTask(existing.id()));
        }

        state.projects.insert(project_id, launch.project().clone());
        state.project_order.push(project_id);
        let task_ids = launch.tasks().iter().map(Task::id).collect();
        state.tasks_by_project.insert(project_id, task_ids);
        for task in launch.tasks() {
            state.tasks.insert(task.id(), task.clone());
        }
        Ok(())
    }

    async fn find_project(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn list_projects(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .project_order
            .iter()
            .rev()
            .filter_map(|id| state.projects.get(id).cloned())
            .collect())
    }

    async fn find_task(&self, id: TaskId) -> ProjectRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn tasks_for_project(&self, id: ProjectId) -> ProjectRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .tasks_by_project
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(|task_id| state.tasks.get(task_id).cloned())
            .collect();
        tasks.sort_by_key(Task::position);
        Ok(tasks)
    }

    async fn tasks_for_departments(
        &self,
        departments: &[Department],
    ) -> ProjectRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .values()
            .filter(|task| departments.contains(task.department()))
            .cloned()
            .collect())
    }

    async fn update_task_status(
        &self,
        task: &Task,
        expected: TaskStatus,
    ) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(ProjectRepositoryError::TaskNotFound(task.id()))?;
        if stored.status() != expected {
            return Err(ProjectRepositoryError::Conflict {
                task_id: task.id(),
                expected,
                actual: stored.status(),
            });
        }
        *stored = task.clone();
        Ok(())
    }
}
