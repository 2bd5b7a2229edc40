//! Read-side projections over projects and tasks.

use super::{Project, ProjectName, Task};
use serde::{Deserialize, Serialize};

/// A task as shown in a personal task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    /// The task itself.
    pub task: Task,
    /// Name of the owning project.
    pub project_name: ProjectName,
    /// Whether an earlier step of the project is still unfinished.
    pub locked: bool,
}

/// A project with all of its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOverview {
    /// The project record.
    pub project: Project,
    /// Tasks ordered by step position.
    pub tasks: Vec<Task>,
}

impl ProjectOverview {
    /// Returns the number of tasks that are done.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status().is_terminal())
            .count()
    }

    /// Returns `true` when every task is done.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tasks.iter().all(|task| task.status().is_terminal())
    }
}
