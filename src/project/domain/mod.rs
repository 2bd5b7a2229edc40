//! Domain model for projects and their tasks.

mod error;
mod ids;
mod launch;
mod project;
mod schedule;
mod status;
mod task;
mod views;
mod visibility;

pub use error::{ParseTaskStatusError, ProjectDomainError};
pub use ids::{ProjectId, TaskId};
pub use launch::ProjectLaunch;
pub use project::{PersistedProjectData, Project, ProjectName, parse_start_date};
pub use schedule::schedule_due_dates;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
pub use views::{ProjectOverview, TaskView};
pub use visibility::{VisibilityPolicy, blocking_task};
