//! Project instantiation from a template.

use super::{Project, ProjectDomainError, ProjectName, Task, schedule_due_dates};
use crate::directory::domain::ActorId;
use crate::template::domain::{Step, Template};
use chrono::NaiveDate;
use mockable::Clock;

/// A new project together with the tasks materialised for it.
///
/// The pair is persisted as one unit; readers never see the project without
/// its full task set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLaunch {
    project: Project,
    tasks: Vec<Task>,
}

impl ProjectLaunch {
    /// Schedules `template` from `start_date` and creates one pending task
    /// per step, in step order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ScheduleOverflow`] when a due date is
    /// out of range.
    pub fn from_template(
        template: &Template,
        name: ProjectName,
        start_date: NaiveDate,
        created_by: ActorId,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let due_dates =
            schedule_due_dates(start_date, template.steps().iter().map(Step::duration))?;
        let project = Project::new(name, template.id(), start_date, created_by, clock);
        let tasks = template
            .steps()
            .iter()
            .zip(due_dates)
            .map(|(step, due_date)| Task::from_step(project.id(), step, due_date, clock))
            .collect();
        Ok(Self { project, tasks })
    }

    /// Returns the project record.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the tasks ordered by step position.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn task_count(&self) -> u32 {
        u32::try_from(self.tasks.len()).unwrap_or(u32::MAX)
    }

    /// Splits the launch into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Project, Vec<Task>) {
        (self.project, self.tasks)
    }
}
