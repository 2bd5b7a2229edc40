//! Task entity and its state machine.

use super::{ProjectDomainError, ProjectId, TaskId, TaskStatus};
use crate::directory::domain::Department;
use crate::template::domain::{Step, StepPosition};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One project's instance of a template step.
///
/// Description, department, and method are copied from the step when the
/// project starts; the task never reads its template again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    position: StepPosition,
    description: String,
    department: Department,
    method: String,
    due_date: NaiveDate,
    completed_at: Option<DateTime<Utc>>,
    status: TaskStatus,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Step position the task was generated from.
    pub position: StepPosition,
    /// Copied step description.
    pub description: String,
    /// Copied responsible department.
    pub department: Department,
    /// Copied step method.
    pub method: String,
    /// Planned due date.
    pub due_date: NaiveDate,
    /// Completion timestamp, present only when done.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Materialises a pending task for `step`.
    #[must_use]
    pub fn from_step(
        project_id: ProjectId,
        step: &Step,
        due_date: NaiveDate,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            project_id,
            position: step.position(),
            description: step.description().to_owned(),
            department: step.department().clone(),
            method: step.method().to_owned(),
            due_date,
            completed_at: None,
            status: TaskStatus::Pending,
            updated_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InconsistentCompletion`] when a done
    /// task lacks a completion time or an unfinished task has one.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, ProjectDomainError> {
        let is_done = data.status == TaskStatus::Done;
        if is_done != data.completed_at.is_some() {
            return Err(ProjectDomainError::InconsistentCompletion(data.id));
        }
        Ok(Self {
            id: data.id,
            project_id: data.project_id,
            position: data.position,
            description: data.description,
            department: data.department,
            method: data.method,
            due_date: data.due_date,
            completed_at: data.completed_at,
            status: data.status,
            updated_at: data.updated_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the step position.
    #[must_use]
    pub const fn position(&self) -> StepPosition {
        self.position
    }

    /// Returns what the task is.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the responsible department.
    #[must_use]
    pub const fn department(&self) -> &Department {
        &self.department
    }

    /// Returns how the task is carried out.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the planned due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns when the task was completed, if it is done.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to `target`.
    ///
    /// Entering [`TaskStatus::Done`] stamps the completion time. The stamp is
    /// written once and never cleared, since `Done` is terminal.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::IllegalTransition`] when the transition
    /// table forbids the change; the task is left untouched.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(ProjectDomainError::IllegalTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        let now = clock.utc();
        if target == TaskStatus::Done && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
        self.status = target;
        self.updated_at = now;
        Ok(())
    }
}
