//! Error types for project and task validation.

use super::{TaskId, TaskStatus};
use crate::error::ErrorKind;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by project construction and the task state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The project name exceeds the stored length.
    #[error("project name is {0} characters, longer than 255")]
    ProjectNameTooLong(usize),

    /// The start date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid start date '{0}', expected YYYY-MM-DD")]
    InvalidStartDate(String),

    /// Nothing to schedule.
    #[error("cannot schedule an empty step list")]
    EmptySchedule,

    /// A due date fell outside the supported calendar range.
    #[error("due date {days} days after {start} is out of range")]
    ScheduleOverflow {
        /// Project start date.
        start: NaiveDate,
        /// Cumulative offset that overflowed.
        days: u64,
    },

    /// The requested status change is not in the transition table.
    #[error("illegal transition for task {task_id}: {from} -> {to}")]
    IllegalTransition {
        /// Task whose transition was refused.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// Step gating is on and an earlier step is not done.
    #[error("task {task_id} (step {position}) is locked until step {blocked_by} is done")]
    TaskLocked {
        /// Task whose update was refused.
        task_id: TaskId,
        /// Its step position.
        position: u32,
        /// Earliest unfinished step ahead of it.
        blocked_by: u32,
    },

    /// A stored task's completion time disagrees with its status.
    #[error("task {0} has a completion time inconsistent with its status")]
    InconsistentCompletion(TaskId),
}

impl ProjectDomainError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyProjectName
            | Self::ProjectNameTooLong(_)
            | Self::InvalidStartDate(_)
            | Self::EmptySchedule
            | Self::ScheduleOverflow { .. } => ErrorKind::Validation,
            Self::IllegalTransition { .. } | Self::TaskLocked { .. } => {
                ErrorKind::IllegalTransition
            }
            Self::InconsistentCompletion(_) => ErrorKind::Persistence,
        }
    }
}

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
