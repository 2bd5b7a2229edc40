//! Step gating and task visibility.
//!
//! Tasks are created eagerly, so "locked" is derived rather than stored: a
//! task is locked while any earlier step of the same project is not done.

use super::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Which tasks appear in personal task lists and accept updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityPolicy {
    /// A department sees its whole backlog; locks are reported, not enforced.
    #[default]
    Backlog,
    /// Locked tasks are hidden and refuse status changes.
    StepGated,
}

impl VisibilityPolicy {
    /// Returns `true` when locks are enforced.
    #[must_use]
    pub const fn gates_steps(self) -> bool {
        matches!(self, Self::StepGated)
    }
}

/// Returns the earliest unfinished task ahead of `task` in its project.
///
/// `siblings` may contain tasks of other projects and `task` itself; both
/// are ignored.
#[must_use]
pub fn blocking_task<'a>(task: &Task, siblings: &'a [Task]) -> Option<&'a Task> {
    siblings
        .iter()
        .filter(|other| {
            other.project_id() == task.project_id()
                && other.position() < task.position()
                && other.status() != TaskStatus::Done
        })
        .min_by_key(|other| other.position())
}
