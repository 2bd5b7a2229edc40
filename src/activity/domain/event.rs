//! Domain events recorded in the activity log.
//!
//! Payloads carry plain identifiers and names rather than aggregate types so
//! the log stays a leaf: it records what happened without depending on the
//! contexts that emit into it.

use super::ParseActivityKindError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tag identifying the type of an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    /// A process template was created.
    TemplateCreated,
    /// A project was started from a template.
    ProjectCreated,
    /// A task changed status.
    TaskUpdated,
}

impl ActivityKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TemplateCreated => "TEMPLATE_CREATED",
            Self::ProjectCreated => "PROJECT_CREATED",
            Self::TaskUpdated => "TASK_UPDATED",
        }
    }
}

impl TryFrom<&str> for ActivityKind {
    type Error = ParseActivityKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "TEMPLATE_CREATED" => Ok(Self::TemplateCreated),
            "PROJECT_CREATED" => Ok(Self::ProjectCreated),
            "TASK_UPDATED" => Ok(Self::TaskUpdated),
            _ => Err(ParseActivityKindError(value.to_owned())),
        }
    }
}

/// Event-specific payload of an activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityEvent {
    /// A process template was created.
    TemplateCreated {
        /// Identifier of the new template.
        template_id: Uuid,
        /// Template name.
        template_name: String,
        /// Number of steps in the template.
        step_count: u32,
    },
    /// A project was started from a template.
    ProjectCreated {
        /// Identifier of the new project.
        project_id: Uuid,
        /// Project name.
        project_name: String,
        /// Identifier of the originating template.
        template_id: Uuid,
        /// Number of tasks materialised for the project.
        task_count: u32,
    },
    /// A task changed status.
    TaskUpdated {
        /// Identifier of the task.
        task_id: Uuid,
        /// Identifier of the owning project.
        project_id: Uuid,
        /// Step position the task was generated from.
        step_position: u32,
        /// Task description copied from the step.
        description: String,
        /// Display form of the new status.
        status: String,
    },
}

impl ActivityEvent {
    /// Returns the tag for this event.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        match self {
            Self::TemplateCreated { .. } => ActivityKind::TemplateCreated,
            Self::ProjectCreated { .. } => ActivityKind::ProjectCreated,
            Self::TaskUpdated { .. } => ActivityKind::TaskUpdated,
        }
    }

    /// Renders a one-line description for audit views.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::TemplateCreated {
                template_name,
                step_count,
                ..
            } => format!("created template '{template_name}' with {step_count} steps"),
            Self::ProjectCreated {
                project_name,
                task_count,
                ..
            } => format!("started project '{project_name}' with {task_count} tasks"),
            Self::TaskUpdated {
                step_position,
                description,
                status,
                ..
            } => format!("set step {step_position} '{description}' to {status}"),
        }
    }
}
