//! Step definitions and positioned steps.

use super::{StepDuration, StepPosition, StepRejection};
use crate::directory::domain::{Department, DirectoryDomainError};
use serde::{Deserialize, Serialize};

/// A validated step before it has been given a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    description: String,
    department: Department,
    method: String,
    duration: StepDuration,
}

impl StepDefinition {
    /// Validates the four step fields.
    ///
    /// # Errors
    ///
    /// Returns the first [`StepRejection`] found, checking description,
    /// department, method, then duration.
    pub fn new(
        description: impl AsRef<str>,
        department: impl AsRef<str>,
        method: impl AsRef<str>,
        duration_days: i64,
    ) -> Result<Self, StepRejection> {
        let what = non_blank(description.as_ref()).ok_or(StepRejection::EmptyDescription)?;
        let who = Department::new(department).map_err(|err| match err {
            DirectoryDomainError::DepartmentTooLong(length) => {
                StepRejection::DepartmentTooLong(length)
            }
            _ => StepRejection::EmptyDepartment,
        })?;
        let how = non_blank(method.as_ref()).ok_or(StepRejection::EmptyMethod)?;
        let duration = StepDuration::from_days(duration_days)?;
        Ok(Self {
            description: what,
            department: who,
            method: how,
            duration,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// One positioned step of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    position: StepPosition,
    description: String,
    department: Department,
    method: String,
    duration: StepDuration,
}

impl Step {
    /// Places a definition at `position`.
    #[must_use]
    pub fn at(position: StepPosition, definition: StepDefinition) -> Self {
        Self {
            position,
            description: definition.description,
            department: definition.department,
            method: definition.method,
            duration: definition.duration,
        }
    }

    /// Returns the 1-based position.
    #[must_use]
    pub const fn position(&self) -> StepPosition {
        self.position
    }

    /// Returns what the step does.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns who is responsible.
    #[must_use]
    pub const fn department(&self) -> &Department {
        &self.department
    }

    /// Returns how the step is carried out.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns how long the step takes.
    #[must_use]
    pub const fn duration(&self) -> StepDuration {
        self.duration
    }
}
