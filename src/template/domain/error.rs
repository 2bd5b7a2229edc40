//! Error types for template validation.

use crate::error::ErrorKind;
use thiserror::Error;

/// Reason a single step definition was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StepRejection {
    /// The "what" field is blank.
    #[error("description must not be empty")]
    EmptyDescription,

    /// The "who" field is blank.
    #[error("responsible department must not be empty")]
    EmptyDepartment,

    /// The "who" field is longer than a department may be.
    #[error("responsible department is {0} characters, longer than 255")]
    DepartmentTooLong(usize),

    /// The "how" field is blank.
    #[error("method must not be empty")]
    EmptyMethod,

    /// The "when" field is outside `1..=StepDuration::MAX_DAYS`.
    #[error("duration must be between 1 and 36500 days, got {0}")]
    InvalidDuration(i64),
}

/// Errors returned while constructing templates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateDomainError {
    /// The template name is empty after trimming.
    #[error("template name must not be empty")]
    EmptyName,

    /// The template name exceeds the stored length.
    #[error("template name is {0} characters, longer than 255")]
    NameTooLong(usize),

    /// A template needs at least one step.
    #[error("template must contain at least one step")]
    EmptySteps,

    /// More steps than a position can address.
    #[error("template has {0} steps, more than can be numbered")]
    TooManySteps(usize),

    /// Step positions start at 1.
    #[error("invalid step position {0}, expected a positive integer")]
    InvalidPosition(u32),

    /// One step failed validation.
    #[error("step {position}: {reason}")]
    InvalidStep {
        /// 1-based position of the offending step.
        position: u32,
        /// What was wrong with it.
        reason: StepRejection,
    },

    /// Persisted steps have a gap or duplicate.
    #[error("step positions are not contiguous: expected {expected}, found {found}")]
    NonContiguousSteps {
        /// Position that should have come next.
        expected: u32,
        /// Position actually found.
        found: u32,
    },
}

impl TemplateDomainError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}
