//! Identifier and validated scalar types for the template domain.

use super::{StepRejection, TemplateDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(Uuid);

impl TemplateId {
    /// Creates a new random template identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a template identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based position of a step within its template.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StepPosition(u32);

impl StepPosition {
    /// The first step of every template.
    pub const FIRST: Self = Self(1);

    /// Creates a validated position.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::InvalidPosition`] for zero.
    pub const fn new(value: u32) -> Result<Self, TemplateDomainError> {
        if value == 0 {
            return Err(TemplateDomainError::InvalidPosition(value));
        }
        Ok(Self(value))
    }

    /// Converts a 0-based list index into a position.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::TooManySteps`] when the index does not
    /// fit.
    pub fn from_index(index: usize) -> Result<Self, TemplateDomainError> {
        u32::try_from(index)
            .ok()
            .and_then(|value| value.checked_add(1))
            .map(Self)
            .ok_or(TemplateDomainError::TooManySteps(index))
    }

    /// Returns the numeric position.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StepPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Step duration in whole days, from one day up to a century.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepDuration(u32);

impl StepDuration {
    /// Longest accepted duration.
    pub const MAX_DAYS: u32 = 36_500;

    /// Creates a validated duration.
    ///
    /// # Errors
    ///
    /// Returns [`StepRejection::InvalidDuration`] when `days` is not in
    /// `1..=MAX_DAYS`.
    pub fn from_days(days: i64) -> Result<Self, StepRejection> {
        u32::try_from(days)
            .ok()
            .filter(|value| (1..=Self::MAX_DAYS).contains(value))
            .map(Self)
            .ok_or(StepRejection::InvalidDuration(days))
    }

    /// Returns the number of days.
    #[must_use]
    pub const fn days(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StepDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}
