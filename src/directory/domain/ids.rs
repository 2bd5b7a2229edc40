//! Validated identity scalars.

use super::DirectoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest name, in characters, accepted by any named value.
pub const MAX_NAME_LENGTH: usize = 255;

/// Trims `value` and checks it is neither blank nor longer than
/// [`MAX_NAME_LENGTH`].
pub(crate) fn bounded_name<E>(
    value: &str,
    empty: E,
    too_long: impl FnOnce(usize) -> E,
) -> Result<String, E> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    let length = trimmed.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(too_long(length));
    }
    Ok(trimmed.to_owned())
}

/// Identifier of the person performing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    /// Creates a validated actor identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyActorId`] when the value is blank
    /// and [`DirectoryDomainError::ActorIdTooLong`] past
    /// [`MAX_NAME_LENGTH`] characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DirectoryDomainError> {
        bounded_name(
            value.as_ref(),
            DirectoryDomainError::EmptyActorId,
            DirectoryDomainError::ActorIdTooLong,
        )
        .map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ActorId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Responsible department, the "who" of a step and its tasks.
///
/// Departments compare exactly after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Department(String);

impl Department {
    /// Creates a validated department identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyDepartment`] when the value is
    /// blank and [`DirectoryDomainError::DepartmentTooLong`] past
    /// [`MAX_NAME_LENGTH`] characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DirectoryDomainError> {
        bounded_name(
            value.as_ref(),
            DirectoryDomainError::EmptyDepartment,
            DirectoryDomainError::DepartmentTooLong,
        )
        .map(Self)
    }

    /// Returns the department as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Department {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
