//! Error types for identity value validation.

use thiserror::Error;

/// Errors returned while constructing identity values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The actor identifier is empty after trimming.
    #[error("actor identifier must not be empty")]
    EmptyActorId,

    /// The department identifier is empty after trimming.
    #[error("department must not be empty")]
    EmptyDepartment,

    /// The actor identifier exceeds the stored length.
    #[error("actor identifier is {0} characters, longer than 255")]
    ActorIdTooLong(usize),

    /// The department exceeds the stored length.
    #[error("department is {0} characters, longer than 255")]
    DepartmentTooLong(usize),
}
