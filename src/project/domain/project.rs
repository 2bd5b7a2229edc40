//! Project aggregate root.

use super::{ProjectDomainError, ProjectId};
use crate::directory::domain::{ActorId, bounded_name};
use crate::template::domain::TemplateId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty project name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectName`] when the value is
    /// blank and [`ProjectDomainError::ProjectNameTooLong`] when it exceeds
    /// [`MAX_NAME_LENGTH`](crate::directory::domain::MAX_NAME_LENGTH)
    /// characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ProjectDomainError> {
        bounded_name(
            value.as_ref(),
            ProjectDomainError::EmptyProjectName,
            ProjectDomainError::ProjectNameTooLong,
        )
        .map(Self)
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a `YYYY-MM-DD` start date.
///
/// # Errors
///
/// Returns [`ProjectDomainError::InvalidStartDate`] for anything that is not
/// a real calendar date in that format.
pub fn parse_start_date(value: &str) -> Result<NaiveDate, ProjectDomainError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ProjectDomainError::InvalidStartDate(value.to_owned()))
}

/// Project aggregate root. Never changes after creation; only its tasks do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    template_id: TemplateId,
    start_date: NaiveDate,
    created_by: ActorId,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: ProjectName,
    /// Originating template.
    pub template_id: TemplateId,
    /// Persisted start date.
    pub start_date: NaiveDate,
    /// Persisted creator.
    pub created_by: ActorId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a project record.
    #[must_use]
    pub fn new(
        name: ProjectName,
        template_id: TemplateId,
        start_date: NaiveDate,
        created_by: ActorId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            name,
            template_id,
            start_date,
            created_by,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            template_id: data.template_id,
            start_date: data.start_date,
            created_by: data.created_by,
            created_at: data.created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the originating template.
    #[must_use]
    pub const fn template_id(&self) -> TemplateId {
        self.template_id
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns who started the project.
    #[must_use]
    pub const fn created_by(&self) -> &ActorId {
        &self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
