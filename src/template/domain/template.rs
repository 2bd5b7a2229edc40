//! Template aggregate root.

use super::{Step, StepDefinition, StepPosition, TemplateDomainError, TemplateId};
use crate::directory::domain::{ActorId, bounded_name};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty template name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateName(String);

impl TemplateName {
    /// Creates a validated template name.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::EmptyName`] when the value is blank and
    /// [`TemplateDomainError::NameTooLong`] when it exceeds
    /// [`MAX_NAME_LENGTH`](crate::directory::domain::MAX_NAME_LENGTH)
    /// characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TemplateDomainError> {
        bounded_name(
            value.as_ref(),
            TemplateDomainError::EmptyName,
            TemplateDomainError::NameTooLong,
        )
        .map(Self)
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Template aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    id: TemplateId,
    name: TemplateName,
    steps: Vec<Step>,
    created_by: ActorId,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTemplateData {
    /// Persisted template identifier.
    pub id: TemplateId,
    /// Persisted name.
    pub name: TemplateName,
    /// Persisted steps in any order.
    pub steps: Vec<Step>,
    /// Persisted creator.
    pub created_by: ActorId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Listing projection of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    /// Template identifier.
    pub id: TemplateId,
    /// Template name.
    pub name: TemplateName,
    /// Number of steps.
    pub step_count: u32,
    /// Creator.
    pub created_by: ActorId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// Creates a template, numbering steps 1..N in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::EmptySteps`] when `definitions` is
    /// empty or [`TemplateDomainError::TooManySteps`] if positions overflow.
    pub fn new(
        name: TemplateName,
        definitions: Vec<StepDefinition>,
        created_by: ActorId,
        clock: &impl Clock,
    ) -> Result<Self, TemplateDomainError> {
        if definitions.is_empty() {
            return Err(TemplateDomainError::EmptySteps);
        }
        let steps = definitions
            .into_iter()
            .enumerate()
            .map(|(index, definition)| {
                StepPosition::from_index(index).map(|position| Step::at(position, definition))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: TemplateId::new(),
            name,
            steps,
            created_by,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a template from persisted storage.
    ///
    /// Steps are sorted by position and must number exactly 1..N.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateDomainError::EmptySteps`] or
    /// [`TemplateDomainError::NonContiguousSteps`] for corrupt step sets.
    pub fn from_persisted(data: PersistedTemplateData) -> Result<Self, TemplateDomainError> {
        let PersistedTemplateData {
            id,
            name,
            mut steps,
            created_by,
            created_at,
        } = data;

        if steps.is_empty() {
            return Err(TemplateDomainError::EmptySteps);
        }
        steps.sort_by_key(Step::position);
        for (index, step) in steps.iter().enumerate() {
            let expected = StepPosition::from_index(index)?;
            if step.position() != expected {
                return Err(TemplateDomainError::NonContiguousSteps {
                    expected: expected.value(),
                    found: step.position().value(),
                });
            }
        }

        Ok(Self {
            id,
            name,
            steps,
            created_by,
            created_at,
        })
    }

    /// Returns the template identifier.
    #[must_use]
    pub const fn id(&self) -> TemplateId {
        self.id
    }

    /// Returns the template name.
    #[must_use]
    pub const fn name(&self) -> &TemplateName {
        &self.name
    }

    /// Returns the steps ordered by position.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        u32::try_from(self.steps.len()).unwrap_or(u32::MAX)
    }

    /// Returns the sum of all step durations in days.
    #[must_use]
    pub fn total_duration_days(&self) -> u64 {
        self.steps
            .iter()
            .map(|step| u64::from(step.duration().days()))
            .sum()
    }

    /// Returns who created the template.
    #[must_use]
    pub const fn created_by(&self) -> &ActorId {
        &self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Builds the listing projection.
    #[must_use]
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id,
            name: self.name.clone(),
            step_count: self.step_count(),
            created_by: self.created_by.clone(),
            created_at: self.created_at,
        }
    }
}
