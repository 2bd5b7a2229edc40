//! Repository port for template persistence.

use crate::error::ErrorKind;
use crate::postgres::StorageFailure;
use crate::template::domain::{Template, TemplateId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for template repository operations.
pub type TemplateRepositoryResult<T> = Result<T, TemplateRepositoryError>;

/// Template persistence contract.
///
/// Templates are immutable, so the contract has no update or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Stores a template together with all of its steps.
    ///
    /// Either the template and every step become visible, or nothing does.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateRepositoryError::DuplicateTemplate`] when the ID
    /// already exists.
    async fn store(&self, template: &Template) -> TemplateRepositoryResult<()>;

    /// Finds a template by identifier.
    ///
    /// Returns `None` when the template does not exist.
    async fn find_by_id(&self, id: TemplateId) -> TemplateRepositoryResult<Option<Template>>;

    /// Returns every template, newest first.
    async fn list(&self) -> TemplateRepositoryResult<Vec<Template>>;
}

/// Errors returned by template repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TemplateRepositoryError {
    /// A template with the same identifier already exists.
    #[error("duplicate template identifier: {0}")]
    DuplicateTemplate(TemplateId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TemplateRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateTemplate(_) | Self::Persistence(_) => ErrorKind::Persistence,
        }
    }
}

impl StorageFailure for TemplateRepositoryError {
    fn from_storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}
