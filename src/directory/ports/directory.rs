//! Read-only directory port.

use crate::directory::domain::{ActorId, Department};
use crate::error::ErrorKind;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory lookups.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Department membership lookup.
///
/// Implementations are injected into services; the engine never consults a
/// process-wide directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Directory: Send + Sync {
    /// Returns the departments the actor belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownActor`] when the actor is not listed.
    async fn departments_of(&self, actor: &ActorId) -> DirectoryResult<Vec<Department>>;

    /// Returns every department known to the directory.
    async fn departments(&self) -> DirectoryResult<Vec<Department>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The actor is not listed in the directory.
    #[error("unknown actor: {0}")]
    UnknownActor(ActorId),

    /// The directory backend could not be reached.
    #[error("directory unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a backend failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownActor(_) => ErrorKind::NotFound,
            Self::Unavailable(_) => ErrorKind::Persistence,
        }
    }
}
