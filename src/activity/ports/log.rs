//! Activity log port.

use crate::activity::domain::{ActivityEntry, ActivityEntryId};
use crate::error::ErrorKind;
use crate::postgres::StorageFailure;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity log operations.
pub type ActivityLogResult<T> = Result<T, ActivityLogError>;

/// Append-only event store.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityLogError::Persistence`] when storage is unavailable
    /// or [`ActivityLogError::DuplicateEntry`] if the identifier was already
    /// recorded.
    async fn append(&self, entry: &ActivityEntry) -> ActivityLogResult<()>;

    /// Returns at most `limit` entries, newest first.
    async fn list_recent(&self, limit: usize) -> ActivityLogResult<Vec<ActivityEntry>>;
}

/// Errors returned by activity log implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityLogError {
    /// An entry with the same identifier already exists.
    #[error("duplicate activity entry: {0}")]
    DuplicateEntry(ActivityEntryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityLogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateEntry(_) | Self::Persistence(_) => ErrorKind::Persistence,
        }
    }
}

impl StorageFailure for ActivityLogError {
    fn from_storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}
