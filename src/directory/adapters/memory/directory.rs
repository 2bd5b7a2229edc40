//! Thread-safe in-memory directory.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{ActorId, Department},
    ports::{Directory, DirectoryError, DirectoryResult},
};

/// In-memory membership table keyed by actor.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    members: Arc<RwLock<BTreeMap<ActorId, BTreeSet<Department>>>>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a membership and returns the directory, for fluent setup.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Unavailable`] if the lock is poisoned.
    pub fn with_member(self, actor: ActorId, department: Department) -> DirectoryResult<Self> {
        self.assign(actor, department)?;
        Ok(self)
    }

    /// Records that `actor` belongs to `department`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Unavailable`] if the lock is poisoned.
    pub fn assign(&self, actor: ActorId, department: Department) -> DirectoryResult<()> {
        let mut members = self
            .members
            .write()
            .map_err(|err| DirectoryError::unavailable(std::io::Error::other(err.to_string())))?;
        members.entry(actor).or_default().insert(department);
        Ok(())
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    async fn departments_of(&self, actor: &ActorId) -> DirectoryResult<Vec<Department>> {
        let members = self
            .members
            .read()
            .map_err(|err| DirectoryError::unavailable(std::io::Error::other(err.to_string())))?;
        members
            .get(actor)
            .map(|departments| departments.iter().cloned().collect())
            .ok_or_else(|| DirectoryError::UnknownActor(actor.clone()))
    }

    async fn departments(&self) -> DirectoryResult<Vec<Department>> {
        let members = self
            .members
            .read()
            .map_err(|err| DirectoryError::unavailable(std::io::Error::other(err.to_string())))?;
        let unique: BTreeSet<Department> = members.values().flatten().cloned().collect();
        Ok(unique.into_iter().collect())
    }
}
