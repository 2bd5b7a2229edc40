//! Thread-safe in-memory activity log.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::activity::{
    domain::{ActivityEntry, ActivityEntryId},
    ports::{ActivityLog, ActivityLogError, ActivityLogResult},
};

/// In-memory activity log holding entries in append order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityLog {
    state: Arc<RwLock<LogState>>,
}

#[derive(Debug, Default)]
struct LogState {
    entries: Vec<ActivityEntry>,
    ids: HashSet<ActivityEntryId>,
}

impl InMemoryActivityLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityLog for InMemoryActivityLog {
    async fn append(&self, entry: &ActivityEntry) -> ActivityLogResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ActivityLogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.ids.insert(entry.id()) {
            return Err(ActivityLogError::DuplicateEntry(entry.id()));
        }
        state.entries.push(entry.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> ActivityLogResult<Vec<ActivityEntry>> {
        let state = self.state.read().map_err(|err| {
            ActivityLogError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.entries.iter().rev().take(limit).cloned().collect())
    }
}
