//! Read-side service for the activity feed.

use crate::activity::{
    domain::ActivityEntry,
    ports::{ActivityLog, ActivityLogResult},
};
use crate::config::EngineConfig;
use std::sync::Arc;

/// Serves the newest-first activity feed with a bounded page size.
#[derive(Clone)]
pub struct ActivityFeedService<A>
where
    A: ActivityLog,
{
    log: Arc<A>,
    max_page: usize,
}

impl<A> ActivityFeedService<A>
where
    A: ActivityLog,
{
    /// Creates a feed service with the default page cap.
    #[must_use]
    pub const fn new(log: Arc<A>) -> Self {
        Self {
            log,
            max_page: EngineConfig::DEFAULT_MAX_ACTIVITY_PAGE,
        }
    }

    /// Creates a feed service using the configured page cap.
    #[must_use]
    pub const fn from_config(log: Arc<A>, config: &EngineConfig) -> Self {
        Self {
            log,
            max_page: config.max_activity_page,
        }
    }

    /// Returns the effective page cap.
    #[must_use]
    pub const fn max_page(&self) -> usize {
        self.max_page
    }

    /// Returns at most `limit` entries, newest first.
    ///
    /// `limit` is clamped to the page cap; a zero limit returns nothing
    /// without touching storage.
    ///
    /// # Errors
    ///
    /// Returns the log's error when storage is unavailable.
    pub async fn list_recent(&self, limit: usize) -> ActivityLogResult<Vec<ActivityEntry>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        self.log.list_recent(limit.min(self.max_page)).await
    }
}
