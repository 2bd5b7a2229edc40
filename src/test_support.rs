//! Fakes shared by unit tests across contexts.

use crate::activity::{
    domain::ActivityEntry,
    ports::{ActivityLog, ActivityLogError, ActivityLogResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    /// Midnight UTC on 2024-01-01.
    pub(crate) fn new_year() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Activity log whose appends always fail, counting the attempts.
#[derive(Debug, Default)]
pub(crate) struct FailingActivityLog {
    attempts: AtomicUsize,
}

impl FailingActivityLog {
    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ActivityLog for FailingActivityLog {
    async fn append(&self, _entry: &ActivityEntry) -> ActivityLogResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ActivityLogError::persistence(std::io::Error::other(
            "activity store offline",
        )))
    }

    async fn list_recent(&self, _limit: usize) -> ActivityLogResult<Vec<ActivityEntry>> {
        Ok(Vec::new())
    }
}
