//! Activity entry aggregate.

use super::{ActivityEntryId, ActivityEvent, ActivityKind};
use crate::directory::domain::ActorId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One immutable record in the activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    id: ActivityEntryId,
    event: ActivityEvent,
    actor: ActorId,
    recorded_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedActivityData {
    /// Persisted entry identifier.
    pub id: ActivityEntryId,
    /// Persisted event payload.
    pub event: ActivityEvent,
    /// Persisted actor.
    pub actor: ActorId,
    /// Persisted timestamp.
    pub recorded_at: DateTime<Utc>,
}

impl ActivityEntry {
    /// Records `event` as performed by `actor` now.
    #[must_use]
    pub fn new(event: ActivityEvent, actor: ActorId, clock: &impl Clock) -> Self {
        Self {
            id: ActivityEntryId::new(),
            event,
            actor,
            recorded_at: clock.utc(),
        }
    }

    /// Reconstructs an entry from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedActivityData) -> Self {
        Self {
            id: data.id,
            event: data.event,
            actor: data.actor,
            recorded_at: data.recorded_at,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityEntryId {
        self.id
    }

    /// Returns the event payload.
    #[must_use]
    pub const fn event(&self) -> &ActivityEvent {
        &self.event
    }

    /// Returns the event tag.
    #[must_use]
    pub const fn kind(&self) -> ActivityKind {
        self.event.kind()
    }

    /// Returns the actor who caused the event.
    #[must_use]
    pub const fn actor(&self) -> &ActorId {
        &self.actor
    }

    /// Returns when the entry was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Renders `"<actor> <event summary>"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} {}", self.actor, self.event.summary())
    }
}
