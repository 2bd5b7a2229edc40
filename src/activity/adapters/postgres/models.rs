//! Diesel row models and conversions for activity entries.

use super::schema::activity_log;
use crate::activity::{
    domain::{ActivityEntry, ActivityEntryId, ActivityEvent, ActivityKind, PersistedActivityData},
    ports::{ActivityLogError, ActivityLogResult},
};
use crate::directory::domain::ActorId;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use std::io;

/// Query result row for activity entries. Rows are ordered by the
/// database-assigned `sequence`, which the query sorts on but never reads.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activity_log)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActivityRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Event tag.
    pub kind: String,
    /// Event payload.
    pub payload: Value,
    /// Actor identifier.
    pub actor: String,
    /// Recording timestamp.
    pub recorded_at: DateTime<Utc>,
}

/// Insert model for activity entries. The sequence is assigned by the
/// database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activity_log)]
pub struct NewActivityRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Event tag.
    pub kind: String,
    /// Event payload.
    pub payload: Value,
    /// Actor identifier.
    pub actor: String,
    /// Recording timestamp.
    pub recorded_at: DateTime<Utc>,
}

/// Builds the insert row for an entry.
pub(crate) fn to_new_row(entry: &ActivityEntry) -> ActivityLogResult<NewActivityRow> {
    let payload = serde_json::to_value(entry.event()).map_err(ActivityLogError::persistence)?;
    Ok(NewActivityRow {
        id: entry.id().into_inner(),
        kind: entry.kind().as_str().to_owned(),
        payload,
        actor: entry.actor().as_str().to_owned(),
        recorded_at: entry.recorded_at(),
    })
}

/// Rebuilds an entry, rejecting rows whose tag disagrees with the payload.
pub(crate) fn row_to_entry(row: ActivityRow) -> ActivityLogResult<ActivityEntry> {
    let ActivityRow {
        id,
        kind,
        payload,
        actor,
        recorded_at,
    } = row;

    let stored_kind = ActivityKind::try_from(kind.as_str()).map_err(ActivityLogError::persistence)?;
    let event =
        serde_json::from_value::<ActivityEvent>(payload).map_err(ActivityLogError::persistence)?;
    if event.kind() != stored_kind {
        return Err(ActivityLogError::persistence(io::Error::other(format!(
            "activity {id} tagged {} but payload is {}",
            stored_kind.as_str(),
            event.kind().as_str()
        ))));
    }
    let actor_id = ActorId::new(actor).map_err(ActivityLogError::persistence)?;

    Ok(ActivityEntry::from_persisted(PersistedActivityData {
        id: ActivityEntryId::from_uuid(id),
        event,
        actor: actor_id,
        recorded_at,
    }))
}
