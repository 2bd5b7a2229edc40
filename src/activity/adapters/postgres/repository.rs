//! `PostgreSQL` activity log implementation.

use super::{
    models::{ActivityRow, row_to_entry, to_new_row},
    schema::activity_log,
};
use crate::activity::{
    domain::ActivityEntry,
    ports::{ActivityLog, ActivityLogError, ActivityLogResult},
};
use crate::postgres::{PgPool, run_blocking};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed activity log.
#[derive(Debug, Clone)]
pub struct PostgresActivityLog {
    pool: PgPool,
}

impl PostgresActivityLog {
    /// Creates a log from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityLog for PostgresActivityLog {
    async fn append(&self, entry: &ActivityEntry) -> ActivityLogResult<()> {
        let entry_id = entry.id();
        let new_row = to_new_row(entry)?;
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(activity_log::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ActivityLogError::DuplicateEntry(entry_id)
                    }
                    _ => ActivityLogError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list_recent(&self, limit: usize) -> ActivityLogResult<Vec<ActivityEntry>> {
        let row_limit = i64::try_from(limit).unwrap_or(i64::MAX);
        run_blocking(&self.pool, move |connection| {
            let rows = activity_log::table
                .order(activity_log::sequence.desc())
                .limit(row_limit)
                .select(ActivityRow::as_select())
                .load::<ActivityRow>(connection)
                .map_err(ActivityLogError::persistence)?;
            rows.into_iter().map(row_to_entry).collect()
        })
        .await
    }
}
