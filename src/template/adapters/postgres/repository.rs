//! `PostgreSQL` repository implementation for template storage.

use super::{
    models::{StepRow, TemplateRow, rows_to_template, to_rows},
    schema::{template_steps, templates},
};
use crate::postgres::{PgPool, run_blocking};
use crate::template::{
    domain::{Template, TemplateId},
    ports::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;

/// `PostgreSQL`-backed template repository.
#[derive(Debug, Clone)]
pub struct PostgresTemplateRepository {
    pool: PgPool,
}

impl PostgresTemplateRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateRepository for PostgresTemplateRepository {
    async fn store(&self, template: &Template) -> TemplateRepositoryResult<()> {
        let template_id = template.id();
        let (header, steps) = to_rows(template)?;

        run_blocking(&self.pool, move |connection| {
            connection
                .transaction::<_, DieselError, _>(|tx| {
                    diesel::insert_into(templates::table)
                        .values(&header)
                        .execute(tx)?;
                    diesel::insert_into(template_steps::table)
                        .values(&steps)
                        .execute(tx)?;
                    Ok(())
                })
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TemplateRepositoryError::DuplicateTemplate(template_id)
                    }
                    _ => TemplateRepositoryError::persistence(err),
                })
        })
        .await
    }

    async fn find_by_id(&self, id: TemplateId) -> TemplateRepositoryResult<Option<Template>> {
        run_blocking(&self.pool, move |connection| {
            let header = templates::table
                .filter(templates::id.eq(id.into_inner()))
                .select(TemplateRow::as_select())
                .first::<TemplateRow>(connection)
                .optional()
                .map_err(TemplateRepositoryError::persistence)?;
            let Some(found) = header else {
                return Ok(None);
            };
            let steps = load_steps(connection, &[found.id])?;
            rows_to_template(found, steps).map(Some)
        })
        .await
    }

    async fn list(&self) -> TemplateRepositoryResult<Vec<Template>> {
        run_blocking(&self.pool, move |connection| {
            let headers = templates::table
                .order((templates::created_at.desc(), templates::id.desc()))
                .select(TemplateRow::as_select())
                .load::<TemplateRow>(connection)
                .map_err(TemplateRepositoryError::persistence)?;
            let ids: Vec<uuid::Uuid> = headers.iter().map(|header| header.id).collect();
            let mut steps_by_template: HashMap<uuid::Uuid, Vec<StepRow>> = HashMap::new();
            for step in load_steps(connection, &ids)? {
                steps_by_template
                    .entry(step.template_id)
                    .or_default()
                    .push(step);
            }
            headers
                .into_iter()
                .map(|header| {
                    let steps = steps_by_template.remove(&header.id).unwrap_or_default();
                    rows_to_template(header, steps)
                })
                .collect()
        })
        .await
    }
}

fn load_steps(
    connection: &mut PgConnection,
    template_ids: &[uuid::Uuid],
) -> TemplateRepositoryResult<Vec<StepRow>> {
    template_steps::table
        .filter(template_steps::template_id.eq_any(template_ids.to_vec()))
        .order((template_steps::template_id, template_steps::position))
        .select(StepRow::as_select())
        .load::<StepRow>(connection)
        .map_err(TemplateRepositoryError::persistence)
}
