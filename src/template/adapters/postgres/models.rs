//! Diesel row models and conversions for templates.

use super::schema::{template_steps, templates};
use crate::directory::domain::ActorId;
use crate::template::{
    domain::{
        PersistedTemplateData, Step, StepDefinition, StepPosition, Template, TemplateId,
        TemplateName,
    },
    ports::{TemplateRepositoryError, TemplateRepositoryResult},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Row for the `templates` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = templates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TemplateRow {
    /// Template identifier.
    pub id: uuid::Uuid,
    /// Template name.
    pub name: String,
    /// Creator.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Row for the `template_steps` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = template_steps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StepRow {
    /// Owning template.
    pub template_id: uuid::Uuid,
    /// 1-based position.
    pub position: i32,
    /// What the step does.
    pub description: String,
    /// Responsible department.
    pub department: String,
    /// How the step is carried out.
    pub method: String,
    /// Duration in days.
    pub duration_days: i32,
}

/// Splits a template into its header and step rows.
pub(crate) fn to_rows(template: &Template) -> TemplateRepositoryResult<(TemplateRow, Vec<StepRow>)> {
    let template_id = template.id().into_inner();
    let steps = template
        .steps()
        .iter()
        .map(|step| {
            Ok(StepRow {
                template_id,
                position: i32::try_from(step.position().value())
                    .map_err(TemplateRepositoryError::persistence)?,
                description: step.description().to_owned(),
                department: step.department().as_str().to_owned(),
                method: step.method().to_owned(),
                duration_days: i32::try_from(step.duration().days())
                    .map_err(TemplateRepositoryError::persistence)?,
            })
        })
        .collect::<TemplateRepositoryResult<Vec<_>>>()?;

    let header = TemplateRow {
        id: template_id,
        name: template.name().as_str().to_owned(),
        created_by: template.created_by().as_str().to_owned(),
        created_at: template.created_at(),
    };
    Ok((header, steps))
}

/// Rebuilds a template from its header and step rows.
pub(crate) fn rows_to_template(
    header: TemplateRow,
    step_rows: Vec<StepRow>,
) -> TemplateRepositoryResult<Template> {
    let steps = step_rows
        .into_iter()
        .map(row_to_step)
        .collect::<TemplateRepositoryResult<Vec<_>>>()?;

    let data = PersistedTemplateData {
        id: TemplateId::from_uuid(header.id),
        name: TemplateName::new(header.name).map_err(TemplateRepositoryError::persistence)?,
        steps,
        created_by: ActorId::new(header.created_by)
            .map_err(TemplateRepositoryError::persistence)?,
        created_at: header.created_at,
    };
    Template::from_persisted(data).map_err(TemplateRepositoryError::persistence)
}

fn row_to_step(row: StepRow) -> TemplateRepositoryResult<Step> {
    let raw_position = u32::try_from(row.position).map_err(TemplateRepositoryError::persistence)?;
    let position = StepPosition::new(raw_position).map_err(TemplateRepositoryError::persistence)?;
    let definition = StepDefinition::new(
        row.description,
        row.department,
        row.method,
        i64::from(row.duration_days),
    )
    .map_err(TemplateRepositoryError::persistence)?;
    Ok(Step::at(position, definition))
}
