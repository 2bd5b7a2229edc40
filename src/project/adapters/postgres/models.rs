//! Diesel row models and conversions for projects and tasks.

use super::schema::{project_tasks, projects};
use crate::directory::domain::{ActorId, Department};
use crate::project::{
    domain::{
        PersistedProjectData, PersistedTaskData, Project, ProjectId, ProjectLaunch, ProjectName,
        Task, TaskId, TaskStatus,
    },
    ports::{ProjectRepositoryError, ProjectRepositoryResult},
};
use crate::template::domain::{StepPosition, TemplateId};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Row for the `projects` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Originating template.
    pub template_id: uuid::Uuid,
    /// Start date.
    pub start_date: NaiveDate,
    /// Creator.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Row for the `project_tasks` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = project_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Step position.
    pub position: i32,
    /// What the task is.
    pub description: String,
    /// Responsible department.
    pub department: String,
    /// How the task is carried out.
    pub method: String,
    /// Planned due date.
    pub due_date: NaiveDate,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Lifecycle status in storage form.
    pub status: String,
    /// Latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Converts a project into its row.
pub(crate) fn to_project_row(project: &Project) -> ProjectRow {
    ProjectRow {
        id: project.id().into_inner(),
        name: project.name().as_str().to_owned(),
        template_id: project.template_id().into_inner(),
        start_date: project.start_date(),
        created_by: project.created_by().as_str().to_owned(),
        created_at: project.created_at(),
    }
}

/// Converts a task into its row.
pub(crate) fn to_task_row(task: &Task) -> ProjectRepositoryResult<TaskRow> {
    Ok(TaskRow {
        id: task.id().into_inner(),
        project_id: task.project_id().into_inner(),
        position: i32::try_from(task.position().value())
            .map_err(ProjectRepositoryError::persistence)?,
        description: task.description().to_owned(),
        department: task.department().as_str().to_owned(),
        method: task.method().to_owned(),
        due_date: task.due_date(),
        completed_at: task.completed_at(),
        status: task.status().as_str().to_owned(),
        updated_at: task.updated_at(),
    })
}

/// Rebuilds a project from its row.
pub(crate) fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let data = PersistedProjectData {
        id: ProjectId::from_uuid(row.id),
        name: ProjectName::new(row.name).map_err(ProjectRepositoryError::persistence)?,
        template_id: TemplateId::from_uuid(row.template_id),
        start_date: row.start_date,
        created_by: ActorId::new(row.created_by).map_err(ProjectRepositoryError::persistence)?,
        created_at: row.created_at,
    };
    Ok(Project::from_persisted(data))
}

/// Rebuilds a task from its row.
pub(crate) fn row_to_task(row: TaskRow) -> ProjectRepositoryResult<Task> {
    let raw_position = u32::try_from(row.position).map_err(ProjectRepositoryError::persistence)?;
    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        project_id: ProjectId::from_uuid(row.project_id),
        position: StepPosition::new(raw_position).map_err(ProjectRepositoryError::persistence)?,
        description: row.description,
        department: Department::new(row.department)
            .map_err(ProjectRepositoryError::persistence)?,
        method: row.method,
        due_date: row.due_date,
        completed_at: row.completed_at,
        status: parse_status(&row.status)?,
        updated_at: row.updated_at,
    };
    Task::from_persisted(data).map_err(ProjectRepositoryError::persistence)
}

/// Parses a stored status value.
pub(crate) fn parse_status(value: &str) -> ProjectRepositoryResult<TaskStatus> {
    TaskStatus::try_from(value).map_err(ProjectRepositoryError::persistence)
}

/// Maps a failed launch insert to the duplicate it reports.
///
/// The primary-key constraint names tell a colliding project from a
/// colliding task; the task itself is read from the violation details.
pub(crate) fn map_store_error(err: DieselError, launch: &ProjectLaunch) -> ProjectRepositoryError {
    let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &err else {
        return ProjectRepositoryError::persistence(err);
    };
    let duplicate = match info.constraint_name() {
        Some("projects_pkey") => Some(ProjectRepositoryError::DuplicateProject(
            launch.project().id(),
        )),
        Some("project_tasks_pkey") => info.details().and_then(|details| {
            launch
                .tasks()
                .iter()
                .map(Task::id)
                .find(|id| details.contains(&id.to_string()))
                .map(ProjectRepositoryError::DuplicateTask)
        }),
        _ => None,
    };
    duplicate.unwrap_or_else(|| ProjectRepositoryError::persistence(err))
}
