//! `PostgreSQL` repository implementation for project storage.

use super::{
    models::{
        ProjectRow, TaskRow, map_store_error, parse_status, row_to_project, row_to_task,
        to_project_row, to_task_row,
    },
    schema::{project_tasks, projects},
};
use crate::directory::domain::Department;
use crate::postgres::{PgPool, run_blocking};
use crate::project::{
    domain::{Project, ProjectId, ProjectLaunch, Task, TaskId, TaskStatus},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn store(&self, launch: &ProjectLaunch) -> ProjectRepositoryResult<()> {
        let keys = launch.clone();
        let header = to_project_row(launch.project());
        let rows = launch
            .tasks()
            .iter()
            .map(to_task_row)
            .collect::<ProjectRepositoryResult<Vec<_>>>()?;

        run_blocking(&self.pool, move |connection| {
            connection
                .transaction::<_, DieselError, _>(|tx| {
                    diesel::insert_into(projects::table)
                        .values(&header)
                        .execute(tx)?;
                    diesel::insert_into(project_tasks::table)
                        .values(&rows)
                        .execute(tx)?;
                    Ok(())
                })
                .map_err(|err| map_store_error(err, &keys))
        })
        .await
    }

    async fn find_project(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        run_blocking(&self.pool, move |connection| {
            projects::table
                .filter(projects::id.eq(id.into_inner()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?
                .map(row_to_project)
                .transpose()
        })
        .await
    }

    async fn list_projects(&self) -> ProjectRepositoryResult<Vec<Project>> {
        run_blocking(&self.pool, move |connection| {
            projects::table
                .order((projects::created_at.desc(), projects::id.desc()))
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?
                .into_iter()
                .map(row_to_project)
                .collect()
        })
        .await
    }

    async fn find_task(&self, id: TaskId) -> ProjectRepositoryResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            project_tasks::table
                .filter(project_tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?
                .map(row_to_task)
                .transpose()
        })
        .await
    }

    async fn tasks_for_project(&self, id: ProjectId) -> ProjectRepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            project_tasks::table
                .filter(project_tasks::project_id.eq(id.into_inner()))
                .order(project_tasks::position)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }

    async fn tasks_for_departments(
        &self,
        departments: &[Department],
    ) -> ProjectRepositoryResult<Vec<Task>> {
        let names: Vec<String> = departments
            .iter()
            .map(|department| department.as_str().to_owned())
            .collect();
        run_blocking(&self.pool, move |connection| {
            project_tasks::table
                .filter(project_tasks::department.eq_any(names))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }

    async fn update_task_status(
        &self,
        task: &Task,
        expected: TaskStatus,
    ) -> ProjectRepositoryResult<()> {
        let task_id = task.id();
        let status = task.status().as_str();
        let completed_at = task.completed_at();
        let updated_at = task.updated_at();

        run_blocking(&self.pool, move |connection| {
            let target = project_tasks::table
                .filter(project_tasks::id.eq(task_id.into_inner()))
                .filter(project_tasks::status.eq(expected.as_str()));
            let updated = diesel::update(target)
                .set((
                    project_tasks::status.eq(status),
                    project_tasks::completed_at.eq(completed_at),
                    project_tasks::updated_at.eq(updated_at),
                ))
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if updated == 1 {
                return Ok(());
            }

            let current = project_tasks::table
                .filter(project_tasks::id.eq(task_id.into_inner()))
                .select(project_tasks::status)
                .first::<String>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            match current {
                None => Err(ProjectRepositoryError::TaskNotFound(task_id)),
                Some(actual) => Err(ProjectRepositoryError::Conflict {
                    task_id,
                    expected,
                    actual: parse_status(&actual)?,
                }),
            }
        })
        .await
    }
}
