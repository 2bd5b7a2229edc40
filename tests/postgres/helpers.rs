//! Shared helpers for `PostgreSQL` integration tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use fms::directory::domain::ActorId;
use fms::postgres::PgPool;
use fms::project::domain::{ProjectLaunch, ProjectName};
use fms::template::domain::{StepDefinition, Template, TemplateName};
use mockable::Clock;
use pg_embedded_setup_unpriv::TestCluster;
use tokio::runtime::Runtime;

/// SQL creating every workflow table.
const CREATE_TABLES_SQL: &str =
    include_str!("../../migrations/2026-01-05-000000_create_workflow_tables/up.sql");

/// Template database holding the migrated schema.
const TEMPLATE_DB: &str = "fms_test_template";

/// Creates a tokio runtime for driving the async adapters.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> eyre::Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Ensures the template database exists with the schema applied.
fn ensure_template(cluster: &TestCluster) -> eyre::Result<()> {
    cluster.ensure_template_exists(TEMPLATE_DB, |db_name| {
        let url = cluster.connection().database_url(db_name);
        let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
        execute_sql_statements(&mut conn, CREATE_TABLES_SQL)?;
        Ok(())
    })?;
    Ok(())
}

/// Executes a migration file one statement at a time.
fn execute_sql_statements(conn: &mut PgConnection, sql: &str) -> eyre::Result<()> {
    for statement in sql.split(';') {
        let trimmed = statement.trim();
        if trimmed.is_empty() || trimmed.lines().all(|line| line.trim().starts_with("--")) {
            continue;
        }
        diesel::sql_query(trimmed)
            .execute(conn)
            .map_err(|e| eyre::eyre!("SQL error: {e}\nStatement: {trimmed}"))?;
    }
    Ok(())
}

/// A migrated database dropped again when the test ends.
pub struct TestDatabase {
    cluster: &'static TestCluster,
    name: String,
    pool: Option<PgPool>,
}

impl TestDatabase {
    /// Clones the migrated template into a fresh database.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or the database cannot be created.
    pub fn create(cluster: &'static TestCluster, label: &str) -> eyre::Result<Self> {
        ensure_template(cluster)?;
        let name = format!("test_{label}_{}", uuid::Uuid::new_v4().simple());
        cluster.create_database_from_template(name.as_str(), TEMPLATE_DB)?;
        let url = cluster.connection().database_url(&name);
        let pool = Pool::builder()
            .max_size(2)
            .build(ConnectionManager::<PgConnection>::new(url))?;
        Ok(Self {
            cluster,
            name,
            pool: Some(pool),
        })
    }

    /// Returns a pool connected to this database.
    ///
    /// # Errors
    ///
    /// Returns an error once the database is being dropped.
    pub fn pool(&self) -> eyre::Result<PgPool> {
        self.pool
            .clone()
            .ok_or_else(|| eyre::eyre!("database {} is closed", self.name))
    }

    /// Opens a direct connection for raw SQL setup.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub fn connection(&self) -> eyre::Result<PgConnection> {
        let url = self.cluster.connection().database_url(&self.name);
        Ok(PgConnection::establish(&url)?)
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        drop(self.pool.take());
        if let Err(err) = self.cluster.drop_database(self.name.as_str()) {
            tracing::warn!(database = %self.name, error = %err, "failed to drop test database");
        }
    }
}

/// Clock pinned to one instant, whole seconds so stored timestamps compare
/// equal after the round trip.
#[derive(Debug, Clone, Copy)]
pub struct PinnedClock(pub DateTime<Utc>);

impl PinnedClock {
    /// 2024-01-01T09:00:00Z.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture instant is invalid.
    pub fn new_year() -> eyre::Result<Self> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .map(Self)
            .ok_or_else(|| eyre::eyre!("invalid fixture instant"))
    }
}

impl Clock for PinnedClock {
    fn local(&self) -> DateTime<Local> {
        Local.from_utc_datetime(&self.0.naive_utc())
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Two-step onboarding template: HR for two days, then Security for one.
///
/// # Errors
///
/// Returns an error if a fixture value is invalid.
pub fn onboarding_template() -> eyre::Result<Template> {
    Ok(Template::new(
        TemplateName::new("Onboarding")?,
        vec![
            StepDefinition::new("Collect docs", "HR", "Email", 2)?,
            StepDefinition::new("Issue badge", "Security", "In person", 1)?,
        ],
        ActorId::new("alice")?,
        &PinnedClock::new_year()?,
    )?)
}

/// Launch named `name` from `template`, starting 2024-01-01.
///
/// # Errors
///
/// Returns an error if a fixture value is invalid.
pub fn launch_from(template: &Template, name: &str) -> eyre::Result<ProjectLaunch> {
    let start =
        NaiveDate::from_ymd_opt(2024, 1, 1).ok_or_else(|| eyre::eyre!("invalid fixture date"))?;
    Ok(ProjectLaunch::from_template(
        template,
        ProjectName::new(name)?,
        start,
        ActorId::new("alice")?,
        &PinnedClock::new_year()?,
    )?)
}
