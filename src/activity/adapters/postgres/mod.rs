//! `PostgreSQL` adapter for the activity log.

pub(crate) mod models;
mod repository;
mod schema;

pub use repository::PostgresActivityLog;
