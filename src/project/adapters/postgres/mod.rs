//! `PostgreSQL` adapters for project persistence.

pub(crate) mod models;
mod repository;
mod schema;

pub use repository::PostgresProjectRepository;
