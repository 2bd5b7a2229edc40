//! `PostgreSQL` adapters for template persistence.

pub(crate) mod models;
mod repository;
mod schema;

pub use repository::PostgresTemplateRepository;
