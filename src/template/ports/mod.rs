//! Port contracts for template storage.

pub mod repository;

pub use repository::{TemplateRepository, TemplateRepositoryError, TemplateRepositoryResult};
#[cfg(test)]
pub use repository::MockTemplateRepository;
