//! Port contracts for project persistence.

mod repository;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
#[cfg(test)]
pub use repository::MockProjectRepository;
