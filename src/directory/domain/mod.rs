//! Identity values shared by every context.

mod error;
mod ids;

pub use error::DirectoryDomainError;
pub(crate) use ids::bounded_name;
pub use ids::{ActorId, Department, MAX_NAME_LENGTH};
