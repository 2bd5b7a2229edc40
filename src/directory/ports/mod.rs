//! Port contracts for directory lookups.

pub mod directory;

pub use directory::{Directory, DirectoryError, DirectoryResult};
#[cfg(test)]
pub use directory::MockDirectory;
