//! Directory collaborator boundary.
//!
//! The directory maps people to the departments that act as the "who" of a
//! step. It is owned by an external system; this module defines the identity
//! values the engine relies on, the read-only port it consumes, and an
//! in-memory adapter for tests and embedding.
//!
//! - Identity values in [`domain`]
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
