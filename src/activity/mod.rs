//! Append-only activity log.
//!
//! Every committed domain change (template created, project started, task
//! status changed) appends one entry. Entries are never mutated or removed;
//! readers see them newest first.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Feed and recording services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
