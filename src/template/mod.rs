//! Reusable process templates.
//!
//! A template is an immutable, named, ordered list of steps, each naming
//! what is done, which department does it, how, and how many days it takes.
//! Projects are started from templates by the [`crate::project`] context.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
