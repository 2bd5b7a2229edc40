//! FMS: process templates and the projects that run them.
//!
//! An author records a reusable process as a template: an ordered list of
//! steps saying what is done, which department does it, how, and how many
//! days it takes. Starting a project from a template schedules every step
//! against a start date and creates one task per step. Departments then move
//! their tasks through `Pending -> In Progress -> Done`, and every committed
//! change lands in an append-only activity log.
//!
//! # Architecture
//!
//! FMS follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Orchestration over injected ports
//!
//! # Modules
//!
//! - [`template`]: Template authoring and lookup
//! - [`project`]: Scheduling, instantiation, the task lifecycle, and queries
//! - [`activity`]: Append-only activity log and feed
//! - [`directory`]: Department membership collaborator
//! - [`config`]: Engine configuration
//! - [`error`]: Cross-context error classification

pub mod activity;
pub mod config;
pub mod directory;
pub mod error;
pub mod postgres;
pub mod project;
pub mod template;

#[cfg(test)]
mod test_support;
