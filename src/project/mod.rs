//! Projects: running instances of templates.
//!
//! Starting a project schedules every template step against a start date and
//! materialises one task per step. Tasks then move through
//! `Pending -> In Progress -> Done` under a validated state machine, and
//! read-side projections serve per-department task lists and project
//! overviews. The module follows the hexagonal layout:
//!
//! - Domain types, scheduling, and the state machine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Instantiation, lifecycle, and query services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
