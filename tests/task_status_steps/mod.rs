//! Step definitions for task status behaviour tests.

mod given;
pub mod world;
