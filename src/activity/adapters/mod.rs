//! Activity log adapter implementations.

pub mod memory;
pub mod postgres;
