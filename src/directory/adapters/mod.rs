//! Directory adapter implementations.

pub mod memory;
