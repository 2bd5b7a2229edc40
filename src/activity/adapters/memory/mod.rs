//! In-memory activity log adapter.

mod log;

pub use log::InMemoryActivityLog;
