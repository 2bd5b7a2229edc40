//! Domain model for activity log entries.

mod entry;
mod error;
mod event;
mod ids;

pub use entry::{ActivityEntry, PersistedActivityData};
pub use error::ParseActivityKindError;
pub use event::{ActivityEvent, ActivityKind};
pub use ids::ActivityEntryId;
