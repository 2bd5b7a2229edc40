//! Application services for the activity log.

mod feed;
mod recorder;

pub use feed::ActivityFeedService;
pub(crate) use recorder::record_best_effort;
