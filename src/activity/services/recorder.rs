//! Best-effort activity recording used after a domain write commits.

use crate::activity::{domain::ActivityEntry, ports::ActivityLog};
use tracing::warn;

/// Appends `entry`, reporting failure on the operational log only.
///
/// Callers invoke this after their primary write has committed. A lost
/// audit entry must not undo a committed domain change, so failures are
/// logged and swallowed here rather than propagated.
pub(crate) async fn record_best_effort<A>(log: &A, entry: &ActivityEntry)
where
    A: ActivityLog + ?Sized,
{
    if let Err(err) = log.append(entry).await {
        warn!(
            entry_id = %entry.id(),
            kind = entry.kind().as_str(),
            actor = %entry.actor(),
            error = %err,
            "activity log append failed after commit"
        );
    }
}
