//! Cross-context error classification.
//!
//! Each context keeps its own error enums; [`ErrorKind`] folds them into the
//! four categories callers act on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-facing category of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed or missing input. Surfaced verbatim, never retried.
    Validation,
    /// A referenced template, project, task, or actor does not exist.
    NotFound,
    /// The task state machine rejected the requested status change.
    IllegalTransition,
    /// Storage was unavailable or a concurrent writer won the race.
    Persistence,
}

impl ErrorKind {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::IllegalTransition => "illegal_transition",
            Self::Persistence => "persistence",
        }
    }

    /// Returns `true` when retrying the whole operation may succeed.
    ///
    /// Multi-record writes are atomic, so a persistence failure leaves no
    /// partial state behind and the entire call can be repeated.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Persistence)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
