//! Error types for activity parsing.

use thiserror::Error;

/// Error returned while parsing an activity kind from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity kind: {0}")]
pub struct ParseActivityKindError(pub String);
