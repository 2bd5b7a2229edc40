//! Engine configuration.
//!
//! Configuration is plain data handed to service constructors. It can be
//! built in code or parsed from a JSON document; absent fields take their
//! defaults.
//!
//! ```
//! use fms::config::EngineConfig;
//! use fms::project::domain::VisibilityPolicy;
//!
//! let config = EngineConfig::from_json_str(r#"{"visibility": "step_gated"}"#)
//!     .expect("valid configuration");
//! assert_eq!(config.visibility, VisibilityPolicy::StepGated);
//! assert_eq!(config.max_activity_page, EngineConfig::DEFAULT_MAX_ACTIVITY_PAGE);
//! ```

use crate::project::domain::VisibilityPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("invalid engine configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The activity page cap must admit at least one entry.
    #[error("max_activity_page must be at least 1")]
    EmptyActivityPage,
}

/// Tunables shared by the lifecycle, query, and activity services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Which tasks appear in personal task lists and may be updated.
    pub visibility: VisibilityPolicy,
    /// Upper bound applied to activity feed page requests.
    pub max_activity_page: usize,
}

impl EngineConfig {
    /// Activity page cap used when none is configured.
    pub const DEFAULT_MAX_ACTIVITY_PAGE: usize = 500;

    /// Parses configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::EmptyActivityPage`] when the page cap is zero.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the visibility policy.
    #[must_use]
    pub const fn with_visibility(mut self, visibility: VisibilityPolicy) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the activity page cap.
    #[must_use]
    pub const fn with_max_activity_page(mut self, max_activity_page: usize) -> Self {
        self.max_activity_page = max_activity_page;
        self
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyActivityPage`] when the page cap is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_activity_page == 0 {
            return Err(ConfigError::EmptyActivityPage);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            visibility: VisibilityPolicy::default(),
            max_activity_page: Self::DEFAULT_MAX_ACTIVITY_PAGE,
        }
    }
}
