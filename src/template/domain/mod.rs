//! Domain model for process templates.
//!
//! Templates are validated on construction and never change afterwards, so
//! every projection and every project started from one sees the same steps.

mod error;
mod ids;
mod step;
mod template;

pub use error::{StepRejection, TemplateDomainError};
pub use ids::{StepDuration, StepPosition, TemplateId};
pub use step::{Step, StepDefinition};
pub use template::{PersistedTemplateData, Template, TemplateName, TemplateSummary};
