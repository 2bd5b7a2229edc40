//! Application services for template authoring and lookup.

mod catalogue;

pub use catalogue::{
    CreateTemplateRequest, StepInput, TemplateCatalogueError, TemplateCatalogueResult,
    TemplateCatalogueService,
};
