//! Application services for projects and tasks.

mod instantiation;
mod lifecycle;
mod query;

pub use instantiation::{
    InstantiationError, InstantiationResult, ProjectInstantiationService, StartProjectRequest,
};
pub use lifecycle::{
    TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService, UpdateTaskStatusRequest,
};
pub use query::{WorkflowQueryError, WorkflowQueryResult, WorkflowQueryService};
