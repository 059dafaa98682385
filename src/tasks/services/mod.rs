//! Application services coordinating domain logic with the task store.

mod engine;
pub mod maintenance;

pub use engine::{
    EditTaskRequest, LifecycleEngine, LifecycleError, LifecycleResult, NewTaskRequest,
};
pub use maintenance::MaintenanceReport;
