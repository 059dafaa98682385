//! Domain model for the task lifecycle engine.
//!
//! Pure types and rules: the task aggregate with its tagged status, the
//! priority scale, the escalation policy constants, and display ordering.
//! No infrastructure concerns cross this boundary.

mod board;
mod error;
mod ids;
pub mod policy;
mod priority;
mod status;
mod subtask;
mod task;

pub use board::{SortDirection, SortKey, TaskBoard};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use priority::Priority;
pub use status::TaskStatus;
pub use subtask::Subtask;
pub use task::{Task, TaskEdit, TaskRecord, parse_deadline};
