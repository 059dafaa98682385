//! Error types for task domain validation and transition gating.

use super::TaskId;
use thiserror::Error;

/// Errors returned by domain validation and lifecycle transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The deadline string is not a calendar date in `YYYY-MM-DD` form.
    #[error("invalid deadline '{0}', expected YYYY-MM-DD")]
    InvalidDeadline(String),

    /// The priority value falls outside the 1 to 20 scale.
    #[error("priority {0} out of range, expected 1 to 20")]
    PriorityOutOfRange(u8),

    /// The task identifier is not a valid UUID.
    #[error("invalid task identifier: {0}")]
    InvalidTaskId(String),

    /// A transition requires every subtask to be done first.
    #[error("task {id} has {remaining} unfinished subtasks")]
    SubtasksIncomplete {
        /// Identifier of the gated task.
        id: TaskId,
        /// Number of subtasks still open.
        remaining: usize,
    },

    /// The requested transition is not defined for the current status.
    #[error("task {id} cannot move from {from} to {to}")]
    InvalidTransition {
        /// Identifier of the task.
        id: TaskId,
        /// Label of the status the task is in.
        from: &'static str,
        /// Label of the status the transition targets.
        to: &'static str,
    },
}
