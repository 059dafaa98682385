//! Store port for durable task collection persistence.

use crate::tasks::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// A store holds an ordered sequence of tasks and performs no business
/// logic; lifecycle rules live in the service layer.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns the persisted sequence.
    ///
    /// Absent or unparsable persisted state yields an empty sequence;
    /// corruption is treated as absence, not a fatal error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the medium fails in a
    /// way that is not plain absence or corruption.
    async fn load(&self) -> TaskStoreResult<Vec<Task>>;

    /// Atomically replaces the persisted sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the medium rejects the
    /// write; previously persisted state is left intact in that case.
    async fn save(&self, tasks: &[Task]) -> TaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Appends a new task to the sequence.
    ///
    /// Identifiers are generated by the service layer, so the sequence
    /// never sees duplicates.
    async fn insert(&self, task: &Task) -> TaskStoreResult<()>;

    /// Replaces the task with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskStoreResult<()>;

    /// Removes the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
