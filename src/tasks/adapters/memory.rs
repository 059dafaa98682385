//! In-memory task store for tests and embedding.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::tasks::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the given tasks.
    #[must_use]
    pub fn seeded(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn load(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self
            .tasks
            .read()
            .map_err(|e| TaskStoreError::persistence(std::io::Error::other(e.to_string())))?;
        Ok(tasks.clone())
    }

    async fn save(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let mut slot = self
            .tasks
            .write()
            .map_err(|e| TaskStoreError::persistence(std::io::Error::other(e.to_string())))?;
        *slot = tasks.to_vec();
        Ok(())
    }

    async fn find(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let tasks = self
            .tasks
            .read()
            .map_err(|e| TaskStoreError::persistence(std::io::Error::other(e.to_string())))?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|e| TaskStoreError::persistence(std::io::Error::other(e.to_string())))?;
        tasks.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|e| TaskStoreError::persistence(std::io::Error::other(e.to_string())))?;
        let slot = tasks
            .iter_mut()
            .find(|existing| existing.id() == task.id())
            .ok_or(TaskStoreError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|e| TaskStoreError::persistence(std::io::Error::other(e.to_string())))?;
        let index = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        tasks.remove(index);
        Ok(())
    }
}
