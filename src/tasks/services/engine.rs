//! Lifecycle engine: the single mutation path for task state and priority.

use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::tasks::{
    domain::{
        Priority, SortDirection, SortKey, Subtask, Task, TaskBoard, TaskDomainError, TaskEdit,
        TaskId, parse_deadline,
    },
    ports::{TaskStore, TaskStoreError},
};

use super::maintenance::{self, MaintenanceReport};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    title: String,
    deadline: Option<String>,
    priority: Option<u8>,
    description: Option<String>,
}

impl NewTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            deadline: None,
            priority: None,
            description: None,
        }
    }

    /// Sets the deadline as a `YYYY-MM-DD` string; defaults to today.
    #[must_use]
    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    /// Sets the priority; defaults to [`Priority::DEFAULT`].
    #[must_use]
    pub const fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the description; defaults to empty.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload replacing a task's editable fields by identity.
///
/// Edits are wholesale: an omitted description or subtask list clears the
/// field rather than keeping the old value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    id: TaskId,
    title: String,
    deadline: String,
    priority: u8,
    description: Option<String>,
    subtasks: Option<Vec<Subtask>>,
}

impl EditTaskRequest {
    /// Creates a request with the required replacement fields.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        deadline: impl Into<String>,
        priority: u8,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            deadline: deadline.into(),
            priority,
            description: None,
            subtasks: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement subtask list.
    #[must_use]
    pub fn with_subtasks(mut self, subtasks: impl IntoIterator<Item = Subtask>) -> Self {
        self.subtasks = Some(subtasks.into_iter().collect());
        self
    }
}

/// Service-level errors for lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Domain validation or transition gating failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for lifecycle engine operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Task lifecycle orchestration engine.
///
/// The single point of mutation for status and priority: every mutating
/// operation serializes on an internal gate, so each recalculation sees a
/// consistent snapshot of the collection. Clones share the gate and the
/// store.
#[derive(Clone)]
pub struct LifecycleEngine<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    gate: Arc<Mutex<()>>,
}

impl<S, C> LifecycleEngine<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates an engine without running startup maintenance.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Creates an engine and runs the startup maintenance pipeline once.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Store`] when the maintained collection
    /// cannot be loaded or persisted.
    pub async fn start(store: Arc<S>, clock: Arc<C>) -> LifecycleResult<Self> {
        let engine = Self::new(store, clock);
        engine.run_startup_maintenance().await?;
        Ok(engine)
    }

    /// Runs the startup maintenance pipeline over the stored collection.
    ///
    /// Applies the retention sweep, the watchlist timeout sweep, and the
    /// startup priority check in that order, saving once and only when a
    /// pass changed something.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Store`] when loading or saving fails.
    pub async fn run_startup_maintenance(&self) -> LifecycleResult<MaintenanceReport> {
        let _guard = self.gate.lock().await;
        let today = self.today();
        let mut tasks = self.store.load().await?;
        let report = maintenance::run_startup_passes(&mut tasks, today);
        if report.changed() {
            self.store.save(&tasks).await?;
        }
        info!(
            purged = report.purged,
            auto_completed = report.auto_completed,
            escalated = report.escalated,
            "startup maintenance finished"
        );
        Ok(report)
    }

    /// Creates an Active task from the request.
    ///
    /// The deadline defaults to today and the priority to
    /// [`Priority::DEFAULT`] when omitted. Addition does not trigger
    /// recalculation.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Domain`] when validation rejects the
    /// request, or [`LifecycleError::Store`] when persistence fails.
    pub async fn add_task(&self, request: NewTaskRequest) -> LifecycleResult<Task> {
        let _guard = self.gate.lock().await;
        let today = self.today();
        let deadline = match request.deadline {
            Some(raw) => parse_deadline(&raw)?,
            None => today,
        };
        let priority = match request.priority {
            Some(value) => Priority::new(value)?,
            None => Priority::DEFAULT,
        };
        let task = Task::new(
            request.title,
            deadline,
            priority,
            request.description.unwrap_or_default(),
        )?;
        self.store.insert(&task).await?;
        debug!(id = %task.id(), "task created");
        Ok(task)
    }

    /// Replaces the editable fields of an existing task.
    ///
    /// Editing is an explicit override of the engine's own escalation, so
    /// no recalculation runs and the status is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Domain`] when validation rejects the
    /// request, or [`LifecycleError::Store`] when the task is unknown or
    /// persistence fails.
    pub async fn edit_task(&self, request: EditTaskRequest) -> LifecycleResult<Task> {
        let _guard = self.gate.lock().await;
        let deadline = parse_deadline(&request.deadline)?;
        let priority = Priority::new(request.priority)?;
        let mut task = self.fetch(request.id).await?;
        task.apply_edit(TaskEdit {
            title: request.title,
            deadline,
            priority,
            description: request.description.unwrap_or_default(),
            subtasks: request.subtasks.unwrap_or_default(),
        })?;
        self.store.update(&task).await?;
        debug!(id = %task.id(), "task edited");
        Ok(task)
    }

    /// Moves an Active task onto the watchlist as of today.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Domain`] when subtasks are unfinished or
    /// the task is not Active, and [`LifecycleError::Store`] when the task
    /// is unknown or persistence fails.
    pub async fn move_to_watchlist(&self, id: TaskId) -> LifecycleResult<Task> {
        let _guard = self.gate.lock().await;
        let today = self.today();
        let mut task = self.fetch(id).await?;
        task.enter_watchlist(today)?;
        self.store.update(&task).await?;
        debug!(id = %id, "task moved to watchlist");
        Ok(task)
    }

    /// Returns a Watchlist task to Active for rework.
    ///
    /// The rework policy pins the priority to the escalation cap, sets the
    /// deadline to tomorrow, and appends an open rework subtask.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Domain`] when the task is not on the
    /// watchlist, and [`LifecycleError::Store`] when the task is unknown
    /// or persistence fails.
    pub async fn return_from_watchlist(&self, id: TaskId) -> LifecycleResult<Task> {
        let _guard = self.gate.lock().await;
        let today = self.today();
        let mut task = self.fetch(id).await?;
        task.return_from_watchlist(today)?;
        self.store.update(&task).await?;
        debug!(id = %id, "task returned for rework");
        Ok(task)
    }

    /// Completes an Active task as of today and escalates the survivors.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Domain`] when subtasks are unfinished or
    /// the task is not Active, and [`LifecycleError::Store`] when the task
    /// is unknown or persistence fails.
    pub async fn complete_task(&self, id: TaskId) -> LifecycleResult<Task> {
        let _guard = self.gate.lock().await;
        let today = self.today();
        let mut tasks = self.store.load().await?;
        let task = {
            let slot = find_in(&mut tasks, id)?;
            slot.complete_directly(today)?;
            slot.clone()
        };
        let escalated = maintenance::escalate_near_deadlines(&mut tasks, today);
        self.store.save(&tasks).await?;
        debug!(id = %id, escalated, "task completed");
        Ok(task)
    }

    /// Confirms a Watchlist task as completed and escalates the survivors.
    ///
    /// The watchlist checkpoint becomes the completion date.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Domain`] when the task is not on the
    /// watchlist, and [`LifecycleError::Store`] when the task is unknown
    /// or persistence fails.
    pub async fn confirm_watchlist(&self, id: TaskId) -> LifecycleResult<Task> {
        let _guard = self.gate.lock().await;
        let today = self.today();
        let mut tasks = self.store.load().await?;
        let task = {
            let slot = find_in(&mut tasks, id)?;
            slot.confirm_watchlist()?;
            slot.clone()
        };
        let escalated = maintenance::escalate_near_deadlines(&mut tasks, today);
        self.store.save(&tasks).await?;
        debug!(id = %id, escalated, "watchlist entry confirmed");
        Ok(task)
    }

    /// Deletes a task outright and escalates the survivors.
    ///
    /// Deletion is total; no archive is kept.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Store`] when the task is unknown or
    /// persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> LifecycleResult<()> {
        let _guard = self.gate.lock().await;
        let today = self.today();
        let mut tasks = self.store.load().await?;
        let index = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(LifecycleError::Store(TaskStoreError::NotFound(id)))?;
        tasks.remove(index);
        let escalated = maintenance::escalate_near_deadlines(&mut tasks, today);
        self.store.save(&tasks).await?;
        debug!(id = %id, escalated, "task deleted");
        Ok(())
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Store`] when the lookup fails.
    pub async fn find_task(&self, id: TaskId) -> LifecycleResult<Option<Task>> {
        Ok(self.store.find(id).await?)
    }

    /// Returns the collection partitioned and ordered for display.
    ///
    /// Read-only; does not take the mutation gate.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Store`] when loading fails.
    pub async fn board(&self) -> LifecycleResult<TaskBoard> {
        let tasks = self.store.load().await?;
        Ok(TaskBoard::build(tasks))
    }

    /// Returns the board with the active section under an explicit sort.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Store`] when loading fails.
    pub async fn board_sorted(
        &self,
        key: SortKey,
        direction: SortDirection,
    ) -> LifecycleResult<TaskBoard> {
        let tasks = self.store.load().await?;
        Ok(TaskBoard::build_sorted(tasks, key, direction))
    }

    async fn fetch(&self, id: TaskId) -> LifecycleResult<Task> {
        let found = self.store.find(id).await?;
        found.ok_or(LifecycleError::Store(TaskStoreError::NotFound(id)))
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

fn find_in(tasks: &mut [Task], id: TaskId) -> Result<&mut Task, LifecycleError> {
    tasks
        .iter_mut()
        .find(|task| task.id() == id)
        .ok_or(LifecycleError::Store(TaskStoreError::NotFound(id)))
}
