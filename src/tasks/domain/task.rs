//! Task aggregate root and its persisted record form.

use super::{Priority, Subtask, TaskDomainError, TaskId, TaskStatus, policy};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Parses a deadline from its `YYYY-MM-DD` input form.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDeadline`] when the value is not a
/// calendar date in that form.
pub fn parse_deadline(raw: &str) -> Result<NaiveDate, TaskDomainError> {
    NaiveDate::parse_from_str(raw.trim(), policy::DEADLINE_FORMAT)
        .map_err(|_| TaskDomainError::InvalidDeadline(raw.to_owned()))
}

/// Task aggregate root.
///
/// Holds the lifecycle status as a tagged variant and enforces transition
/// and validation rules itself; orchestration and persistence sit in the
/// service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaskRecord", into = "TaskRecord")]
pub struct Task {
    id: TaskId,
    title: String,
    deadline: NaiveDate,
    priority: Priority,
    description: String,
    subtasks: Vec<Subtask>,
    status: TaskStatus,
}

/// Parameter object replacing a task's editable fields wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEdit {
    /// Replacement title.
    pub title: String,
    /// Replacement deadline.
    pub deadline: NaiveDate,
    /// Replacement priority.
    pub priority: Priority,
    /// Replacement description.
    pub description: String,
    /// Replacement subtask list.
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Creates an Active task with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        deadline: NaiveDate,
        priority: Priority,
        description: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let text = title.into();
        if text.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            id: TaskId::new(),
            title: text,
            deadline,
            priority,
            description: description.into(),
            subtasks: Vec::new(),
            status: TaskStatus::Active,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the subtasks in insertion order.
    #[must_use]
    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Whole days from `today` until the deadline; negative once missed.
    #[must_use]
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        self.deadline.signed_duration_since(today).num_days()
    }

    /// Overwrites the priority. Escalation policy lives with the callers.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Moves an Active task onto the watchlist as of `today`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SubtasksIncomplete`] while any subtask is
    /// open, or [`TaskDomainError::InvalidTransition`] when the task is not
    /// Active. The task is unchanged on error.
    pub fn enter_watchlist(&mut self, today: NaiveDate) -> Result<(), TaskDomainError> {
        self.ensure_active("watchlist")?;
        self.ensure_subtasks_done()?;
        self.status = TaskStatus::Watchlist { since: today };
        Ok(())
    }

    /// Completes an Active task as of `today`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SubtasksIncomplete`] while any subtask is
    /// open, or [`TaskDomainError::InvalidTransition`] when the task is not
    /// Active. The task is unchanged on error.
    pub fn complete_directly(&mut self, today: NaiveDate) -> Result<(), TaskDomainError> {
        self.ensure_active("completed")?;
        self.ensure_subtasks_done()?;
        self.status = TaskStatus::Completed { on: today };
        Ok(())
    }

    /// Confirms a Watchlist task as completed.
    ///
    /// The watchlist checkpoint becomes the completion date; confirming
    /// never stamps today.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is not
    /// on the watchlist.
    pub fn confirm_watchlist(&mut self) -> Result<(), TaskDomainError> {
        let TaskStatus::Watchlist { since } = self.status else {
            return Err(self.invalid_transition("completed"));
        };
        self.status = TaskStatus::Completed { on: since };
        Ok(())
    }

    /// Returns a Watchlist task to Active for rework.
    ///
    /// Pins the priority to the escalation cap, moves the deadline to
    /// tomorrow, and appends an open rework subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is not
    /// on the watchlist.
    pub fn return_from_watchlist(&mut self, today: NaiveDate) -> Result<(), TaskDomainError> {
        if !self.status.is_watchlist() {
            return Err(self.invalid_transition("active"));
        }
        self.status = TaskStatus::Active;
        self.priority = Priority::ESCALATION_CAP;
        self.deadline = today
            .checked_add_days(Days::new(policy::REWORK_DEADLINE_OFFSET_DAYS))
            .unwrap_or(NaiveDate::MAX);
        self.subtasks.push(Subtask::new(policy::REWORK_SUBTASK_TEXT));
        Ok(())
    }

    /// Replaces the editable fields wholesale, leaving status untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the replacement title
    /// is blank. The task is unchanged on error.
    pub fn apply_edit(&mut self, edit: TaskEdit) -> Result<(), TaskDomainError> {
        if edit.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        self.title = edit.title;
        self.deadline = edit.deadline;
        self.priority = edit.priority;
        self.description = edit.description;
        self.subtasks = edit.subtasks;
        Ok(())
    }

    fn ensure_active(&self, to: &'static str) -> Result<(), TaskDomainError> {
        if self.status.is_active() {
            return Ok(());
        }
        Err(self.invalid_transition(to))
    }

    fn ensure_subtasks_done(&self) -> Result<(), TaskDomainError> {
        let remaining = self.subtasks.iter().filter(|s| !s.is_done()).count();
        if remaining > 0 {
            return Err(TaskDomainError::SubtasksIncomplete {
                id: self.id,
                remaining,
            });
        }
        Ok(())
    }

    const fn invalid_transition(&self, to: &'static str) -> TaskDomainError {
        TaskDomainError::InvalidTransition {
            id: self.id,
            from: self.status.label(),
            to,
        }
    }
}

/// Storage representation of a task, matching the persisted JSON schema.
///
/// The lifecycle status is projected onto the two nullable checkpoint
/// dates; converting back derives the tagged status, with a completion
/// date winning over a stale watchlist date. Out-of-range priorities are
/// clamped on the way in so imported data loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Unique task identifier.
    pub id: TaskId,
    /// Display title; may be empty in imported data.
    pub title: String,
    /// Due date.
    pub deadline: NaiveDate,
    /// Urgency on the 1 to 20 scale; clamped on load.
    pub priority: i64,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Checklist entries in insertion order.
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    /// Completion checkpoint, set while the task is Completed.
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    /// Watchlist checkpoint, set while the task is on the watchlist.
    #[serde(default)]
    pub watchlist_date: Option<NaiveDate>,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        let status = TaskStatus::from_checkpoints(record.watchlist_date, record.completed_date);
        Self {
            id: record.id,
            title: record.title,
            deadline: record.deadline,
            priority: Priority::saturating_from(record.priority),
            description: record.description,
            subtasks: record.subtasks,
            status,
        }
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        let (watchlist_date, completed_date) = task.status.checkpoints();
        Self {
            id: task.id,
            title: task.title,
            deadline: task.deadline,
            priority: i64::from(task.priority.value()),
            description: task.description,
            subtasks: task.subtasks,
            completed_date,
            watchlist_date,
        }
    }
}
