//! Display ordering for task collections.

use super::{Task, TaskStatus};
use chrono::NaiveDate;
use std::cmp::Reverse;

/// Column the active section can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Sort by priority.
    Priority,
    /// Sort by deadline.
    Deadline,
}

/// Direction for an explicit sort override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Tasks partitioned by status and ordered for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    active: Vec<Task>,
    watchlist: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskBoard {
    /// Partitions tasks and applies the default ordering.
    ///
    /// Active tasks sort by priority descending, then deadline ascending,
    /// so ties favour the task closer to its deadline. The watchlist and
    /// completed sections sort by their checkpoint dates, most recent
    /// first.
    #[must_use]
    pub fn build(tasks: Vec<Task>) -> Self {
        let mut board = Self::partition(tasks);
        board.active.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then_with(|| a.deadline().cmp(&b.deadline()))
        });
        board
    }

    /// Partitions tasks, sorting the active section by an explicit column.
    ///
    /// The watchlist and completed orderings are fixed regardless of the
    /// requested sort.
    #[must_use]
    pub fn build_sorted(tasks: Vec<Task>, key: SortKey, direction: SortDirection) -> Self {
        let mut board = Self::partition(tasks);
        match (key, direction) {
            (SortKey::Priority, SortDirection::Descending) => {
                board.active.sort_by(|a, b| b.priority().cmp(&a.priority()));
            }
            (SortKey::Priority, SortDirection::Ascending) => {
                board.active.sort_by(|a, b| a.priority().cmp(&b.priority()));
            }
            (SortKey::Deadline, SortDirection::Ascending) => {
                board.active.sort_by_key(Task::deadline);
            }
            (SortKey::Deadline, SortDirection::Descending) => {
                board.active.sort_by_key(|task| Reverse(task.deadline()));
            }
        }
        board
    }

    /// Active tasks in display order.
    #[must_use]
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// Watchlist tasks, most recently checkpointed first.
    #[must_use]
    pub fn watchlist(&self) -> &[Task] {
        &self.watchlist
    }

    /// Completed tasks, most recently completed first.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    fn partition(tasks: Vec<Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            match task.status() {
                TaskStatus::Active => board.active.push(task),
                TaskStatus::Watchlist { .. } => board.watchlist.push(task),
                TaskStatus::Completed { .. } => board.completed.push(task),
            }
        }
        board.watchlist.sort_by_key(|task| Reverse(checkpoint(task)));
        board.completed.sort_by_key(|task| Reverse(checkpoint(task)));
        board
    }
}

const fn checkpoint(task: &Task) -> NaiveDate {
    match task.status() {
        TaskStatus::Watchlist { since } => since,
        TaskStatus::Completed { on } => on,
        // Partitioning keeps active tasks out of the checkpoint sections.
        TaskStatus::Active => NaiveDate::MIN,
    }
}
