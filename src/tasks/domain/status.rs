//! Task lifecycle status as a tagged variant.

use chrono::NaiveDate;

/// Lifecycle status of a task.
///
/// Exactly one status holds at a time. Persisted storage projects the
/// status onto two nullable checkpoint dates; [`Self::from_checkpoints`]
/// and [`Self::checkpoints`] map between the two representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task is being worked on.
    Active,
    /// Task awaits verification before completion.
    Watchlist {
        /// Date the task entered the watchlist.
        since: NaiveDate,
    },
    /// Task is finished; terminal apart from deletion.
    Completed {
        /// Date the task was completed.
        on: NaiveDate,
    },
}

impl TaskStatus {
    /// Derives the status from the persisted checkpoint dates.
    ///
    /// A completion date wins regardless of the watchlist date, so legacy
    /// records carrying both load as completed.
    #[must_use]
    pub const fn from_checkpoints(
        watchlist: Option<NaiveDate>,
        completed: Option<NaiveDate>,
    ) -> Self {
        match (completed, watchlist) {
            (Some(on), _) => Self::Completed { on },
            (None, Some(since)) => Self::Watchlist { since },
            (None, None) => Self::Active,
        }
    }

    /// Projects the status onto `(watchlist_date, completed_date)`.
    #[must_use]
    pub const fn checkpoints(self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        match self {
            Self::Active => (None, None),
            Self::Watchlist { since } => (Some(since), None),
            Self::Completed { on } => (None, Some(on)),
        }
    }

    /// Returns the display label for the status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Watchlist { .. } => "watchlist",
            Self::Completed { .. } => "completed",
        }
    }

    /// Returns whether the task is active.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns whether the task sits on the watchlist.
    #[must_use]
    pub const fn is_watchlist(self) -> bool {
        matches!(self, Self::Watchlist { .. })
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
