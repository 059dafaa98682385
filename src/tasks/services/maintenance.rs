//! Startup maintenance passes over the task collection.
//!
//! Each pass is a standalone function over the loaded collection so every
//! rule stays independently testable. [`run_startup_passes`] composes them
//! in the order the engine guarantees: retention, watchlist timeout, then
//! the startup priority check.

use chrono::NaiveDate;

use crate::tasks::domain::{Priority, Task, TaskStatus, policy};

/// Counts of changes applied by one startup maintenance run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaintenanceReport {
    /// Completed tasks dropped by the retention sweep.
    pub purged: usize,
    /// Watchlist tasks auto-completed by the timeout sweep.
    pub auto_completed: usize,
    /// Tasks whose priority was raised or pinned by any pass.
    pub escalated: usize,
}

impl MaintenanceReport {
    /// Returns whether any pass changed the collection.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.purged > 0 || self.auto_completed > 0 || self.escalated > 0
    }
}

/// Drops completed tasks older than the retention window.
///
/// Returns the number of tasks removed.
pub fn retention_sweep(tasks: &mut Vec<Task>, today: NaiveDate) -> usize {
    let before = tasks.len();
    tasks.retain(|task| match task.status() {
        TaskStatus::Completed { on } => {
            today.signed_duration_since(on).num_days() <= policy::RETENTION_DAYS
        }
        TaskStatus::Active | TaskStatus::Watchlist { .. } => true,
    });
    before - tasks.len()
}

/// Auto-completes watchlist tasks whose check window has lapsed.
///
/// The watchlist checkpoint becomes the completion date, not today.
/// Returns the number of tasks completed.
pub fn watchlist_timeout_sweep(tasks: &mut [Task], today: NaiveDate) -> usize {
    let mut completed = 0;
    for task in tasks.iter_mut() {
        let TaskStatus::Watchlist { since } = task.status() else {
            continue;
        };
        let lapsed =
            today.signed_duration_since(since).num_days() >= policy::WATCHLIST_TIMEOUT_DAYS;
        if lapsed && task.confirm_watchlist().is_ok() {
            completed += 1;
        }
    }
    completed
}

/// Pins overdue active tasks to the escalation cap and floors imminent
/// ones.
///
/// A missed deadline forces the priority to exactly the cap, even where a
/// task sat above it. A deadline under two days away raises the priority
/// to at least the imminent floor. Values already satisfying a rule are
/// left untouched. Returns the number of tasks adjusted.
pub fn startup_priority_check(tasks: &mut [Task], today: NaiveDate) -> usize {
    let mut adjusted = 0;
    for task in tasks.iter_mut().filter(|task| task.status().is_active()) {
        let days = task.days_remaining(today);
        if days < 0 {
            if task.priority() != Priority::ESCALATION_CAP {
                task.set_priority(Priority::ESCALATION_CAP);
                adjusted += 1;
            }
        } else if days < policy::IMMINENT_WINDOW_DAYS && task.priority() < Priority::IMMINENT_FLOOR
        {
            task.set_priority(Priority::IMMINENT_FLOOR);
            adjusted += 1;
        }
    }
    adjusted
}

/// Escalates active tasks close to their deadline.
///
/// Runs after a completion, deletion, or timeout changes relative urgency
/// among the survivors. Each qualifying task gains one step, capped at
/// the escalation ceiling; tasks at or above the ceiling are left alone.
/// Returns the number of tasks escalated.
pub fn escalate_near_deadlines(tasks: &mut [Task], today: NaiveDate) -> usize {
    let mut escalated = 0;
    for task in tasks.iter_mut().filter(|task| task.status().is_active()) {
        if task.days_remaining(today) >= policy::ESCALATION_WINDOW_DAYS {
            continue;
        }
        let current = task.priority();
        if current >= Priority::ESCALATION_CAP {
            continue;
        }
        task.set_priority(current.escalate_by(policy::ESCALATION_STEP));
        escalated += 1;
    }
    escalated
}

/// Runs the startup maintenance passes in their guaranteed order.
///
/// Retention runs first, then the watchlist timeout, whose
/// auto-completions trigger the escalation pass, and finally the startup
/// priority check.
pub fn run_startup_passes(tasks: &mut Vec<Task>, today: NaiveDate) -> MaintenanceReport {
    let purged = retention_sweep(tasks, today);
    let auto_completed = watchlist_timeout_sweep(tasks, today);
    let mut escalated = 0;
    if auto_completed > 0 {
        escalated += escalate_near_deadlines(tasks, today);
    }
    escalated += startup_priority_check(tasks, today);
    MaintenanceReport {
        purged,
        auto_completed,
        escalated,
    }
}
