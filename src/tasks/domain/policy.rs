//! Policy constants for the escalation, retention, and timeout rules.

/// Completed tasks older than this many days are purged at startup.
pub const RETENTION_DAYS: i64 = 31;

/// Watchlist entries at least this many days old are auto-completed.
pub const WATCHLIST_TIMEOUT_DAYS: i64 = 14;

/// Below this many days to the deadline, the startup check floors priority.
pub const IMMINENT_WINDOW_DAYS: i64 = 2;

/// Below this many days to the deadline, the recalculation pass escalates.
pub const ESCALATION_WINDOW_DAYS: i64 = 10;

/// Priority increment applied by one recalculation pass.
pub const ESCALATION_STEP: u8 = 2;

/// Days added to today for the deadline of a rework return.
pub const REWORK_DEADLINE_OFFSET_DAYS: u64 = 1;

/// Subtask appended when a task returns from the watchlist for rework.
pub const REWORK_SUBTASK_TEXT: &str = "fix reported issue";

/// Calendar date format accepted at the input boundary.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";
