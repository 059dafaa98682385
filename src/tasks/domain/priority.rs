//! Validated priority scale for tasks.

use super::TaskDomainError;
use std::fmt;

/// Task urgency on a 1 to 20 scale; higher is more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// Lowest representable priority.
    pub const MIN: Self = Self(1);

    /// Highest representable priority.
    pub const MAX: Self = Self(20);

    /// Priority assigned to newly created tasks when none is supplied.
    pub const DEFAULT: Self = Self(10);

    /// Ceiling for automatic escalation; also pinned on overdue tasks and
    /// rework returns from the watchlist.
    pub const ESCALATION_CAP: Self = Self(15);

    /// Floor applied by the startup check when a deadline is imminent.
    pub const IMMINENT_FLOOR: Self = Self(13);

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PriorityOutOfRange`] when the value falls
    /// outside the 1 to 20 scale.
    pub const fn new(value: u8) -> Result<Self, TaskDomainError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            return Err(TaskDomainError::PriorityOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Clamps an arbitrary persisted value onto the scale.
    ///
    /// Imported data may carry values outside the scale; loading clamps
    /// rather than rejects so the collection stays usable.
    #[must_use]
    pub fn saturating_from(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        u8::try_from(clamped).map_or(Self::MIN, Self)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Raises the priority by `step`, saturating at the escalation cap.
    ///
    /// Priorities already at or above the cap are returned unchanged.
    #[must_use]
    pub const fn escalate_by(self, step: u8) -> Self {
        if self.0 >= Self::ESCALATION_CAP.0 {
            return self;
        }
        let raised = self.0.saturating_add(step);
        if raised > Self::ESCALATION_CAP.0 {
            Self::ESCALATION_CAP
        } else {
            Self(raised)
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
