//! Checklist entries attached to tasks.

use serde::{Deserialize, Serialize};

/// Single checklist entry on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    text: String,
    done: bool,
}

impl Subtask {
    /// Creates an open subtask with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    /// Creates a subtask with an explicit completion flag.
    #[must_use]
    pub fn with_done(text: impl Into<String>, done: bool) -> Self {
        Self {
            text: text.into(),
            done,
        }
    }

    /// Returns the subtask text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the subtask is done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Marks the subtask done or reopens it.
    pub const fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}
