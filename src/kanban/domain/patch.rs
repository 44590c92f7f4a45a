//! Partial-update types for task edits.
//!
//! Every optional field distinguishes "leave as is" from "set": an absent
//! field never overwrites stored data, and a supplied value always does,
//! even when it is empty.

use super::{BoardId, Priority, TaskTitle};
use chrono::NaiveDate;

/// Change requested for a nullable field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Leave the stored value untouched.
    #[default]
    Keep,
    /// Replace the stored value.
    Set(T),
    /// Remove the stored value.
    Clear,
}

impl<T> FieldUpdate<T> {
    /// Returns `true` when no change is requested.
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

/// Change requested for a task's board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoardAssignment {
    /// Leave the task on its current board, or in the backlog.
    #[default]
    Keep,
    /// Move the task to the backlog.
    Unassign,
    /// Move the task onto the given board.
    Assign(BoardId),
}

/// Set of field changes applied to a task in one edit.
///
/// The default patch changes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub(super) title: Option<TaskTitle>,
    pub(super) priority: Option<Priority>,
    pub(super) tag: Option<String>,
    pub(super) due_date: FieldUpdate<NaiveDate>,
    pub(super) board: BoardAssignment,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the tag. An empty tag clears it.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the due-date change.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: FieldUpdate<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the board change.
    #[must_use]
    pub const fn with_board(mut self, board: BoardAssignment) -> Self {
        self.board = board;
        self
    }

    /// Returns the requested title, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskTitle> {
        self.title.as_ref()
    }

    /// Returns the requested priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the requested tag, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns the requested due-date change.
    #[must_use]
    pub const fn due_date(&self) -> FieldUpdate<NaiveDate> {
        self.due_date
    }

    /// Returns the requested board change.
    #[must_use]
    pub const fn board(&self) -> BoardAssignment {
        self.board
    }

    /// Returns `true` when applying the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.priority.is_none()
            && self.tag.is_none()
            && self.due_date.is_keep()
            && self.board == BoardAssignment::Keep
    }
}
