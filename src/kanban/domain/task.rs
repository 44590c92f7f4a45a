//! Task aggregate and its unsaved draft.

use super::{
    BoardAssignment, BoardId, FieldUpdate, KanbanDomainError, Priority, Status, TaskId, TaskPatch,
    TaskTitle,
};
use chrono::NaiveDate;

/// Unit of work that moves across a board, or sits in the backlog when it
/// has no board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    priority: Priority,
    tag: String,
    status: Status,
    due_date: Option<NaiveDate>,
    board_id: Option<BoardId>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted tag; empty when the task has none.
    pub tag: String,
    /// Persisted workflow status.
    pub status: Status,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Owning board, or `None` for backlog tasks.
    pub board_id: Option<BoardId>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            priority: data.priority,
            tag: data.tag,
            status: data.status,
            due_date: data.due_date,
            board_id: data.board_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the tag, empty when the task has none.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the owning board, or `None` when the task is in the backlog.
    #[must_use]
    pub const fn board_id(&self) -> Option<BoardId> {
        self.board_id
    }

    /// Returns `true` when the task has no board.
    #[must_use]
    pub const fn is_in_backlog(&self) -> bool {
        self.board_id.is_none()
    }

    /// Returns `true` unless the task is completed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status != Status::Completed
    }

    /// Applies every field the patch supplies and leaves the rest untouched.
    ///
    /// Board assignments are applied as given; callers resolve the target
    /// board before patching.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        let TaskPatch {
            title,
            priority,
            tag,
            due_date,
            board,
        } = patch;

        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_priority) = priority {
            self.priority = new_priority;
        }
        if let Some(new_tag) = tag {
            self.tag = new_tag;
        }
        match due_date {
            FieldUpdate::Keep => {}
            FieldUpdate::Set(date) => self.due_date = Some(date),
            FieldUpdate::Clear => self.due_date = None,
        }
        match board {
            BoardAssignment::Keep => {}
            BoardAssignment::Unassign => self.board_id = None,
            BoardAssignment::Assign(board_id) => self.board_id = Some(board_id),
        }
    }

    /// Moves the task along the workflow by a signed number of steps.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanDomainError::InvalidStatusTransition`] when the
    /// destination falls outside the workflow. The status is left unchanged.
    pub fn move_by(&mut self, steps: i32) -> Result<Status, KanbanDomainError> {
        let target = self
            .status
            .offset(steps)
            .ok_or(KanbanDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                steps,
            })?;
        self.status = target;
        Ok(target)
    }
}

/// Unsaved task; the store assigns its identifier on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    priority: Priority,
    tag: String,
    due_date: Option<NaiveDate>,
    board_id: Option<BoardId>,
}

impl TaskDraft {
    /// Creates a backlog draft with default priority, no tag and no due date.
    #[must_use]
    pub fn new(title: TaskTitle) -> Self {
        Self {
            title,
            priority: Priority::default(),
            tag: String::new(),
            due_date: None,
            board_id: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Binds the draft to a board.
    #[must_use]
    pub const fn on_board(mut self, board_id: BoardId) -> Self {
        self.board_id = Some(board_id);
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the status every new task starts in.
    #[must_use]
    pub const fn status(&self) -> Status {
        Status::ToDo
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the target board, if any.
    #[must_use]
    pub const fn board_id(&self) -> Option<BoardId> {
        self.board_id
    }

    /// Turns the draft into a stored task with the assigned identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        let status = self.status();
        Task {
            id,
            title: self.title,
            priority: self.priority,
            tag: self.tag,
            status,
            due_date: self.due_date,
            board_id: self.board_id,
        }
    }
}
