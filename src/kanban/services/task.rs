//! Service layer for task use cases.

use crate::kanban::{
    domain::{
        BoardAssignment, BoardId, KanbanDomainError, Priority, Task, TaskDraft, TaskId, TaskPatch,
        TaskTitle,
    },
    ports::{BoardRepository, RepositoryError, TaskRepository},
};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request payload for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    priority: Priority,
    tag: String,
    due_date: Option<NaiveDate>,
    board_id: Option<BoardId>,
}

impl AddTaskRequest {
    /// Creates a backlog request with default priority, no tag and no due
    /// date.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
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

    /// Places the task on a board instead of the backlog.
    #[must_use]
    pub const fn on_board(mut self, board_id: BoardId) -> Self {
        self.board_id = Some(board_id);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The task identifier does not resolve.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The board identifier does not resolve.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),
    /// Domain validation failed, including out-of-range status moves.
    #[error(transparent)]
    Domain(#[from] KanbanDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task use-case orchestration service.
#[derive(Clone)]
pub struct TaskService<T, B>
where
    T: TaskRepository,
    B: BoardRepository,
{
    tasks: Arc<T>,
    boards: Arc<B>,
}

impl<T, B> TaskService<T, B>
where
    T: TaskRepository,
    B: BoardRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, boards: Arc<B>) -> Self {
        Self { tasks, boards }
    }

    /// Returns a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist.
    pub fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(id)?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    /// Adds a task, either to the backlog or to an existing board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is blank,
    /// [`TaskServiceError::BoardNotFound`] when the requested board does not
    /// exist, or [`TaskServiceError::Repository`] when persistence fails.
    pub fn add_task(&self, request: AddTaskRequest) -> TaskServiceResult<Task> {
        let AddTaskRequest {
            title,
            priority,
            tag,
            due_date,
            board_id,
        } = request;

        let mut draft = TaskDraft::new(TaskTitle::new(title)?)
            .with_priority(priority)
            .with_tag(tag);
        if let Some(date) = due_date {
            draft = draft.with_due_date(date);
        }
        if let Some(id) = board_id {
            self.ensure_board_exists(id)?;
            draft = draft.on_board(id);
        }

        let task = self.tasks.add(draft)?;
        debug!(task_id = %task.id(), board_id = ?task.board_id().map(BoardId::value), "added task");
        Ok(task)
    }

    /// Applies a partial update to a task.
    ///
    /// Only the fields the patch supplies are changed. A board assignment is
    /// resolved before anything is modified, so a missing board leaves the
    /// task untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist or [`TaskServiceError::BoardNotFound`] when the patch assigns a
    /// board that does not exist.
    pub fn edit_task(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let mut task = self.get_task(id)?;
        if patch.is_empty() {
            return Ok(task);
        }
        if let BoardAssignment::Assign(board_id) = patch.board() {
            self.ensure_board_exists(board_id)?;
        }

        task.apply_patch(patch);
        self.tasks.update(&task)?;
        debug!(task_id = %id, board_id = ?task.board_id().map(BoardId::value), "edited task");
        Ok(task)
    }

    /// Moves a task along the workflow by a signed number of steps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist, or [`TaskServiceError::Domain`] wrapping
    /// [`KanbanDomainError::InvalidStatusTransition`] when the destination
    /// falls outside the workflow. The stored status is left unchanged.
    pub fn move_task(&self, id: TaskId, steps: i32) -> TaskServiceResult<Task> {
        let mut task = self.get_task(id)?;
        let from = task.status();
        let to = task.move_by(steps)?;
        self.tasks.update(&task)?;
        debug!(task_id = %id, %from, %to, steps, "moved task");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// Returns the task as it was, including its former board reference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist.
    pub fn delete_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let task = self.get_task(id)?;
        self.tasks.delete(id)?;
        debug!(task_id = %id, "deleted task");
        Ok(task)
    }

    /// Returns every task without a board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub fn get_backlog(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.tasks.list_backlog()?)
    }

    fn ensure_board_exists(&self, id: BoardId) -> TaskServiceResult<()> {
        match self.boards.find_by_id(id)? {
            Some(_) => Ok(()),
            None => Err(TaskServiceError::BoardNotFound(id)),
        }
    }
}
