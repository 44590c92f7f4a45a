//! Repository ports for board and task persistence.

use crate::kanban::domain::{Board, BoardDraft, BoardId, Task, TaskDraft, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Board persistence contract.
pub trait BoardRepository: Send + Sync {
    /// Returns every board in store order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the store fails.
    fn list_all(&self) -> RepositoryResult<Vec<Board>>;

    /// Finds a board by identifier.
    ///
    /// Returns `None` when the board does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the store fails.
    fn find_by_id(&self, id: BoardId) -> RepositoryResult<Option<Board>>;

    /// Inserts a new board and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the store fails.
    fn add(&self, draft: BoardDraft) -> RepositoryResult<Board>;

    /// Persists changes to an existing board.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::BoardNotFound`] when the board does not
    /// exist.
    fn update(&self, board: &Board) -> RepositoryResult<()>;

    /// Deletes a board. The store removes every task the board owns.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::BoardNotFound`] when the board does not
    /// exist.
    fn delete(&self, id: BoardId) -> RepositoryResult<()>;
}

/// Task persistence contract.
pub trait TaskRepository: Send + Sync {
    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the store fails.
    fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Inserts a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the store fails.
    fn add(&self, draft: TaskDraft) -> RepositoryResult<Task>;

    /// Persists changes to an existing task (fields, status, board).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when the task does not
    /// exist.
    fn update(&self, task: &Task) -> RepositoryResult<()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when the task does not
    /// exist.
    fn delete(&self, id: TaskId) -> RepositoryResult<()>;

    /// Returns every task without a board, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the store fails.
    fn list_backlog(&self) -> RepositoryResult<Vec<Task>>;

    /// Returns every task owned by the board, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the store fails.
    fn list_by_board(&self, board_id: BoardId) -> RepositoryResult<Vec<Task>>;

    /// Removes every completed task owned by the board in a single
    /// set-based operation and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the store fails.
    fn delete_completed_under(&self, board_id: BoardId) -> RepositoryResult<usize>;
}

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The board was not found.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
