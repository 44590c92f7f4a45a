//! Service layer for board use cases.
//!
//! Provides [`BoardService`] which coordinates listing, creation, renaming,
//! deletion and cleanup of boards.

use crate::kanban::{
    domain::{Board, BoardDraft, BoardId, BoardName, BoardSnapshot, KanbanDomainError},
    ports::{BoardRepository, RepositoryError, TaskRepository},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The board identifier does not resolve.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] KanbanDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board use-case orchestration service.
#[derive(Clone)]
pub struct BoardService<B, T>
where
    B: BoardRepository,
    T: TaskRepository,
{
    boards: Arc<B>,
    tasks: Arc<T>,
}

impl<B, T> BoardService<B, T>
where
    B: BoardRepository,
    T: TaskRepository,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(boards: Arc<B>, tasks: Arc<T>) -> Self {
        Self { boards, tasks }
    }

    /// Returns every board with its owned tasks, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when persistence lookup
    /// fails.
    pub fn list_boards(&self) -> BoardServiceResult<Vec<BoardSnapshot>> {
        self.boards
            .list_all()?
            .into_iter()
            .map(|board| self.snapshot(board))
            .collect()
    }

    /// Returns a board with its owned tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the board does not
    /// exist.
    pub fn get_board(&self, id: BoardId) -> BoardServiceResult<BoardSnapshot> {
        let board = self.find_board_or_error(id)?;
        self.snapshot(board)
    }

    /// Creates a new, empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the name is blank, or
    /// [`BoardServiceError::Repository`] when the store rejects the insert.
    pub fn create_board(&self, name: impl Into<String>) -> BoardServiceResult<BoardSnapshot> {
        let board_name = BoardName::new(name)?;
        let board = self.boards.add(BoardDraft::new(board_name))?;
        debug!(board_id = %board.id(), name = %board.name(), "created board");
        Ok(BoardSnapshot::new(board, Vec::new()))
    }

    /// Renames a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the name is blank or
    /// [`BoardServiceError::BoardNotFound`] when the board does not exist.
    pub fn rename_board(
        &self,
        id: BoardId,
        name: impl Into<String>,
    ) -> BoardServiceResult<BoardSnapshot> {
        let board_name = BoardName::new(name)?;
        let mut board = self.find_board_or_error(id)?;
        board.rename(board_name);
        self.boards.update(&board)?;
        debug!(board_id = %id, name = %board.name(), "renamed board");
        self.snapshot(board)
    }

    /// Deletes a board together with every task it owns.
    ///
    /// Returns the board as it was before removal.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the board does not
    /// exist.
    pub fn delete_board(&self, id: BoardId) -> BoardServiceResult<BoardSnapshot> {
        let board = self.find_board_or_error(id)?;
        let before = self.snapshot(board)?;
        self.boards.delete(id)?;
        debug!(board_id = %id, cascaded = before.tasks().len(), "deleted board");
        Ok(before)
    }

    /// Removes every completed task from a board.
    ///
    /// The returned snapshot is read after the removal, so its tasks no
    /// longer include the completed ones.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the board does not
    /// exist.
    pub fn clean_completed_tasks(&self, id: BoardId) -> BoardServiceResult<BoardSnapshot> {
        let board = self.find_board_or_error(id)?;
        let removed = self.tasks.delete_completed_under(id)?;
        debug!(board_id = %id, removed, "cleaned completed tasks");
        self.snapshot(board)
    }

    fn find_board_or_error(&self, id: BoardId) -> BoardServiceResult<Board> {
        self.boards
            .find_by_id(id)?
            .ok_or(BoardServiceError::BoardNotFound(id))
    }

    fn snapshot(&self, board: Board) -> BoardServiceResult<BoardSnapshot> {
        let tasks = self.tasks.list_by_board(board.id())?;
        Ok(BoardSnapshot::new(board, tasks))
    }
}
