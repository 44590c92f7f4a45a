//! In-memory store implementing both kanban repositories.
//!
//! Boards and tasks live in ordered maps keyed by identifier, so listing
//! order matches insertion order. Deleting a board removes its tasks in the
//! same write, matching the referential cascade of the relational store.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::kanban::{
    domain::{Board, BoardDraft, BoardId, Status, Task, TaskDraft, TaskId},
    ports::{BoardRepository, RepositoryError, RepositoryResult, TaskRepository},
};

/// Thread-safe in-memory kanban store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKanbanStore {
    state: Arc<RwLock<InMemoryKanbanState>>,
}

#[derive(Debug, Default)]
struct InMemoryKanbanState {
    boards: BTreeMap<BoardId, Board>,
    tasks: BTreeMap<TaskId, Task>,
    last_board_id: i32,
    last_task_id: i32,
}

impl InMemoryKanbanStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, InMemoryKanbanState>> {
        self.state.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, InMemoryKanbanState>> {
        self.state.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Advances an identifier sequence and returns the new value.
fn next_id(last: &mut i32) -> RepositoryResult<i32> {
    let next = last
        .checked_add(1)
        .ok_or_else(|| RepositoryError::persistence(std::io::Error::other("id space exhausted")))?;
    *last = next;
    Ok(next)
}

/// Collects the tasks matching a predicate in identifier order.
fn collect_tasks(state: &InMemoryKanbanState, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
    state
        .tasks
        .values()
        .filter(|task| predicate(task))
        .cloned()
        .collect()
}

impl BoardRepository for InMemoryKanbanStore {
    fn list_all(&self) -> RepositoryResult<Vec<Board>> {
        let state = self.read()?;
        Ok(state.boards.values().cloned().collect())
    }

    fn find_by_id(&self, id: BoardId) -> RepositoryResult<Option<Board>> {
        let state = self.read()?;
        Ok(state.boards.get(&id).cloned())
    }

    fn add(&self, draft: BoardDraft) -> RepositoryResult<Board> {
        let mut state = self.write()?;
        let id = BoardId::new(next_id(&mut state.last_board_id)?);
        let board = draft.into_board(id);
        state.boards.insert(id, board.clone());
        Ok(board)
    }

    fn update(&self, board: &Board) -> RepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .boards
            .get_mut(&board.id())
            .ok_or(RepositoryError::BoardNotFound(board.id()))?;
        *stored = board.clone();
        Ok(())
    }

    fn delete(&self, id: BoardId) -> RepositoryResult<()> {
        let mut state = self.write()?;
        if state.boards.remove(&id).is_none() {
            return Err(RepositoryError::BoardNotFound(id));
        }
        state.tasks.retain(|_, task| task.board_id() != Some(id));
        Ok(())
    }
}

impl TaskRepository for InMemoryKanbanStore {
    fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    fn add(&self, draft: TaskDraft) -> RepositoryResult<Task> {
        let mut state = self.write()?;
        let id = TaskId::new(next_id(&mut state.last_task_id)?);
        let task = draft.into_task(id);
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    fn update(&self, task: &Task) -> RepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(RepositoryError::TaskNotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }

    fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::TaskNotFound(id))
    }

    fn list_backlog(&self) -> RepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(collect_tasks(&state, Task::is_in_backlog))
    }

    fn list_by_board(&self, board_id: BoardId) -> RepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(collect_tasks(&state, |task| task.board_id() == Some(board_id)))
    }

    fn delete_completed_under(&self, board_id: BoardId) -> RepositoryResult<usize> {
        let mut state = self.write()?;
        let before = state.tasks.len();
        state.tasks.retain(|_, task| {
            task.board_id() != Some(board_id) || task.status() != Status::Completed
        });
        Ok(before.saturating_sub(state.tasks.len()))
    }
}
