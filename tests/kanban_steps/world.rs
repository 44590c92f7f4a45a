//! Shared world state for kanban BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use kboard::kanban::{
    adapters::memory::InMemoryKanbanStore,
    domain::{BoardId, BoardSnapshot, Task, TaskId},
    services::{BoardService, BoardServiceError, TaskService, TaskServiceError},
};
use rstest::fixture;

/// Board service used by the BDD world.
pub type TestBoardService = BoardService<InMemoryKanbanStore, InMemoryKanbanStore>;

/// Task service used by the BDD world.
pub type TestTaskService = TaskService<InMemoryKanbanStore, InMemoryKanbanStore>;

/// Scenario world for kanban behaviour tests.
pub struct KanbanWorld {
    pub boards: TestBoardService,
    pub tasks: TestTaskService,
    pub board_ids: HashMap<String, BoardId>,
    pub task_ids: HashMap<String, TaskId>,
    pub last_board_result: Option<Result<BoardSnapshot, BoardServiceError>>,
    pub last_task_result: Option<Result<Task, TaskServiceError>>,
}

impl KanbanWorld {
    /// Creates a world backed by an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryKanbanStore::new());
        Self {
            boards: BoardService::new(Arc::clone(&store), Arc::clone(&store)),
            tasks: TaskService::new(Arc::clone(&store), store),
            board_ids: HashMap::new(),
            task_ids: HashMap::new(),
            last_board_result: None,
            last_task_result: None,
        }
    }

    /// Looks up a board created earlier in the scenario by name.
    pub fn board_id(&self, name: &str) -> eyre::Result<BoardId> {
        self.board_ids
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown board {name:?} in scenario world"))
    }

    /// Looks up a task created earlier in the scenario by title.
    pub fn task_id(&self, title: &str) -> eyre::Result<TaskId> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task {title:?} in scenario world"))
    }

    /// Records the outcome of a task operation, keeping the world's ids in
    /// step with any successful change.
    pub fn record_task_result(&mut self, result: Result<Task, TaskServiceError>) {
        if let Ok(ref task) = result {
            self.task_ids
                .insert(task.title().as_str().to_owned(), task.id());
        }
        self.last_task_result = Some(result);
    }
}

impl Default for KanbanWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanWorld {
    KanbanWorld::default()
}

/// Splits a comma-separated list of titles from a step.
pub fn titles(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}
