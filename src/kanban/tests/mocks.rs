//! Mock repositories for checking that failed operations never write.

use crate::kanban::{
    domain::{Board, BoardDraft, BoardId, Task, TaskDraft, TaskId},
    ports::{BoardRepository, RepositoryResult, TaskRepository},
};
use mockall::mock;

mock! {
    pub Boards {}

    impl BoardRepository for Boards {
        fn list_all(&self) -> RepositoryResult<Vec<Board>>;
        fn find_by_id(&self, id: BoardId) -> RepositoryResult<Option<Board>>;
        fn add(&self, draft: BoardDraft) -> RepositoryResult<Board>;
        fn update(&self, board: &Board) -> RepositoryResult<()>;
        fn delete(&self, id: BoardId) -> RepositoryResult<()>;
    }
}

mock! {
    pub Tasks {}

    impl TaskRepository for Tasks {
        fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;
        fn add(&self, draft: TaskDraft) -> RepositoryResult<Task>;
        fn update(&self, task: &Task) -> RepositoryResult<()>;
        fn delete(&self, id: TaskId) -> RepositoryResult<()>;
        fn list_backlog(&self) -> RepositoryResult<Vec<Task>>;
        fn list_by_board(&self, board_id: BoardId) -> RepositoryResult<Vec<Task>>;
        fn delete_completed_under(&self, board_id: BoardId) -> RepositoryResult<usize>;
    }
}
