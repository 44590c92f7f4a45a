//! `SQLite` repository implementation for boards and tasks.

use super::{
    models::{BoardRow, NewBoardRow, NewTaskRow, TaskChangeset, TaskRow},
    schema::{boards, tasks},
};
use crate::kanban::{
    domain::{
        Board, BoardDraft, BoardId, BoardName, PersistedTaskData, Priority, Status, Task,
        TaskDraft, TaskId, TaskTitle,
    },
    ports::{BoardRepository, RepositoryError, RepositoryResult, TaskRepository},
};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Mutex;
use tracing::trace;

/// `SQLite`-backed store implementing both kanban repositories.
///
/// The store borrows a connection for the lifetime of one command. Callers
/// open a transaction on the connection first and commit or roll it back
/// after the service calls return.
pub struct SqliteKanbanStore<'conn> {
    connection: Mutex<&'conn mut SqliteConnection>,
}

impl<'conn> SqliteKanbanStore<'conn> {
    /// Creates a store over a borrowed connection.
    #[must_use]
    pub const fn new(connection: &'conn mut SqliteConnection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    fn with_connection<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T>,
    {
        let mut guard = self.connection.lock().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        f(&mut guard)
    }
}

impl BoardRepository for SqliteKanbanStore<'_> {
    fn list_all(&self) -> RepositoryResult<Vec<Board>> {
        self.with_connection(|connection| {
            let rows = boards::table
                .order(boards::id.asc())
                .select(BoardRow::as_select())
                .load::<BoardRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_board).collect()
        })
    }

    fn find_by_id(&self, id: BoardId) -> RepositoryResult<Option<Board>> {
        self.with_connection(|connection| {
            let row = boards::table
                .find(id.value())
                .select(BoardRow::as_select())
                .first::<BoardRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_board).transpose()
        })
    }

    fn add(&self, draft: BoardDraft) -> RepositoryResult<Board> {
        self.with_connection(|connection| {
            let new_row = NewBoardRow {
                name: draft.name().as_str(),
            };
            let id = diesel::insert_into(boards::table)
                .values(&new_row)
                .returning(boards::id)
                .get_result::<i32>(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(draft.into_board(BoardId::new(id)))
        })
    }

    fn update(&self, board: &Board) -> RepositoryResult<()> {
        let id = board.id();
        self.with_connection(|connection| {
            let updated_count = diesel::update(boards::table.find(id.value()))
                .set(boards::name.eq(board.name().as_str()))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            if updated_count == 0 {
                return Err(RepositoryError::BoardNotFound(id));
            }
            Ok(())
        })
    }

    fn delete(&self, id: BoardId) -> RepositoryResult<()> {
        self.with_connection(|connection| {
            let deleted_count = diesel::delete(boards::table.find(id.value()))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(RepositoryError::BoardNotFound(id));
            }
            Ok(())
        })
    }
}

impl TaskRepository for SqliteKanbanStore<'_> {
    fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        self.with_connection(|connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(RepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
    }

    fn add(&self, draft: TaskDraft) -> RepositoryResult<Task> {
        self.with_connection(|connection| {
            let new_row = NewTaskRow {
                title: draft.title().as_str(),
                priority: draft.priority().ordinal(),
                tag: draft.tag(),
                status: draft.status().ordinal(),
                due_date: draft.due_date(),
                board_id: draft.board_id().map(BoardId::value),
            };
            let id = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(tasks::id)
                .get_result::<i32>(connection)
                .map_err(RepositoryError::persistence)?;
            Ok(draft.into_task(TaskId::new(id)))
        })
    }

    fn update(&self, task: &Task) -> RepositoryResult<()> {
        let id = task.id();
        self.with_connection(|connection| {
            let changes = TaskChangeset {
                title: task.title().as_str(),
                priority: task.priority().ordinal(),
                tag: task.tag(),
                status: task.status().ordinal(),
                due_date: task.due_date(),
                board_id: task.board_id().map(BoardId::value),
            };
            let updated_count = diesel::update(tasks::table.find(id.value()))
                .set(&changes)
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            if updated_count == 0 {
                return Err(RepositoryError::TaskNotFound(id));
            }
            Ok(())
        })
    }

    fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        self.with_connection(|connection| {
            let deleted_count = diesel::delete(tasks::table.find(id.value()))
                .execute(connection)
                .map_err(RepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(RepositoryError::TaskNotFound(id));
            }
            Ok(())
        })
    }

    fn list_backlog(&self) -> RepositoryResult<Vec<Task>> {
        self.with_connection(|connection| {
            let rows = tasks::table
                .filter(tasks::board_id.is_null())
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
    }

    fn list_by_board(&self, board_id: BoardId) -> RepositoryResult<Vec<Task>> {
        self.with_connection(|connection| {
            let rows = tasks::table
                .filter(tasks::board_id.eq(board_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(RepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
    }

    fn delete_completed_under(&self, board_id: BoardId) -> RepositoryResult<usize> {
        self.with_connection(|connection| {
            let removed = diesel::delete(
                tasks::table
                    .filter(tasks::board_id.eq(board_id.value()))
                    .filter(tasks::status.eq(Status::Completed.ordinal())),
            )
            .execute(connection)
            .map_err(RepositoryError::persistence)?;
            trace!(board_id = %board_id, removed, "bulk-deleted completed tasks");
            Ok(removed)
        })
    }
}

fn row_to_board(row: BoardRow) -> RepositoryResult<Board> {
    let BoardRow { id, name } = row;
    let parsed_name = BoardName::new(name).map_err(RepositoryError::invalid_persisted_data)?;
    Ok(Board::from_persisted(BoardId::new(id), parsed_name))
}

fn row_to_task(row: TaskRow) -> RepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        priority,
        tag,
        status,
        due_date,
        board_id,
    } = row;

    let parsed_title = TaskTitle::new(title).map_err(RepositoryError::invalid_persisted_data)?;
    let parsed_priority =
        Priority::try_from(priority).map_err(RepositoryError::invalid_persisted_data)?;
    let parsed_status =
        Status::try_from(status).map_err(RepositoryError::invalid_persisted_data)?;

    let data = PersistedTaskData {
        id: TaskId::new(id),
        title: parsed_title,
        priority: parsed_priority,
        tag,
        status: parsed_status,
        due_date,
        board_id: board_id.map(BoardId::new),
    };
    Ok(Task::from_persisted(data))
}
