//! Executes one parsed command against the data file.
//!
//! Every command that touches the data file runs in exactly one
//! transaction: the transaction commits only when the command returns
//! `Ok`, and any error rolls back everything the command registered.

use super::{BoardCommand, CliError, Command, TaskCommand};
use crate::config::Config;
use crate::kanban::{
    adapters::sqlite::{SqliteKanbanStore, initialize_schema, open_connection},
    domain::{BoardId, Task, TaskId},
    services::{AddTaskRequest, BoardService, TaskService},
};
use crate::render;
use diesel::Connection;
use diesel::sqlite::SqliteConnection;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Asks the user to confirm a destructive command.
pub trait Confirm {
    /// Returns `true` when the user agrees to `question`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the answer cannot be read.
    fn confirm(&mut self, question: &str) -> std::io::Result<bool>;
}

type SqliteBoardService<'conn> =
    BoardService<SqliteKanbanStore<'conn>, SqliteKanbanStore<'conn>>;
type SqliteTaskService<'conn> = TaskService<SqliteKanbanStore<'conn>, SqliteKanbanStore<'conn>>;

/// Services sharing one transaction-scoped store.
struct Services<'conn> {
    boards: SqliteBoardService<'conn>,
    tasks: SqliteTaskService<'conn>,
}

impl<'conn> Services<'conn> {
    fn new(connection: &'conn mut SqliteConnection) -> Self {
        let store = Arc::new(SqliteKanbanStore::new(connection));
        Self {
            boards: BoardService::new(Arc::clone(&store), Arc::clone(&store)),
            tasks: TaskService::new(Arc::clone(&store), store),
        }
    }
}

/// Runs a command and returns the text to print.
///
/// # Errors
///
/// Returns [`CliError`] when the command fails; nothing it changed is
/// committed.
pub fn run(
    command: Command,
    config: &Config,
    confirm: &mut impl Confirm,
    clock: &impl Clock,
) -> Result<String, CliError> {
    if let Some(question) = confirmation_for(&command)
        && !confirm.confirm(question)?
    {
        return Ok("Aborted.".to_owned());
    }

    debug!(?command, "running command");
    match command {
        Command::Configure => configure(config),
        Command::Backlog => in_transaction(config, |services| {
            let backlog = services.tasks.get_backlog()?;
            Ok(render::backlog_view(&backlog, clock))
        }),
        Command::Board(board_command) => in_transaction(config, |services| {
            execute_board(board_command, services, clock)
        }),
        Command::Task(task_command) => in_transaction(config, |services| {
            execute_task(task_command, services, clock)
        }),
    }
}

fn configure(config: &Config) -> Result<String, CliError> {
    let mut connection = open_connection(config.data_file())?;
    initialize_schema(&mut connection)?;
    info!(path = %config.data_file(), "configured data file");
    Ok(render::success("Data file created successfully."))
}

/// Opens the data file and runs `f` inside one transaction.
fn in_transaction<F>(config: &Config, f: F) -> Result<String, CliError>
where
    F: FnOnce(&Services<'_>) -> Result<String, CliError>,
{
    if !config.data_file().exists() {
        return Err(CliError::NotConfigured(config.data_file().to_owned()));
    }

    let mut connection = open_connection(config.data_file())?;
    connection.transaction::<_, CliError, _>(|transaction| f(&Services::new(transaction)))
}

const fn confirmation_for(command: &Command) -> Option<&'static str> {
    match command {
        Command::Board(BoardCommand::Rm { force: false, .. }) => {
            Some("Are you sure you want to delete the board?")
        }
        Command::Board(BoardCommand::Clean { force: false, .. }) => {
            Some("Are you sure you want to delete completed tasks?")
        }
        Command::Task(TaskCommand::Rm { force: false, .. }) => {
            Some("Are you sure you want to delete the task?")
        }
        _ => None,
    }
}

fn execute_board(
    command: BoardCommand,
    services: &Services<'_>,
    clock: &impl Clock,
) -> Result<String, CliError> {
    let boards = &services.boards;
    match command {
        BoardCommand::Ls => Ok(render::board_list(&boards.list_boards()?)),
        BoardCommand::Add { name } => {
            let created = boards.create_board(name)?;
            Ok(render::success(&format!(
                "Created board \"{}\" ({}).",
                created.name(),
                created.id()
            )))
        }
        BoardCommand::Rename { id, name } => {
            let renamed = boards.rename_board(BoardId::new(id), name)?;
            Ok(render::success(&format!(
                "Renamed board to \"{}\".",
                renamed.name()
            )))
        }
        BoardCommand::Rm { id, .. } => {
            let deleted = boards.delete_board(BoardId::new(id))?;
            Ok(render::success(&format!(
                "Deleted board \"{}\" and {} task(s).",
                deleted.name(),
                deleted.tasks().len()
            )))
        }
        BoardCommand::Show { id } => {
            let snapshot = boards.get_board(BoardId::new(id))?;
            Ok(render::board_view(&snapshot, clock))
        }
        BoardCommand::Clean { id, .. } => {
            let cleaned = boards.clean_completed_tasks(BoardId::new(id))?;
            Ok(render::board_view(&cleaned, clock))
        }
    }
}

fn execute_task(
    command: TaskCommand,
    services: &Services<'_>,
    clock: &impl Clock,
) -> Result<String, CliError> {
    let tasks = &services.tasks;
    let task = match command {
        TaskCommand::Add {
            title,
            priority,
            tag,
            due,
            board,
        } => {
            let mut request = AddTaskRequest::new(title).with_priority(priority);
            if let Some(new_tag) = tag {
                request = request.with_tag(new_tag);
            }
            if let Some(date) = due {
                request = request.with_due_date(date);
            }
            if let Some(board_id) = board {
                request = request.on_board(BoardId::new(board_id));
            }
            tasks.add_task(request)?
        }
        TaskCommand::Edit { id, options } => {
            tasks.edit_task(TaskId::new(id), options.into_patch()?)?
        }
        TaskCommand::Mv { id, steps } => tasks.move_task(TaskId::new(id), steps)?,
        TaskCommand::Rm { id, .. } => tasks.delete_task(TaskId::new(id))?,
    };
    render_task_home(&task, services, clock)
}

/// Renders the board a task lives on, or the backlog when it has none.
fn render_task_home(
    task: &Task,
    services: &Services<'_>,
    clock: &impl Clock,
) -> Result<String, CliError> {
    match task.board_id() {
        Some(board_id) => {
            let snapshot = services.boards.get_board(board_id)?;
            Ok(render::board_view(&snapshot, clock))
        }
        None => {
            let backlog = services.tasks.get_backlog()?;
            Ok(render::backlog_view(&backlog, clock))
        }
    }
}
