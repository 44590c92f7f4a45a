//! Clap definitions for the `kboard` command tree.

use crate::kanban::domain::{
    BoardAssignment, BoardId, FieldUpdate, KanbanDomainError, Priority, TaskPatch, TaskTitle,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Board identifier accepted by `task edit --board` to move a task back to
/// the backlog.
pub const UNASSIGN_BOARD_SENTINEL: i32 = -1;

/// Personal kanban boards in the terminal.
#[derive(Debug, Parser)]
#[command(name = "kboard", version, propagate_version = true)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create and initialise the data file.
    Configure,
    /// Display tasks that have no board.
    Backlog,
    /// Manage boards.
    #[command(subcommand)]
    Board(BoardCommand),
    /// Manage tasks.
    #[command(subcommand)]
    Task(TaskCommand),
}

/// Board subcommands.
#[derive(Debug, Subcommand)]
pub enum BoardCommand {
    /// List existing boards.
    Ls,
    /// Create a new board.
    Add {
        /// Board name.
        name: String,
    },
    /// Rename a board.
    Rename {
        /// Board ID.
        id: i32,
        /// New name.
        name: String,
    },
    /// Delete a board and every task on it.
    Rm {
        /// Board ID.
        id: i32,
        /// Delete without asking for confirmation.
        #[arg(short, long)]
        force: bool,
    },
    /// Display a board and its tasks.
    Show {
        /// Board ID.
        id: i32,
    },
    /// Delete completed tasks from a board.
    Clean {
        /// Board ID.
        id: i32,
        /// Delete without asking for confirmation.
        #[arg(short, long)]
        force: bool,
    },
}

/// Task subcommands.
#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Add a new task, optionally on a board.
    Add {
        /// Task title.
        title: String,
        /// Task priority (low, normal, high).
        #[arg(short, long, default_value_t = Priority::Normal)]
        priority: Priority,
        /// Task custom tag.
        #[arg(short, long)]
        tag: Option<String>,
        /// Task due date (YYYY-MM-DD).
        #[arg(short = 'd', long = "due")]
        due: Option<NaiveDate>,
        /// Board ID to assign to the task.
        #[arg(short, long)]
        board: Option<i32>,
    },
    /// Edit task attributes; omitted options are left unchanged.
    Edit {
        /// Task ID.
        id: i32,
        /// Fields to change.
        #[command(flatten)]
        options: EditOptions,
    },
    /// Move a task along the workflow.
    ///
    /// Negative steps move the task backwards.
    Mv {
        /// Task ID.
        id: i32,
        /// Number of steps to move.
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        steps: i32,
    },
    /// Delete a task.
    Rm {
        /// Task ID.
        id: i32,
        /// Delete without asking for confirmation.
        #[arg(short, long)]
        force: bool,
    },
}

/// Options of `task edit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct EditOptions {
    /// New task title.
    #[arg(long)]
    pub title: Option<String>,
    /// New task priority (low, normal, high).
    #[arg(short, long)]
    pub priority: Option<Priority>,
    /// New tag; an empty value removes it.
    #[arg(short, long)]
    pub tag: Option<String>,
    /// New due date (YYYY-MM-DD).
    #[arg(short = 'd', long = "due", conflicts_with = "no_due")]
    pub due: Option<NaiveDate>,
    /// Remove the due date.
    #[arg(long)]
    pub no_due: bool,
    /// New board ID (-1 moves the task to the backlog).
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "unassign")]
    pub board: Option<i32>,
    /// Move the task to the backlog.
    #[arg(long)]
    pub unassign: bool,
}

impl EditOptions {
    /// Converts the options into a task patch.
    ///
    /// # Errors
    ///
    /// Returns [`KanbanDomainError::EmptyTaskTitle`] when a blank title is
    /// given.
    pub fn into_patch(self) -> Result<TaskPatch, KanbanDomainError> {
        let Self {
            title,
            priority,
            tag,
            due,
            no_due,
            board,
            unassign,
        } = self;

        let mut patch = TaskPatch::new();
        if let Some(new_title) = title {
            patch = patch.with_title(TaskTitle::new(new_title)?);
        }
        if let Some(new_priority) = priority {
            patch = patch.with_priority(new_priority);
        }
        if let Some(new_tag) = tag {
            patch = patch.with_tag(new_tag);
        }

        let due_date = match (due, no_due) {
            (Some(date), _) => FieldUpdate::Set(date),
            (None, true) => FieldUpdate::Clear,
            (None, false) => FieldUpdate::Keep,
        };
        let assignment = match (board, unassign) {
            (_, true) | (Some(UNASSIGN_BOARD_SENTINEL), false) => BoardAssignment::Unassign,
            (Some(id), false) => BoardAssignment::Assign(BoardId::new(id)),
            (None, false) => BoardAssignment::Keep,
        };
        Ok(patch.with_due_date(due_date).with_board(assignment))
    }
}
