//! Errors surfaced by the command-line layer.

use crate::config::ConfigError;
use crate::kanban::{
    adapters::sqlite::SqliteSetupError,
    domain::KanbanDomainError,
    services::{BoardServiceError, TaskServiceError},
};
use camino::Utf8PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Errors returned while running a command.
///
/// Any error aborts the command's transaction, so nothing it registered is
/// committed.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The data file could not be opened or initialised.
    #[error(transparent)]
    Setup(#[from] SqliteSetupError),

    /// The data file does not exist yet.
    #[error("data file {0} does not exist; run `kboard configure` first")]
    NotConfigured(Utf8PathBuf),

    /// A board operation failed.
    #[error(transparent)]
    Board(#[from] BoardServiceError),

    /// A task operation failed.
    #[error(transparent)]
    Task(#[from] TaskServiceError),

    /// Command input failed domain validation.
    #[error(transparent)]
    Domain(#[from] KanbanDomainError),

    /// The transaction could not be opened or committed.
    #[error("storage failure: {0}")]
    Storage(#[from] diesel::result::Error),

    /// The confirmation prompt could not be read.
    #[error("failed to read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}

impl CliError {
    /// Returns `true` for failures caused by the command's input rather than
    /// by the environment or storage.
    #[must_use]
    pub const fn is_command_failure(&self) -> bool {
        matches!(
            self,
            Self::NotConfigured(_)
                | Self::Domain(_)
                | Self::Board(BoardServiceError::BoardNotFound(_) | BoardServiceError::Domain(_))
                | Self::Task(
                    TaskServiceError::TaskNotFound(_)
                        | TaskServiceError::BoardNotFound(_)
                        | TaskServiceError::Domain(_)
                )
        )
    }

    /// Returns the message shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Board(BoardServiceError::BoardNotFound(_))
            | Self::Task(TaskServiceError::BoardNotFound(_)) => "Board not found.".to_owned(),
            Self::Task(TaskServiceError::TaskNotFound(_)) => "Task not found.".to_owned(),
            Self::Task(TaskServiceError::Domain(
                KanbanDomainError::InvalidStatusTransition { steps, .. },
            )) => format!("Unable to move {steps} step(s)."),
            other => other.to_string(),
        }
    }

    /// Returns the process exit code for this failure.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_command_failure() {
            ExitCode::from(1)
        } else {
            ExitCode::from(2)
        }
    }
}
