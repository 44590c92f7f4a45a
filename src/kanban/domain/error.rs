//! Error types for kanban domain validation and parsing.

use super::{Status, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating kanban domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KanbanDomainError {
    /// The board name is empty after trimming.
    #[error("board name must not be empty")]
    EmptyBoardName,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// Moving the task by the requested steps leaves the workflow.
    #[error("cannot move task {task_id} {steps} step(s) from {from}")]
    InvalidStatusTransition {
        /// Task whose status was left unchanged.
        task_id: TaskId,
        /// Status the task held when the move was requested.
        from: Status,
        /// Signed step count that was requested.
        steps: i32,
    },
}

/// Error returned while parsing a task status from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing a task priority from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
