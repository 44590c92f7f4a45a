//! Domain model for the kanban tracker.
//!
//! Boards are named containers; tasks carry the board they belong to, or no
//! board when they sit in the backlog. All persistence concerns stay
//! outside the domain boundary.

mod board;
mod columns;
mod error;
mod ids;
mod name;
mod patch;
mod priority;
mod status;
mod task;

pub use board::{Board, BoardDraft, BoardSnapshot};
pub use columns::StatusColumns;
pub use error::{KanbanDomainError, ParsePriorityError, ParseStatusError};
pub use ids::{BoardId, TaskId};
pub use name::{BoardName, TaskTitle};
pub use patch::{BoardAssignment, FieldUpdate, TaskPatch};
pub use priority::Priority;
pub use status::Status;
pub use task::{PersistedTaskData, Task, TaskDraft};
