//! Port contracts for the kanban tracker.
//!
//! Ports define storage-agnostic interfaces used by the board and task
//! services. Every operation runs inside whatever transaction the caller
//! has opened on the underlying store; ports never commit.

pub mod repository;

pub use repository::{BoardRepository, RepositoryError, RepositoryResult, TaskRepository};
