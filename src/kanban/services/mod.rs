//! Application services for board and task use cases.
//!
//! Services validate input, resolve references and register mutations with
//! the repositories. They never commit: the caller owns the transaction and
//! discards it whenever a service call fails.

mod board;
mod task;

pub use board::{BoardService, BoardServiceError, BoardServiceResult};
pub use task::{AddTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
