//! Board entity and the derived board view.

use super::{BoardId, BoardName, StatusColumns, Task};

/// Named container for tasks.
///
/// A board does not hold its tasks; ownership is recorded on each task's
/// board reference and read back through [`BoardSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    id: BoardId,
    name: BoardName,
}

impl Board {
    /// Reconstructs a board from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: BoardId, name: BoardName) -> Self {
        Self { id, name }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board name.
    #[must_use]
    pub const fn name(&self) -> &BoardName {
        &self.name
    }

    /// Replaces the board name.
    pub fn rename(&mut self, name: BoardName) {
        self.name = name;
    }
}

/// Unsaved board; the store assigns its identifier on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDraft {
    name: BoardName,
}

impl BoardDraft {
    /// Creates a draft with the given name.
    #[must_use]
    pub const fn new(name: BoardName) -> Self {
        Self { name }
    }

    /// Returns the draft name.
    #[must_use]
    pub const fn name(&self) -> &BoardName {
        &self.name
    }

    /// Turns the draft into a stored board with the assigned identifier.
    #[must_use]
    pub fn into_board(self, id: BoardId) -> Board {
        Board { id, name: self.name }
    }
}

/// A board together with the tasks it owns at the time of reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    board: Board,
    tasks: Vec<Task>,
}

impl BoardSnapshot {
    /// Pairs a board with its owned tasks.
    #[must_use]
    pub const fn new(board: Board, tasks: Vec<Task>) -> Self {
        Self { board, tasks }
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.board.id()
    }

    /// Returns the board name.
    #[must_use]
    pub const fn name(&self) -> &BoardName {
        self.board.name()
    }

    /// Returns the owned tasks in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of owned tasks that are not completed.
    #[must_use]
    pub fn active_task_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_active()).count()
    }

    /// Groups the owned tasks into workflow columns.
    #[must_use]
    pub fn columns(&self) -> StatusColumns<'_> {
        StatusColumns::group(&self.tasks)
    }

    /// Splits the snapshot into its board and tasks.
    #[must_use]
    pub fn into_parts(self) -> (Board, Vec<Task>) {
        (self.board, self.tasks)
    }
}
