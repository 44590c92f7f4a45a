//! Grouping of tasks into workflow columns.

use super::{Status, Task};

/// Tasks partitioned by status, one column per workflow stage.
///
/// All four columns are always present. Within a column tasks keep the
/// relative order they had in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusColumns<'a> {
    to_do: Vec<&'a Task>,
    in_progress: Vec<&'a Task>,
    review: Vec<&'a Task>,
    completed: Vec<&'a Task>,
}

impl<'a> StatusColumns<'a> {
    /// Partitions the tasks by status.
    #[must_use]
    pub fn group(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut columns = Self {
            to_do: Vec::new(),
            in_progress: Vec::new(),
            review: Vec::new(),
            completed: Vec::new(),
        };
        for task in tasks {
            columns.column_mut(task.status()).push(task);
        }
        columns
    }

    /// Returns the tasks holding the given status.
    #[must_use]
    pub fn column(&self, status: Status) -> &[&'a Task] {
        match status {
            Status::ToDo => &self.to_do,
            Status::InProgress => &self.in_progress,
            Status::Review => &self.review,
            Status::Completed => &self.completed,
        }
    }

    /// Iterates the columns in workflow order.
    pub fn iter(&self) -> impl Iterator<Item = (Status, &[&'a Task])> + '_ {
        Status::ALL
            .into_iter()
            .map(move |status| (status, self.column(status)))
    }

    /// Returns the length of the tallest column.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.iter()
            .map(|(_, tasks)| tasks.len())
            .max()
            .unwrap_or_default()
    }

    const fn column_mut(&mut self, status: Status) -> &mut Vec<&'a Task> {
        match status {
            Status::ToDo => &mut self.to_do,
            Status::InProgress => &mut self.in_progress,
            Status::Review => &mut self.review,
            Status::Completed => &mut self.completed,
        }
    }
}
