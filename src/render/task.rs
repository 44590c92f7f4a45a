//! Rendering of a single task as a kanban card.

use super::{COLUMN_WIDTH, fit};
use crate::kanban::domain::{Priority, Status, Task};
use chrono::NaiveDate;
use mockable::Clock;

/// How a due date relates to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueState {
    /// Due later, or already completed.
    Upcoming,
    /// Due today.
    Today,
    /// Past due and not completed.
    Overdue,
}

/// Classifies a task's due date against `today`.
///
/// Returns `None` when the task has no due date.
#[must_use]
pub fn due_state(task: &Task, today: NaiveDate) -> Option<DueState> {
    let due = task.due_date()?;
    let state = if task.status() == Status::Completed || due > today {
        DueState::Upcoming
    } else if due == today {
        DueState::Today
    } else {
        DueState::Overdue
    };
    Some(state)
}

/// Renders a task as the lines of a kanban card, each fitting one column.
#[must_use]
pub fn task_cell(task: &Task, clock: &impl Clock) -> Vec<String> {
    let marker = match task.priority() {
        Priority::High => "[!] ",
        Priority::Normal => "",
        Priority::Low => "(low) ",
    };
    let mut lines = vec![fit(
        &format!("#{} {marker}{}", task.id(), task.title()),
        COLUMN_WIDTH,
    )];

    if !task.tag().is_empty() {
        lines.push(fit(&format!("({})", task.tag()), COLUMN_WIDTH));
    }

    if let Some(due) = task.due_date() {
        let suffix = match due_state(task, clock.local().date_naive()) {
            Some(DueState::Overdue) => " OVERDUE",
            Some(DueState::Today) => " TODAY",
            Some(DueState::Upcoming) | None => "",
        };
        lines.push(fit(&format!("due {due}{suffix}"), COLUMN_WIDTH));
    }

    lines
}
