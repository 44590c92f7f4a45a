//! Rendering of board lists and kanban views.

use super::{COLUMN_WIDTH, fit, task_cell};
use crate::kanban::domain::{BoardSnapshot, StatusColumns, Task};
use mockable::Clock;

const COLUMN_SEPARATOR: &str = " | ";

/// Renders the list of boards with their active task counts.
#[must_use]
pub fn board_list(boards: &[BoardSnapshot]) -> String {
    if boards.is_empty() {
        return "Boards\n  (none)".to_owned();
    }
    let mut lines = vec!["Boards".to_owned()];
    lines.extend(boards.iter().map(|snapshot| {
        format!(
            "  [{}] {} ({})",
            snapshot.id(),
            snapshot.name(),
            snapshot.active_task_count()
        )
    }));
    lines.join("\n")
}

/// Renders one board as a kanban view.
#[must_use]
pub fn board_view(snapshot: &BoardSnapshot, clock: &impl Clock) -> String {
    let title = format!("[{}] {}", snapshot.id(), snapshot.name());
    kanban(&title, snapshot.tasks(), clock)
}

/// Renders the backlog as a kanban view.
#[must_use]
pub fn backlog_view(tasks: &[Task], clock: &impl Clock) -> String {
    kanban("Backlog", tasks, clock)
}

/// Renders tasks as four status columns under a title.
#[must_use]
pub fn kanban(title: &str, tasks: &[Task], clock: &impl Clock) -> String {
    let columns = StatusColumns::group(tasks);
    let cells: Vec<Vec<String>> = columns
        .iter()
        .map(|(_, column)| column_lines(column, clock))
        .collect();
    let depth = cells.iter().map(Vec::len).max().unwrap_or_default();

    let header: Vec<String> = columns
        .iter()
        .map(|(status, column)| format!("{} ({})", status.label(), column.len()))
        .collect();
    let rule = vec!["-".repeat(COLUMN_WIDTH); header.len()];

    let mut lines = vec![title.to_owned(), row(&header), row(&rule)];
    for index in 0..depth {
        let cells_at: Vec<String> = cells
            .iter()
            .map(|column| column.get(index).cloned().unwrap_or_default())
            .collect();
        lines.push(row(&cells_at));
    }
    lines.join("\n")
}

fn column_lines(tasks: &[&Task], clock: &impl Clock) -> Vec<String> {
    let mut lines = Vec::new();
    for (position, task) in tasks.iter().enumerate() {
        if position > 0 {
            lines.push(String::new());
        }
        lines.extend(task_cell(task, clock));
    }
    lines
}

/// Joins padded cells, dropping empty trailing ones.
fn row(cells: &[String]) -> String {
    let used = cells
        .iter()
        .rposition(|cell| !cell.is_empty())
        .map_or(0, |last| last + 1);
    cells
        .iter()
        .take(used)
        .map(|cell| format!("{:<width$}", fit(cell, COLUMN_WIDTH), width = COLUMN_WIDTH))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
        .trim_end()
        .to_owned()
}
