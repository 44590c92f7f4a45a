//! Plain-text rendering of boards, the backlog and status messages.
//!
//! Renderers are pure: they take read results from the services and return
//! the text to print. The current date comes from a [`mockable::Clock`] so
//! due-date markers can be tested deterministically.

mod board;
mod message;
mod task;

pub use board::{backlog_view, board_list, board_view, kanban};
pub use message::{error, success};
pub use task::{DueState, due_state, task_cell};

/// Width of one kanban column, in characters.
pub const COLUMN_WIDTH: usize = 26;

/// Shortens `text` to at most `width` characters, marking the cut with an
/// ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
