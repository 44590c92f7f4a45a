//! `SQLite` adapters for kanban persistence.
//!
//! The store borrows a connection that the caller has already placed inside
//! a transaction; committing or rolling back stays with the caller.

mod connection;
mod models;
mod repository;
mod schema;

pub use connection::{SqliteSetupError, initialize_schema, open_connection};
pub use repository::SqliteKanbanStore;
