//! Connection bootstrap and schema initialization for the `SQLite` store.

use camino::Utf8Path;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use thiserror::Error;
use tracing::debug;

/// Statements creating the kanban tables. Safe to run repeatedly.
const SCHEMA_SQL: &str = concat!(
    "CREATE TABLE IF NOT EXISTS boards (",
    "id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, ",
    "name TEXT NOT NULL",
    "); ",
    "CREATE TABLE IF NOT EXISTS tasks (",
    "id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, ",
    "title TEXT NOT NULL, ",
    "priority INTEGER NOT NULL DEFAULT 2, ",
    "tag TEXT NOT NULL DEFAULT '', ",
    "status INTEGER NOT NULL DEFAULT 1 CHECK (status BETWEEN 1 AND 4), ",
    "due_date DATE, ",
    "board_id INTEGER REFERENCES boards (id) ON DELETE CASCADE",
    "); ",
    "CREATE INDEX IF NOT EXISTS idx_tasks_board_id ON tasks (board_id);",
);

/// Errors raised while opening or bootstrapping the data file.
#[derive(Debug, Error)]
pub enum SqliteSetupError {
    /// The data file could not be opened.
    #[error("failed to open data file {path}: {source}")]
    Connection {
        /// Location of the data file.
        path: String,
        /// Underlying connection failure.
        #[source]
        source: ConnectionError,
    },

    /// A bootstrap statement failed.
    #[error("failed to prepare data file: {0}")]
    Statement(#[from] diesel::result::Error),
}

/// Opens the data file with foreign-key enforcement enabled.
///
/// `SQLite` only honours `ON DELETE CASCADE` when foreign keys are switched
/// on for the connection, and the pragma has no effect inside a transaction,
/// so it is applied here before any transaction begins.
///
/// # Errors
///
/// Returns [`SqliteSetupError`] when the file cannot be opened or the pragma
/// fails.
pub fn open_connection(path: &Utf8Path) -> Result<SqliteConnection, SqliteSetupError> {
    let mut connection =
        SqliteConnection::establish(path.as_str()).map_err(|source| SqliteSetupError::Connection {
            path: path.to_string(),
            source,
        })?;
    connection.batch_execute("PRAGMA foreign_keys = ON;")?;
    debug!(path = %path, "opened data file");
    Ok(connection)
}

/// Creates the kanban tables when they do not exist yet.
///
/// # Errors
///
/// Returns [`SqliteSetupError::Statement`] when a statement fails.
pub fn initialize_schema(connection: &mut SqliteConnection) -> Result<(), SqliteSetupError> {
    connection.batch_execute(SCHEMA_SQL)?;
    debug!("initialized schema");
    Ok(())
}
