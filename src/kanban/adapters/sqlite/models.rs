//! Diesel row models for kanban persistence.

use super::schema::{boards, tasks};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for board records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = boards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BoardRow {
    /// Board identifier.
    pub id: i32,
    /// Board display name.
    pub name: String,
}

/// Insert model for board records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = boards)]
pub struct NewBoardRow<'a> {
    /// Board display name.
    pub name: &'a str,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Priority ordinal.
    pub priority: i32,
    /// Tag, empty when unset.
    pub tag: String,
    /// Status ordinal.
    pub status: i32,
    /// Due date.
    pub due_date: Option<NaiveDate>,
    /// Owning board.
    pub board_id: Option<i32>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow<'a> {
    /// Task title.
    pub title: &'a str,
    /// Priority ordinal.
    pub priority: i32,
    /// Tag, empty when unset.
    pub tag: &'a str,
    /// Status ordinal.
    pub status: i32,
    /// Due date.
    pub due_date: Option<NaiveDate>,
    /// Owning board.
    pub board_id: Option<i32>,
}

/// Full-row changeset for task updates; `None` writes `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset<'a> {
    /// Task title.
    pub title: &'a str,
    /// Priority ordinal.
    pub priority: i32,
    /// Tag, empty when unset.
    pub tag: &'a str,
    /// Status ordinal.
    pub status: i32,
    /// Due date.
    pub due_date: Option<NaiveDate>,
    /// Owning board.
    pub board_id: Option<i32>,
}
