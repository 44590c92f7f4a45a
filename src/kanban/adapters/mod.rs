//! Adapter implementations for the kanban ports.

pub mod memory;
pub mod sqlite;
