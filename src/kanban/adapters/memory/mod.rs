//! In-memory adapters for kanban persistence.

mod store;

pub use store::InMemoryKanbanStore;
