//! kboard: a personal kanban tracker for the terminal.
//!
//! Boards are named containers of tasks; tasks move through a fixed
//! four-stage workflow and sit in the backlog while they have no board.
//! Everything is stored in a single local `SQLite` file.
//!
//! # Architecture
//!
//! kboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`SQLite`, in-memory)
//!
//! # Modules
//!
//! - [`kanban`]: Entity model, repositories and services
//! - [`config`]: Data file location
//! - [`render`]: Plain-text board and backlog views
//! - [`cli`]: Command tree and per-command transaction handling

pub mod cli;
pub mod config;
pub mod kanban;
pub mod render;
