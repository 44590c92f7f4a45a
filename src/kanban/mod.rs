//! Boards, tasks and the backlog.
//!
//! This module holds the core of the tracker: the entity model, the
//! repository contracts it is persisted through, and the board and task
//! services the command line calls. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
