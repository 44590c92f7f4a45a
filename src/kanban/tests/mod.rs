//! Unit tests for the kanban module.
//!
//! Service tests run against the in-memory store; failure paths that must
//! not write are checked against mocked repositories.

mod mocks;
