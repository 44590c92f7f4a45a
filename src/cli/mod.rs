//! Command-line interface.
//!
//! [`args`] declares the command tree; [`dispatch`] runs one parsed command
//! against the data file inside a single transaction and returns the text to
//! print. The binary only wires these to the process.

pub mod args;
pub mod dispatch;
mod error;

pub use args::{BoardCommand, Cli, Command, EditOptions, TaskCommand};
pub use dispatch::{Confirm, run};
pub use error::CliError;
