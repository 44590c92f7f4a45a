//! Status messages printed after a command.

/// Formats a success message.
#[must_use]
pub fn success(message: &str) -> String {
    format!("Success: {message}")
}

/// Formats an error message.
#[must_use]
pub fn error(message: &str) -> String {
    format!("Error: {message}")
}
