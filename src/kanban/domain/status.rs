//! Task workflow status.

use super::ParseStatusError;
use std::fmt;

/// Position of a task in the fixed four-stage workflow.
///
/// Statuses are ordered by their ordinal, starting at one. Tasks move along
/// the chain by signed offsets; any offset is legal as long as the
/// destination is one of the four stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// Work has not started.
    #[default]
    ToDo,
    /// Work is underway.
    InProgress,
    /// Work is awaiting review.
    Review,
    /// Work is finished.
    Completed,
}

impl Status {
    /// Every status in workflow order.
    pub const ALL: [Self; 4] = [Self::ToDo, Self::InProgress, Self::Review, Self::Completed];

    /// Returns the one-based workflow ordinal, also used as the storage value.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        match self {
            Self::ToDo => 1,
            Self::InProgress => 2,
            Self::Review => 3,
            Self::Completed => 4,
        }
    }

    /// Returns the status for a one-based ordinal, or `None` when it is out
    /// of range.
    #[must_use]
    pub const fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            1 => Some(Self::ToDo),
            2 => Some(Self::InProgress),
            3 => Some(Self::Review),
            4 => Some(Self::Completed),
            _ => None,
        }
    }

    /// Returns the status reached by moving `steps` stages from this one.
    ///
    /// Negative steps move backwards. Returns `None` when the destination
    /// falls outside the workflow; there is no clamping or wraparound.
    #[must_use]
    pub fn offset(self, steps: i32) -> Option<Self> {
        self.ordinal()
            .checked_add(steps)
            .and_then(Self::from_ordinal)
    }

    /// Returns the human-readable column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To do",
            Self::InProgress => "In progress",
            Self::Review => "Review",
            Self::Completed => "Completed",
        }
    }

    /// Returns the canonical machine-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "to_do" | "todo" => Ok(Self::ToDo),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<i32> for Status {
    type Error = ParseStatusError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or_else(|| ParseStatusError(value.to_string()))
    }
}
