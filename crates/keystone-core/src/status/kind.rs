//! The coarse outcome classification carried by every status result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Outcome classification of an operation.
///
/// `Good`, `Info` and `Debug` are *safe*: the caller may proceed. `Bad`,
/// `Warning` and `Error` are *unsafe*: the caller has to handle them.
/// `Exception` marks a panic caught at a status boundary and belongs to
/// neither group, so callers that only check [`Status::is_safe`] still
/// refuse to proceed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The operation succeeded.
    #[default]
    Good,
    /// The operation failed deliberately (logic said no).
    Bad,
    /// Informational outcome; not a failure.
    Info,
    /// Diagnostic outcome; not a failure.
    Debug,
    /// The operation completed under a failure condition worth handling.
    Warning,
    /// A panic was caught while running the operation.
    Exception,
    /// The operation failed.
    Error,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Status; 7] = [
        Status::Good,
        Status::Bad,
        Status::Info,
        Status::Debug,
        Status::Warning,
        Status::Exception,
        Status::Error,
    ];

    /// Whether the status is one of `Good`, `Info` or `Debug`.
    pub fn is_safe(self) -> bool {
        matches!(self, Self::Good | Self::Info | Self::Debug)
    }

    /// Whether the status is one of `Bad`, `Warning` or `Error`.
    pub fn is_unsafe(self) -> bool {
        matches!(self, Self::Bad | Self::Warning | Self::Error)
    }

    /// Upper-case name used in logs and serialized forms.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::Bad => "BAD",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Warning => "WARNING",
            Self::Exception => "EXCEPTION",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::validation(format!("Unknown status '{s}'")))
    }
}
