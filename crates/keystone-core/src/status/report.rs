//! Status and message without a payload.

use serde::{Deserialize, Serialize};

use super::kind::Status;
use super::traits::{HasStatus, MessageArg};
use crate::error::AppError;
use crate::result::AppResult;

/// Outcome of an operation that produces no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    status: Status,
    message: String,
}

impl StatusReport {
    /// A `Good` report with an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// A report with the given status and optional message.
    pub fn with_status(status: Status, message: impl MessageArg) -> Self {
        Self {
            status,
            message: message.into_message().unwrap_or_default(),
        }
    }

    /// Fold an operation result into a report.
    pub fn from_result(result: AppResult<()>) -> Self {
        match result {
            Ok(()) => Self::new(),
            Err(err) => Self::from(&err),
        }
    }

    /// `Ok(())` for a safe status, otherwise an error carrying the message.
    pub fn into_result(self) -> AppResult<()> {
        if self.status.is_safe() {
            Ok(())
        } else {
            Err(status_error(self.status, self.message))
        }
    }
}

impl HasStatus for StatusReport {
    fn get_status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn get_message(&self) -> &str {
        &self.message
    }

    fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl From<&AppError> for StatusReport {
    fn from(err: &AppError) -> Self {
        Self {
            status: err.status(),
            message: err.message.clone(),
        }
    }
}

/// Error produced when a non-safe status is turned back into a `Result`.
pub(crate) fn status_error(status: Status, message: String) -> AppError {
    let message = if message.is_empty() {
        format!("Operation finished with status {status}")
    } else {
        message
    };
    match status {
        Status::Exception => AppError::panicked(message),
        _ => AppError::internal(message),
    }
}
