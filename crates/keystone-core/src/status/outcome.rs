//! [`StatusResult`]: a status, a value and a diagnostic message.

use serde::{Deserialize, Serialize};

use super::kind::Status;
use super::report::{StatusReport, status_error};
use super::traits::{HasStatus, MessageArg};
use crate::error::AppError;
use crate::result::AppResult;

/// Status-carrying return value.
///
/// The value is always present, even when the status is bad: a fresh result
/// holds `T::default()`, and callers may attach a value to a failed result
/// for diagnostics. Status, value and message are set independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult<T> {
    status: Status,
    value: T,
    message: String,
}

impl<T: Default> StatusResult<T> {
    /// A `Good` result holding the default value and an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// A result with the given status, a default value and an optional message.
    pub fn without_value(status: Status, message: impl MessageArg) -> Self {
        Self::with_value(status, T::default(), message)
    }

    /// Fold an operation result into a status result.
    ///
    /// `Ok` becomes `Good` with the value. `Err` keeps the default value and
    /// takes its status from the error kind and its message from the error.
    pub fn from_result(result: AppResult<T>) -> Self {
        match result {
            Ok(value) => Self::good(value),
            Err(err) => Self::from_error(&err),
        }
    }

    /// A result describing `err`.
    pub fn from_error(err: &AppError) -> Self {
        Self::without_value(err.status(), err.message.clone())
    }
}

impl<T> StatusResult<T> {
    /// A result with every field given.
    pub fn with_value(status: Status, value: T, message: impl MessageArg) -> Self {
        Self {
            status,
            value,
            message: message.into_message().unwrap_or_default(),
        }
    }

    /// A `Good` result holding `value`.
    pub fn good(value: T) -> Self {
        Self::with_value(Status::Good, value, ())
    }

    /// Borrow the value.
    pub fn get_value(&self) -> &T {
        &self.value
    }

    /// Mutably borrow the value.
    pub fn get_value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the value. Status and message are untouched.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Set status, value and, when given, message in one call.
    pub fn set_to_status_with_value(
        &mut self,
        status: Status,
        value: T,
        message: impl MessageArg,
    ) {
        self.status = status;
        self.value = value;
        if let Some(message) = message.into_message() {
            self.message = message;
        }
    }

    /// Mark as `Good` with `value`.
    pub fn set_to_good_status_with_value(&mut self, value: T, message: impl MessageArg) {
        self.set_to_status_with_value(Status::Good, value, message);
    }

    /// Mark as `Bad` while still attaching `value`.
    pub fn set_to_bad_status_with_value(&mut self, value: T, message: impl MessageArg) {
        self.set_to_status_with_value(Status::Bad, value, message);
    }

    /// Take the value, discarding status and message.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Split into status, value and message.
    pub fn into_parts(self) -> (Status, T, String) {
        (self.status, self.value, self.message)
    }

    /// Transform the value, keeping status and message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StatusResult<U> {
        StatusResult {
            status: self.status,
            value: f(self.value),
            message: self.message,
        }
    }

    /// Status and message without the value.
    pub fn report(&self) -> StatusReport {
        StatusReport::with_status(self.status, self.message.as_str())
    }

    /// `Ok(value)` for a safe status, otherwise an error carrying the message.
    ///
    /// `Exception` maps to a `Panicked` error, every other non-safe status to
    /// an `Internal` one.
    pub fn into_result(self) -> AppResult<T> {
        if self.status.is_safe() {
            Ok(self.value)
        } else {
            Err(status_error(self.status, self.message))
        }
    }
}

impl<T> HasStatus for StatusResult<T> {
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

impl<T: Default> From<AppResult<T>> for StatusResult<T> {
    fn from(result: AppResult<T>) -> Self {
        Self::from_result(result)
    }
}
