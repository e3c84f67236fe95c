//! The status/message half of the result contract, shared by
//! [`StatusResult`](super::StatusResult) and [`StatusReport`](super::StatusReport).

use super::kind::Status;

/// Optional diagnostic message accepted by the compound setters.
///
/// Strings set the message. `()` and `None` leave the current message as it
/// is.
pub trait MessageArg {
    /// Convert into the message to store, if any.
    fn into_message(self) -> Option<String>;
}

impl MessageArg for () {
    fn into_message(self) -> Option<String> {
        None
    }
}

impl MessageArg for &str {
    fn into_message(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl MessageArg for String {
    fn into_message(self) -> Option<String> {
        Some(self)
    }
}

impl MessageArg for &String {
    fn into_message(self) -> Option<String> {
        Some(self.clone())
    }
}

impl MessageArg for Option<String> {
    fn into_message(self) -> Option<String> {
        self
    }
}

/// Generates the `is_status_*` predicate and `set_status_to_*` setter for
/// each status variant.
macro_rules! per_status_methods {
    ($( $variant:ident => $is:ident, $set:ident; )*) => {
        $(
            #[doc = concat!("Whether the status is [`Status::", stringify!($variant), "`].")]
            fn $is(&self) -> bool {
                self.get_status() == Status::$variant
            }

            #[doc = concat!("Set the status to [`Status::", stringify!($variant), "`].")]
            fn $set(&mut self) {
                self.set_status(Status::$variant);
            }
        )*
    };
}

/// Anything carrying a [`Status`] and a diagnostic message.
pub trait HasStatus {
    /// Current status.
    fn get_status(&self) -> Status;

    /// Replace the status.
    fn set_status(&mut self, status: Status);

    /// Current diagnostic message.
    fn get_message(&self) -> &str;

    /// Replace the diagnostic message.
    fn set_message(&mut self, message: impl Into<String>);

    /// Set the status and, when given, the message. Any value is left as is.
    fn set_to_status_without_value(&mut self, status: Status, message: impl MessageArg) {
        self.set_status(status);
        if let Some(message) = message.into_message() {
            self.set_message(message);
        }
    }

    /// Mark as `Good`, optionally setting the message.
    fn set_to_good_status_without_value(&mut self, message: impl MessageArg) {
        self.set_to_status_without_value(Status::Good, message);
    }

    /// Mark as `Bad`, optionally setting the message.
    fn set_to_bad_status_without_value(&mut self, message: impl MessageArg) {
        self.set_to_status_without_value(Status::Bad, message);
    }

    per_status_methods! {
        Good => is_status_good, set_status_to_good;
        Bad => is_status_bad, set_status_to_bad;
        Info => is_status_info, set_status_to_info;
        Debug => is_status_debug, set_status_to_debug;
        Warning => is_status_warning, set_status_to_warning;
        Exception => is_status_exception, set_status_to_exception;
        Error => is_status_error, set_status_to_error;
    }

    /// Whether the status is `Good`, `Info` or `Debug`.
    fn is_status_safe(&self) -> bool {
        self.get_status().is_safe()
    }

    /// Whether the status is `Bad`, `Warning` or `Error`.
    fn is_status_unsafe(&self) -> bool {
        self.get_status().is_unsafe()
    }

    /// Emit a tracing event for `operation` at a level matching the status.
    fn log(&self, operation: &str) {
        let status = self.get_status();
        let message = self.get_message();
        match status {
            Status::Good | Status::Info => {
                tracing::info!(operation, %status, detail = message, "Operation finished")
            }
            Status::Debug => {
                tracing::debug!(operation, %status, detail = message, "Operation finished")
            }
            Status::Bad | Status::Warning => {
                tracing::warn!(operation, %status, detail = message, "Operation finished")
            }
            Status::Error | Status::Exception => {
                tracing::error!(operation, %status, detail = message, "Operation finished")
            }
        }
    }
}
