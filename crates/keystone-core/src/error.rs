//! Unified error types for Keystone.
//!
//! Every operation built on the status convention reports failure through
//! [`AppError`]. At a boundary the error is folded into a
//! [`StatusResult`](crate::status::StatusResult) via [`ErrorKind::status`].

use std::fmt;
use thiserror::Error;

use crate::status::Status;

/// Error kind categorization used across the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input validation failed.
    Validation,
    /// The requested item was not found.
    NotFound,
    /// A conflict occurred (already initialized, duplicate entry, etc.).
    Conflict,
    /// An internal error occurred.
    Internal,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An I/O error occurred.
    Io,
    /// A panic was caught at a status boundary.
    Panicked,
    /// The worker pool no longer accepts work.
    PoolClosed,
    /// A lock guarding shared state was poisoned.
    LockPoisoned,
}

impl ErrorKind {
    /// The status an error of this kind produces when it is caught at a
    /// status boundary.
    pub fn status(self) -> Status {
        match self {
            Self::Panicked => Status::Exception,
            _ => Status::Bad,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Io => write!(f, "IO"),
            Self::Panicked => write!(f, "PANICKED"),
            Self::PoolClosed => write!(f, "POOL_CLOSED"),
            Self::LockPoisoned => write!(f, "LOCK_POISONED"),
        }
    }
}

/// The unified error used throughout Keystone.
///
/// Crate-specific errors are mapped into `AppError` using `From` impls or
/// explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an error describing a caught panic.
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Panicked, message)
    }

    /// Create a pool-closed error.
    pub fn pool_closed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PoolClosed, message)
    }

    /// Create a lock-poisoned error.
    pub fn lock_poisoned(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LockPoisoned, message)
    }

    /// The status this error produces at a status boundary.
    pub fn status(&self) -> Status {
        self.kind.status()
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_status_mapping() {
        assert_eq!(ErrorKind::Panicked.status(), Status::Exception);
        assert_eq!(ErrorKind::Validation.status(), Status::Bad);
        assert_eq!(ErrorKind::PoolClosed.status(), Status::Bad);
    }

    #[test]
    fn test_display() {
        let err = AppError::conflict("already initialized");
        assert_eq!(err.to_string(), "CONFLICT: already initialized");
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = io.into();
        assert_eq!(err.kind, ErrorKind::Io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.clone().source.is_none());
    }
}
