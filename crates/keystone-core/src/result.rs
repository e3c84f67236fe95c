//! Convenience result type alias for Keystone.

use crate::error::AppError;

/// A specialized `Result` type for Keystone operations.
///
/// Core operations return this; the status forms fold it into a
/// [`StatusResult`](crate::status::StatusResult) at the boundary.
pub type AppResult<T> = Result<T, AppError>;
