//! The synchronous status boundary: Form A (bool) and Form B (out-param).
//!
//! Operations are written once as `FnOnce() -> AppResult<T>`. The helpers
//! here run them so that neither an `Err` nor a panic escapes: both are
//! folded into the [`StatusResult`] handed to the caller.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::result::AppResult;
use crate::status::{HasStatus, Status, StatusResult};

/// Run `op` against an out-parameter it fills itself.
///
/// `op` may set any status it likes (an `Info` cache hit, a deliberate
/// `Bad`). Returning `Err` overwrites the status from the error kind with the
/// error text as message; a panic sets `Exception` with the panic text.
pub fn fill_with<T, F>(result: &mut StatusResult<T>, op: F)
where
    F: FnOnce(&mut StatusResult<T>) -> AppResult<()>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| op(&mut *result)));
    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            tracing::debug!(kind = %err.kind, "Operation returned an error: {}", err.message);
            result.set_to_status_without_value(err.status(), err.message);
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!("Caught panic at status boundary: {}", message);
            result.set_to_status_without_value(Status::Exception, message);
        }
    }
}

/// Form B: run `op` and record its outcome in `result`.
///
/// `Ok(value)` sets `Good` with the value and clears the message, so a
/// reused result never carries text from an earlier failure.
pub fn fill<T, F>(result: &mut StatusResult<T>, op: F)
where
    F: FnOnce() -> AppResult<T>,
{
    fill_with(result, |result| {
        let value = op()?;
        result.set_to_good_status_with_value(value, String::new());
        Ok(())
    });
}

/// Form B returning a fresh result instead of filling one.
pub fn capture<T, F>(op: F) -> StatusResult<T>
where
    T: Default,
    F: FnOnce() -> AppResult<T>,
{
    let mut result = StatusResult::new();
    fill(&mut result, op);
    result
}

/// Form A: run `op` through the boundary and report whether the outcome is
/// safe.
pub fn succeeded<T, F>(op: F) -> bool
where
    T: Default,
    F: FnOnce() -> AppResult<T>,
{
    capture(op).is_status_safe()
}

/// Text carried by a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
