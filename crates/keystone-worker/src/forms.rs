//! Asynchronous status forms: Form C (future) and Form D (future plus
//! callback).
//!
//! Both schedule the synchronous boundary from
//! [`keystone_core::boundary`] on a [`WorkerPool`], so neither an error nor
//! a panic inside an operation ever reaches the caller as anything but a
//! status.
//!
//! Form D ordering: the callback runs first, then the returned handle
//! resolves. Awaiting the handle therefore always observes the callback's
//! effects.

use std::panic::{self, AssertUnwindSafe};

use keystone_core::boundary::{self, panic_message};
use keystone_core::result::AppResult;
use keystone_core::status::{HasStatus, StatusResult};

use crate::handle::TaskHandle;
use crate::pool::WorkerPool;

impl WorkerPool {
    /// Form C: run `op` on the pool and resolve with whether it succeeded.
    ///
    /// On a closed pool the handle resolves immediately with `false`.
    pub fn spawn_checked<T, F>(&self, op: F) -> TaskHandle<bool>
    where
        T: Default + Send + 'static,
        F: FnOnce() -> AppResult<T> + Send + 'static,
    {
        self.dispatch("checked", move || boundary::succeeded(op))
            .unwrap_or_else(|_| TaskHandle::ready(false))
    }

    /// Form C returning the whole status result instead of a bool.
    ///
    /// On a closed pool the handle resolves immediately with a `Bad` result
    /// describing the refusal.
    pub fn spawn_capture<T, F>(&self, op: F) -> TaskHandle<StatusResult<T>>
    where
        T: Default + Send + 'static,
        F: FnOnce() -> AppResult<T> + Send + 'static,
    {
        self.dispatch("capture", move || boundary::capture(op))
            .unwrap_or_else(|err| TaskHandle::ready(StatusResult::from_error(&err)))
    }

    /// Form D: run `op` on the pool, hand its result to `callback`, and
    /// return a handle that resolves once the callback has returned.
    ///
    /// The outer result is `Good` with the handle when the work was
    /// scheduled, or `Bad` with no handle when the pool refused it. A
    /// panicking callback is logged; the handle still resolves.
    pub fn spawn_with_callback<T, F, C>(
        &self,
        op: F,
        callback: C,
    ) -> StatusResult<Option<TaskHandle<()>>>
    where
        T: Default + Send + 'static,
        F: FnOnce() -> AppResult<T> + Send + 'static,
        C: FnOnce(StatusResult<T>) + Send + 'static,
    {
        self.spawn_fill_with_callback(
            move |result: &mut StatusResult<T>| {
                let value = op()?;
                result.set_to_good_status_with_value(value, String::new());
                Ok(())
            },
            callback,
        )
    }

    /// Form D for operations that fill their own out-parameter (see
    /// [`boundary::fill_with`]).
    pub fn spawn_fill_with_callback<T, F, C>(
        &self,
        op: F,
        callback: C,
    ) -> StatusResult<Option<TaskHandle<()>>>
    where
        T: Default + Send + 'static,
        F: FnOnce(&mut StatusResult<T>) -> AppResult<()> + Send + 'static,
        C: FnOnce(StatusResult<T>) + Send + 'static,
    {
        let scheduled = self.dispatch("callback", move || {
            let mut result = StatusResult::new();
            boundary::fill_with(&mut result, op);
            let status = result.get_status();

            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| callback(result))) {
                tracing::error!(
                    %status,
                    "Completion callback panicked: {}",
                    panic_message(payload.as_ref())
                );
            }
        });

        match scheduled {
            Ok(handle) => StatusResult::good(Some(handle)),
            Err(err) => StatusResult::from_error(&err),
        }
    }
}
