//! The future returned by every asynchronous status form.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;
use tokio::sync::oneshot;
use uuid::Uuid;

use keystone_core::error::AppError;
use keystone_core::result::AppResult;

pin_project! {
    /// Resolves with the output of a job scheduled on a
    /// [`WorkerPool`](crate::pool::WorkerPool).
    ///
    /// Awaiting yields `Err` only if the job was torn down before producing
    /// output (its runtime shut down underneath it). Jobs themselves never
    /// fail the handle: failures are encoded in the output.
    #[derive(Debug)]
    pub struct TaskHandle<T> {
        id: Uuid,
        #[pin]
        receiver: oneshot::Receiver<T>,
    }
}

impl<T> TaskHandle<T> {
    pub(crate) fn new(id: Uuid, receiver: oneshot::Receiver<T>) -> Self {
        Self { id, receiver }
    }

    /// A handle that is already resolved with `value`.
    pub fn ready(value: T) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(value);
        Self::new(Uuid::now_v7(), rx)
    }

    /// Identifier of the job, as it appears in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Block the current thread until the job finishes.
    ///
    /// For synchronous callers only: this panics when called from within an
    /// async runtime context, where `.await` must be used instead.
    pub fn wait(self) -> AppResult<T> {
        let id = self.id;
        self.receiver.blocking_recv().map_err(|_| dropped(id))
    }
}

impl<T> Future for TaskHandle<T> {
    type Output = AppResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let id = *this.id;
        this.receiver.poll(cx).map(|res| res.map_err(|_| dropped(id)))
    }
}

fn dropped(id: Uuid) -> AppError {
    AppError::internal(format!("Job {id} was dropped before completing"))
}
