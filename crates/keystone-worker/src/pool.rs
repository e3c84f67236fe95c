//! The shared worker pool that runs every asynchronous status form.

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::{Semaphore, oneshot};
use tokio_util::task::TaskTracker;
use uuid::Uuid;

use keystone_core::config::WorkerConfig;
use keystone_core::error::AppError;
use keystone_core::result::AppResult;

use crate::handle::TaskHandle;
use crate::stats::{Counters, PoolStats};

/// Pool of workers executing synchronous jobs off the caller's thread.
///
/// Jobs run on the runtime's blocking threads. A bounded pool admits at most
/// `max_concurrency` jobs at a time; the rest wait for a permit in FIFO
/// order. Cloning is cheap and every clone schedules onto the same pool.
///
/// Jobs cannot be cancelled once scheduled. Closing the pool only stops new
/// work from being accepted.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    inner: Arc<PoolInner>,
}

#[derive(Debug)]
struct PoolInner {
    name: String,
    handle: Handle,
    /// Present when the pool owns its runtime.
    runtime: Option<Runtime>,
    limiter: Option<Arc<Semaphore>>,
    capacity: Option<usize>,
    tracker: TaskTracker,
    counters: Arc<Counters>,
    shutdown_grace: Duration,
    started_at: DateTime<Utc>,
}

impl Drop for PoolInner {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            // Does not block, so the last clone may be dropped anywhere.
            runtime.shutdown_background();
        }
    }
}

impl WorkerPool {
    /// Create a pool that owns a dedicated multi-thread runtime.
    pub fn new(config: &WorkerConfig) -> AppResult<Self> {
        let mut builder = Builder::new_multi_thread();
        builder.thread_name(config.thread_name.clone()).enable_all();
        if config.worker_threads > 0 {
            builder.worker_threads(config.worker_threads);
        }

        let runtime = builder.build().map_err(|e| {
            AppError::with_source(
                keystone_core::ErrorKind::Internal,
                "Failed to build worker runtime",
                e,
            )
        })?;
        let handle = runtime.handle().clone();
        Ok(Self::build(config, handle, Some(runtime)))
    }

    /// Create a pool scheduling onto an existing runtime.
    pub fn attach(handle: Handle, config: &WorkerConfig) -> Self {
        Self::build(config, handle, None)
    }

    /// Create a pool on the runtime the caller is running in.
    pub fn current(config: &WorkerConfig) -> AppResult<Self> {
        let handle = Handle::try_current()
            .map_err(|e| AppError::internal(format!("No tokio runtime to attach to: {e}")))?;
        Ok(Self::attach(handle, config))
    }

    fn build(config: &WorkerConfig, handle: Handle, runtime: Option<Runtime>) -> Self {
        let capacity = config.concurrency_limit().map(|n| {
            if n > Semaphore::MAX_PERMITS {
                tracing::warn!(
                    "Worker pool '{}' max_concurrency {} clamped to {}",
                    config.thread_name,
                    n,
                    Semaphore::MAX_PERMITS
                );
            }
            n.min(Semaphore::MAX_PERMITS)
        });
        tracing::info!(
            "Worker pool '{}' started (owned_runtime={}, max_concurrency={:?})",
            config.thread_name,
            runtime.is_some(),
            capacity
        );

        Self {
            inner: Arc::new(PoolInner {
                name: config.thread_name.clone(),
                handle,
                runtime,
                limiter: capacity.map(|n| Arc::new(Semaphore::new(n))),
                capacity,
                tracker: TaskTracker::new(),
                counters: Arc::new(Counters::default()),
                shutdown_grace: Duration::from_secs(config.shutdown_grace_seconds),
                started_at: Utc::now(),
            }),
        }
    }

    /// Pool name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Handle of the runtime the pool schedules onto.
    pub fn runtime_handle(&self) -> &Handle {
        &self.inner.handle
    }

    /// Whether the pool has stopped accepting work.
    pub fn is_closed(&self) -> bool {
        self.inner.tracker.is_closed()
    }

    /// Schedule `job` and return a handle resolving with its output.
    ///
    /// Returns `Err` with [`ErrorKind::PoolClosed`](keystone_core::ErrorKind::PoolClosed)
    /// if the pool no longer accepts work. A panic inside `job` is not
    /// caught here; the handle then resolves with an error. The status forms
    /// wrap jobs in the status boundary so that cannot happen.
    pub fn dispatch<T, F>(&self, label: &'static str, job: F) -> AppResult<TaskHandle<T>>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let inner = &self.inner;
        if inner.tracker.is_closed() {
            Counters::bump(&inner.counters.rejected);
            tracing::warn!(pool = %inner.name, label, "Rejected job: pool is closed");
            return Err(AppError::pool_closed(format!(
                "Worker pool '{}' is shut down",
                inner.name
            )));
        }

        let id = Uuid::now_v7();
        let (tx, rx) = oneshot::channel();
        let limiter = inner.limiter.clone();
        let counters = Arc::clone(&inner.counters);
        Counters::bump(&counters.submitted);
        tracing::debug!(job_id = %id, label, "Scheduling job");

        inner.tracker.spawn_on(
            async move {
                // The semaphore is never closed, so acquiring only waits.
                let _permit = match limiter {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                counters.running.fetch_add(1, Ordering::Relaxed);
                let output = tokio::task::spawn_blocking(job).await;
                counters.running.fetch_sub(1, Ordering::Relaxed);

                match output {
                    Ok(value) => {
                        Counters::bump(&counters.completed);
                        tracing::debug!(job_id = %id, label, "Job finished");
                        if tx.send(value).is_err() {
                            tracing::trace!(job_id = %id, "Job handle was dropped before completion");
                        }
                    }
                    Err(err) => {
                        Counters::bump(&counters.aborted);
                        tracing::error!(job_id = %id, label, "Job aborted: {}", err);
                    }
                }
            },
            &inner.handle,
        );

        Ok(TaskHandle::new(id, rx))
    }

    /// Stop accepting new work. Already scheduled jobs keep running.
    pub fn close(&self) {
        if self.inner.tracker.close() {
            tracing::info!("Worker pool '{}' closed to new work", self.inner.name);
        }
    }

    /// Close the pool and wait up to the configured grace period for
    /// in-flight jobs. Returns `true` when every job finished in time.
    pub async fn shutdown(&self) -> bool {
        self.shutdown_within(self.inner.shutdown_grace).await
    }

    /// Close the pool and wait up to `grace` for in-flight jobs.
    pub async fn shutdown_within(&self, grace: Duration) -> bool {
        self.close();
        let tracker = &self.inner.tracker;
        tracing::info!(
            "Worker pool '{}' waiting for {} in-flight jobs to complete...",
            self.inner.name,
            tracker.len()
        );

        match tokio::time::timeout(grace, tracker.wait()).await {
            Ok(()) => {
                tracing::info!("Worker pool '{}' shut down complete", self.inner.name);
                true
            }
            Err(_) => {
                tracing::warn!(
                    "Worker pool '{}' shut down with {} jobs still running after {:?}",
                    self.inner.name,
                    tracker.len(),
                    grace
                );
                false
            }
        }
    }

    /// Blocking variant of [`WorkerPool::shutdown`] for synchronous callers.
    ///
    /// Panics when called from within an async runtime context.
    pub fn shutdown_blocking(&self) -> bool {
        self.inner.handle.block_on(self.shutdown())
    }

    /// Snapshot of the pool's counters.
    pub fn stats(&self) -> PoolStats {
        let inner = &self.inner;
        let counters = &inner.counters;
        PoolStats {
            name: inner.name.clone(),
            submitted: counters.submitted.load(Ordering::Relaxed),
            completed: counters.completed.load(Ordering::Relaxed),
            rejected: counters.rejected.load(Ordering::Relaxed),
            aborted: counters.aborted.load(Ordering::Relaxed),
            in_flight: inner.tracker.len(),
            running: counters.running.load(Ordering::Relaxed),
            capacity: inner.capacity,
            closed: inner.tracker.is_closed(),
            started_at: inner.started_at,
        }
    }
}
