//! Worker pool counters and their serializable snapshot.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Live counters shared between the pool and its jobs.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub(crate) submitted: AtomicU64,
    pub(crate) completed: AtomicU64,
    pub(crate) rejected: AtomicU64,
    pub(crate) aborted: AtomicU64,
    pub(crate) running: AtomicUsize,
}

impl Counters {
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Point-in-time view of a worker pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolStats {
    /// Pool name (its thread name).
    pub name: String,
    /// Jobs accepted for scheduling.
    pub submitted: u64,
    /// Jobs that ran to completion.
    pub completed: u64,
    /// Jobs refused because the pool was closed.
    pub rejected: u64,
    /// Jobs torn down before producing output.
    pub aborted: u64,
    /// Jobs accepted but not yet finished (queued or running).
    pub in_flight: usize,
    /// Jobs executing right now.
    pub running: usize,
    /// Concurrency limit, `None` when unbounded.
    pub capacity: Option<usize>,
    /// Whether the pool still accepts work.
    pub closed: bool,
    /// When the pool was created.
    pub started_at: DateTime<Utc>,
}
