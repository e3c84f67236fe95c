//! Worker pool configuration.

use serde::{Deserialize, Serialize};

/// Largest accepted `max_concurrency`, matching the permit ceiling of
/// `tokio::sync::Semaphore`.
pub const MAX_CONCURRENCY: usize = usize::MAX >> 3;

/// Shared worker pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Runtime worker threads for an owned pool (0 = CPU count).
    #[serde(default)]
    pub worker_threads: usize,
    /// Maximum number of jobs running at once (0 = unbounded).
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Name given to the pool's threads.
    #[serde(default = "default_thread_name")]
    pub thread_name: String,
    /// Seconds to wait for in-flight jobs during shutdown.
    #[serde(default = "default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            max_concurrency: default_max_concurrency(),
            thread_name: default_thread_name(),
            shutdown_grace_seconds: default_shutdown_grace(),
        }
    }
}

impl WorkerConfig {
    /// Concurrency limit, or `None` when unbounded.
    pub fn concurrency_limit(&self) -> Option<usize> {
        (self.max_concurrency > 0).then_some(self.max_concurrency)
    }
}

fn default_max_concurrency() -> usize {
    8
}

fn default_thread_name() -> String {
    "keystone-worker".to_string()
}

fn default_shutdown_grace() -> u64 {
    30
}
