//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use keystone_core::config::WorkerConfig;
use keystone_core::error::AppError;
use keystone_core::result::AppResult;
use keystone_core::shared::SharedState;
use keystone_core::traits::Service;
use keystone_worker::WorkerPool;

/// Key/value store used to exercise the status forms end to end.
#[derive(Debug, Default)]
pub struct KeyStore {
    initialized: AtomicBool,
    entries: SharedState<BTreeMap<String, String>>,
}

impl Service for KeyStore {}

impl KeyStore {
    /// One-time setup; a second call is a deliberate failure.
    pub fn init(&self) -> AppResult<()> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return Err(AppError::conflict("already initialized"));
        }
        Ok(())
    }

    /// Store `value` under `key`, returning the previous value if any.
    pub fn put(&self, key: String, value: String) -> AppResult<Option<String>> {
        if key.is_empty() {
            return Err(AppError::validation("key must not be empty"));
        }
        self.entries.write(|entries| entries.insert(key, value))
    }

    /// Fetch the value stored under `key`.
    pub fn get(&self, key: String) -> AppResult<String> {
        self.entries
            .read(|entries| entries.get(&key).cloned())?
            .ok_or_else(|| AppError::not_found(format!("no entry for '{key}'")))
    }

    /// Panics on purpose, standing in for a bug in a wrapped library.
    pub fn explode(&self, reason: String) -> AppResult<u32> {
        panic!("{reason}")
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read(|entries| entries.len()).unwrap_or(0)
    }
}

keystone_worker::status_forms! {
    impl KeyStore {
        fn init(&self) -> () => {
            checked: init_checked,
            into: init_into,
            spawn: init_spawn,
            spawn_with: init_spawn_with,
        };
        fn put(&self, key: String, value: String) -> Option<String> => {
            checked: put_checked,
            into: put_into,
            spawn: put_spawn,
            spawn_with: put_spawn_with,
        };
        fn get(&self, key: String) -> String => {
            checked: get_checked,
            into: get_into,
            spawn: get_spawn,
            spawn_with: get_spawn_with,
        };
        fn explode(&self, reason: String) -> u32 => {
            checked: explode_checked,
            into: explode_into,
            spawn: explode_spawn,
            spawn_with: explode_spawn_with,
        };
    }
}

/// Worker configuration used by the tests.
pub fn worker_config(max_concurrency: usize) -> WorkerConfig {
    WorkerConfig {
        max_concurrency,
        thread_name: "integration".to_string(),
        ..WorkerConfig::default()
    }
}

/// A pool attached to the test's runtime together with a fresh store.
pub fn attached() -> (WorkerPool, Arc<KeyStore>) {
    let pool = WorkerPool::current(&worker_config(4)).expect("Failed to attach pool");
    (pool, Arc::new(KeyStore::default()))
}
