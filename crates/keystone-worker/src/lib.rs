//! Shared worker pool and the asynchronous status forms for Keystone.
//!
//! This crate provides:
//! - [`WorkerPool`], the single pool every asynchronous form schedules onto
//! - [`TaskHandle`], the future those forms return
//! - Form C (`spawn_checked`, `spawn_capture`) and Form D
//!   (`spawn_with_callback`) on the pool
//! - [`status_forms!`], which generates all four forms for a component method

pub mod forms;
pub mod handle;
pub mod macros;
pub mod pool;
pub mod stats;

pub use keystone_core;

pub use handle::TaskHandle;
pub use pool::WorkerPool;
pub use stats::PoolStats;
