//! # keystone-core
//!
//! Core crate for Keystone. Contains the status-carrying result types, the
//! synchronous status boundary (Form A and Form B), the unified error
//! system, configuration schemas, logging setup and explicit service wiring.
//!
//! This crate has **no** internal dependencies on other Keystone crates.

pub mod boundary;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod result;
pub mod shared;
pub mod status;
pub mod traits;

pub use boundary::{capture, fill, fill_with, succeeded};
pub use error::{AppError, ErrorKind};
pub use registry::ServiceRegistry;
pub use result::AppResult;
pub use shared::SharedState;
pub use status::{HasStatus, MessageArg, Status, StatusReport, StatusResult};
pub use traits::Service;
