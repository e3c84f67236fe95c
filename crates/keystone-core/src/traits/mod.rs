//! Core traits implemented by components built on Keystone.

pub mod service;

pub use service::Service;
