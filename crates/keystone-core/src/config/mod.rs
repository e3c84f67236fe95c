//! Application configuration schemas.
//!
//! Configuration is deserialized through the `config` crate from an
//! optional TOML file followed by `KEYSTONE__`-prefixed environment
//! variables. Every field has a default, so no source is required.

pub mod logging;
pub mod worker;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::logging::LoggingConfig;
pub use self::worker::{MAX_CONCURRENCY, WorkerConfig};

use crate::error::AppError;

/// Log formats understood by [`crate::logging::init_logging`].
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shared worker pool settings.
    #[serde(default)]
    pub worker: WorkerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the environment.
    ///
    /// When `path` is given the file must exist. Environment variables use
    /// the `KEYSTONE` prefix and `__` as separator, e.g.
    /// `KEYSTONE__WORKER__MAX_CONCURRENCY=4`.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        Self::load_with_env(path, None)
    }

    /// Like [`AppConfig::load`], but reads `KEYSTONE__` variables from `env`
    /// instead of the process environment when it is given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, AppError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            let name = path.to_str().ok_or_else(|| {
                AppError::configuration(format!("Config path is not UTF-8: {}", path.display()))
            })?;
            builder = builder.add_source(config::File::new(name, config::FileFormat::Toml));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("KEYSTONE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings no component could run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.worker.thread_name.trim().is_empty() {
            return Err(AppError::configuration("worker.thread_name must not be empty"));
        }
        if self.worker.max_concurrency > MAX_CONCURRENCY {
            return Err(AppError::configuration(format!(
                "worker.max_concurrency {} exceeds the limit of {}",
                self.worker.max_concurrency, MAX_CONCURRENCY
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(AppError::configuration(format!(
                "Unknown logging.format '{}', expected one of {:?}",
                self.logging.format, LOG_FORMATS
            )));
        }
        Ok(())
    }
}
