//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;
use crate::error::AppError;

/// Install the global tracing subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `Ok(false)` when
/// a subscriber was already installed, which makes repeated calls (tests,
/// embedding applications) harmless.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            AppError::configuration(format!("Invalid log level '{}': {e}", config.level))
        })?,
    };

    let installed = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .with_thread_ids(true)
            .try_init()
            .is_ok(),
        "pretty" => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .try_init()
            .is_ok(),
        other => {
            return Err(AppError::configuration(format!(
                "Unknown log format '{other}'"
            )));
        }
    };

    if installed {
        tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    }
    Ok(installed)
}
