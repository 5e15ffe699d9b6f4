use crate::config::LoggerConfig;
use crate::error::{LoggerError, LoggerResult};
use tracing_subscriber::EnvFilter;

/// Build the level filter: `RUST_LOG` wins over the configured level.
///
/// # Errors
///
/// Returns [`LoggerError::InvalidFilter`] when the configured level is not a
/// valid filter directive.
pub fn build_filter(config: &LoggerConfig) -> LoggerResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggerError::InvalidFilter(format!("{}: {e}", config.log_level)))
}

/// Install the global subscriber. Logs go to stderr so the interactive
/// shell's stdout stays clean.
///
/// # Errors
///
/// Fails on an invalid level or if a global subscriber is already set.
pub fn init(config: &LoggerConfig) -> LoggerResult<()> {
    let filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialised(e.to_string()))
}
