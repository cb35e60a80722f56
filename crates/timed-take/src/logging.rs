//! Tracing subscriber setup.

use crate::{ServiceError, ServiceResult, config::LoggingConfig};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// The filter comes from the `RUST_LOG` environment variable when set,
/// otherwise from the configured directives. Call once at startup; a second
/// call fails because the global subscriber is already set.
#[track_caller]
pub fn init(config: &LoggingConfig) -> ServiceResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(config)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ServiceError::LoggingInitFailed {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Parse the configured filter directives.
#[track_caller]
pub(crate) fn parse_filter(config: &LoggingConfig) -> ServiceResult<EnvFilter> {
    EnvFilter::try_new(&config.filter).map_err(|e| ServiceError::ConfigError {
        reason: format!("Invalid log filter {:?}: {}", config.filter, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
