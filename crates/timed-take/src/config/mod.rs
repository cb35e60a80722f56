use std::num::NonZeroUsize;

#[allow(clippy::module_inception)]
mod config;
mod logging_config;
mod service_config;

pub use {config::Config, logging_config::LoggingConfig, service_config::ServiceConfig};

pub(crate) const DEFAULT_COMMAND_BUFFER: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};
pub(crate) const DEFAULT_LOG_FILTER: &str = "timed_take=debug,timed_take_core=debug";

pub(crate) fn default_command_buffer() -> NonZeroUsize {
    DEFAULT_COMMAND_BUFFER
}

pub(crate) fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
