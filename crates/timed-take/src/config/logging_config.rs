use crate::config::{DEFAULT_LOG_FILTER, default_log_filter};

use serde::{Deserialize, Serialize};

/// Log filtering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tracing env-filter directives, e.g. `"timed_take=debug"`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
