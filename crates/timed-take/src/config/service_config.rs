use crate::config::{DEFAULT_COMMAND_BUFFER, default_command_buffer};

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Recorder service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Capacity of the command channel between handles and the service.
    ///
    /// Nonzero by type: a config file with `command_buffer = 0` fails to
    /// parse instead of producing a mailbox that can never hold a command.
    #[serde(default = "default_command_buffer")]
    pub command_buffer: NonZeroUsize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}
