use std::fmt;

use crate::recorder::Countdown;

/// Opaque identifier for the destination a take will be written to.
///
/// The controller never interprets the name; it only threads the handle
/// through transitions and hands it to the capture device and the take
/// store. Equality and hashing follow the name, so a store can key its
/// bookkeeping on the handle directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TakeHandle {
    name: String,
}

impl TakeHandle {
    /// Create a handle for the given destination name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// The destination name this handle refers to.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TakeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Lifecycle of one timed take.
///
/// Exactly one variant is active at any instant, and each variant carries
/// only the data valid in that state. A target handle cannot exist while
/// idle, and neither countdown can outlive the state that owns it -- the
/// eight raw combinations of "handle set, arm countdown running, capture
/// countdown running" collapse to these three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingState {
    /// No take in progress.
    Idle,
    /// A take was requested; the arm countdown runs before capture begins.
    WaitingToRecord {
        /// Destination the take will be captured into.
        target: TakeHandle,
        /// Arm countdown; its elapse starts capture.
        countdown: Countdown,
    },
    /// Capture is running; the capture countdown bounds its duration.
    Recording {
        /// Destination the take is being captured into.
        target: TakeHandle,
        /// Capture countdown; its elapse completes the take.
        countdown: Countdown,
    },
}

impl RecordingState {
    /// Whether no take is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, RecordingState::Idle)
    }

    /// The target of the in-flight take, if any.
    pub fn target(&self) -> Option<&TakeHandle> {
        match self {
            RecordingState::Idle => None,
            RecordingState::WaitingToRecord { target, .. }
            | RecordingState::Recording { target, .. } => Some(target),
        }
    }

    /// The countdown owned by the current state, if any.
    pub fn countdown(&self) -> Option<&Countdown> {
        match self {
            RecordingState::Idle => None,
            RecordingState::WaitingToRecord { countdown, .. }
            | RecordingState::Recording { countdown, .. } => Some(countdown),
        }
    }
}

impl Default for RecordingState {
    fn default() -> Self {
        Self::Idle
    }
}
