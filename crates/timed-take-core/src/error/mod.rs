use error_location::ErrorLocation;
use thiserror::Error;

/// Collaborator errors with source location tracking.
///
/// The controller never returns these to its caller: it sequences
/// collaborator calls per state, logs any failure, and completes the
/// transition anyway. Implementations of the collaborator traits use
/// these variants to describe what went wrong on their side.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// Capture device refused to start or stop.
    #[error("Capture device error: {reason} {location}")]
    DeviceError {
        /// Description of the device failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Target handle could not be discarded.
    #[error("Target discard failed: {reason} {location}")]
    DiscardFailed {
        /// Description of the discard failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Countdown could not be armed or stopped.
    #[error("Countdown error: {reason} {location}")]
    CountdownError {
        /// Description of the scheduler failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;
