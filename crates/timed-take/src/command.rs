use timed_take_core::TakeHandle;

/// Commands sent from handles to the recorder service.
#[derive(Debug, Clone)]
pub enum RecorderCommand {
    /// Start a take into the given target, cancelling any take in flight.
    StartRecording {
        /// Destination the take will be captured into.
        target: TakeHandle,
    },
    /// Cancel the take in flight, if any.
    Cancel,
    /// Request service shutdown.
    Shutdown,
}
