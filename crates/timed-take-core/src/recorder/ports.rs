//! Collaborator seams the controller sequences.
//!
//! The state machine owns the ordering of calls -- which collaborator is
//! told what, in which state -- while the collaborators own the actual
//! effects (device control, storage, clocks). Implementations report
//! failures as `RecorderError`; the controller logs them and keeps the
//! transition well-defined regardless.

use crate::{
    CoreResult,
    recorder::{Countdown, TakeHandle},
};

/// Device that captures audio into a target.
pub trait CaptureDevice {
    /// Begin capturing into `target`.
    fn start_capture(&mut self, target: &TakeHandle) -> CoreResult<()>;

    /// Stop the in-progress capture.
    fn stop_capture(&mut self) -> CoreResult<()>;
}

/// Storage authority for take targets.
///
/// The caller mints handles; the store only needs to be able to get rid of
/// one when a take is cancelled before completing.
pub trait TakeStore {
    /// Delete whatever has been prepared or written for `target`.
    fn discard(&mut self, target: &TakeHandle) -> CoreResult<()>;
}

/// Clock collaborator that runs countdowns.
///
/// A scheduler delivers exactly one elapsed notification per armed
/// countdown, identified by the countdown's id. Disarming a countdown that
/// already fired must be tolerated: the notification may still be in
/// flight, and the controller's id check will reject it.
pub trait CountdownScheduler {
    /// Start the clock on `countdown`.
    fn arm(&mut self, countdown: &Countdown) -> CoreResult<()>;

    /// Stop the clock on `countdown` so it never elapses.
    fn disarm(&mut self, countdown: &Countdown) -> CoreResult<()>;
}
