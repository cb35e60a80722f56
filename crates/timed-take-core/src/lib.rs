//! Timed-take Core Library
//!
//! Finite-state controller for countdown-armed, duration-bounded audio
//! takes. A take moves through exactly three states: idle, waiting to
//! record (a five-second arm countdown), and recording (a ten-second
//! capture countdown). Each state carries only the data valid in it, so a
//! target handle or a running countdown cannot exist while idle. The
//! controller sequences three collaborator seams -- capture device, take
//! store, countdown scheduler -- and a half-transitioned or contradictory
//! state is unrepresentable.
//!
//! # Example
//!
//! ```
//! use timed_take_core::{
//!     CaptureDevice, CoreResult, Countdown, CountdownScheduler, RecordingController,
//!     TakeHandle, TakeStore,
//! };
//!
//! struct Device;
//! impl CaptureDevice for Device {
//!     fn start_capture(&mut self, _target: &TakeHandle) -> CoreResult<()> {
//!         Ok(())
//!     }
//!     fn stop_capture(&mut self) -> CoreResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! struct Store;
//! impl TakeStore for Store {
//!     fn discard(&mut self, _target: &TakeHandle) -> CoreResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! struct Clock;
//! impl CountdownScheduler for Clock {
//!     fn arm(&mut self, _countdown: &Countdown) -> CoreResult<()> {
//!         Ok(())
//!     }
//!     fn disarm(&mut self, _countdown: &Countdown) -> CoreResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut controller = RecordingController::new(Device, Store, Clock);
//! controller.start_recording(TakeHandle::new("take-01.wav"));
//! assert!(!controller.state().is_idle());
//! controller.cancel();
//! assert!(controller.state().is_idle());
//! ```

mod error;
mod recorder;

pub use {
    error::{RecorderError, Result as CoreResult},
    recorder::{
        ARM_DURATION, CAPTURE_DURATION, CaptureDevice, Countdown, CountdownId, CountdownPhase,
        CountdownScheduler, RecordingController, RecordingState, TakeHandle, TakeStore,
    },
};

#[cfg(test)]
mod tests;
