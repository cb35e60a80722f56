use crate::recorder::{
    CaptureDevice, Countdown, CountdownId, CountdownScheduler, RecordingState, TakeHandle,
    TakeStore,
};

use std::mem;

use tracing::{debug, error, info, instrument, warn};

/// Finite-state controller for one timed take.
///
/// Owns the state machine and the three collaborators, and is the only
/// code that mutates the state. The three valid states -- idle, waiting to
/// record, recording -- are mutually exclusive by construction, so no
/// defensive checks against half-set fields exist anywhere: an impossible
/// combination cannot be represented.
///
/// # Fallibility
///
/// Operations never return errors. Collaborator failures are logged and
/// absorbed; cancellation in particular always succeeds from the caller's
/// point of view.
///
/// # Thread Safety
///
/// The controller is NOT thread-safe and assumes a single logical owner
/// issuing one mutating call at a time. Embed it in an actor or behind an
/// exclusive lock; the `timed-take` crate's service wraps it in a mailbox
/// task and delivers countdown notifications through a channel.
pub struct RecordingController<D, S, C> {
    state: RecordingState,
    device: D,
    store: S,
    countdowns: C,
}

impl<D, S, C> RecordingController<D, S, C>
where
    D: CaptureDevice,
    S: TakeStore,
    C: CountdownScheduler,
{
    /// Creates a controller in the `Idle` state.
    #[instrument(skip(device, store, countdowns))]
    pub fn new(device: D, store: S, countdowns: C) -> Self {
        info!("RecordingController initialized");

        Self {
            state: RecordingState::Idle,
            device,
            store,
            countdowns,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &RecordingState {
        &self.state
    }

    /// Request a take into `target`.
    ///
    /// If a take is already in flight it is cancelled first -- starting
    /// while busy is "cancel, then start", never an error. On success the
    /// state is `WaitingToRecord` and the arm countdown is running; if the
    /// scheduler refuses to arm, the target is discarded and the state
    /// stays `Idle`.
    #[instrument(skip(self))]
    pub fn start_recording(&mut self, target: TakeHandle) {
        if !self.state.is_idle() {
            debug!(state = ?self.state, "Start requested while busy, cancelling current take");
            self.cancel();
        }

        let countdown = Countdown::arm();

        // Arm the countdown FIRST -- if this fails, the state stays Idle.
        // Entering WaitingToRecord with no countdown running would leave
        // the controller stuck there forever.
        if let Err(e) = self.countdowns.arm(&countdown) {
            error!(target = %target, error = ?e, "Failed to arm countdown, abandoning take");
            self.discard_target(&target);
            return;
        }

        info!(
            target = %target,
            countdown_id = %countdown.id(),
            "Take requested, waiting to record"
        );

        self.state = RecordingState::WaitingToRecord { target, countdown };
    }

    /// Deliver an elapsed notification for the countdown with `id`.
    ///
    /// Invoked by the runtime when a countdown fires. In `WaitingToRecord`
    /// a matching id starts capture and moves to `Recording` with a fresh
    /// capture countdown, preserving the target. In `Recording` a matching
    /// id completes the take: capture stops, the target is kept, and the
    /// state returns to `Idle`. A notification whose id does not match the
    /// countdown owned by the current state is stale -- its countdown was
    /// cancelled or replaced after it fired -- and is ignored.
    #[instrument(skip(self))]
    pub fn countdown_elapsed(&mut self, id: CountdownId) {
        match mem::replace(&mut self.state, RecordingState::Idle) {
            RecordingState::WaitingToRecord { target, countdown } if countdown.id() == id => {
                self.begin_capture(target);
            }
            RecordingState::Recording { target, countdown } if countdown.id() == id => {
                // Natural completion: the capture countdown bounds the
                // take. The target is kept -- only cancellation discards.
                self.stop_capture();
                info!(target = %target, "Take completed");
            }
            other => {
                debug!(countdown_id = %id, state = ?other, "Stale countdown ignored");
                self.state = other;
            }
        }
    }

    /// Cancel the in-flight take, if any.
    ///
    /// Always leaves the state `Idle`. From `WaitingToRecord` the
    /// countdown is stopped and the target discarded; from `Recording` the
    /// countdown is stopped, capture is stopped, and the target is
    /// discarded. While `Idle` this is a no-op and no collaborator is
    /// called.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        match mem::replace(&mut self.state, RecordingState::Idle) {
            RecordingState::Idle => {
                debug!("Cancel requested while idle, nothing to do");
            }
            RecordingState::WaitingToRecord { target, countdown } => {
                self.stop_countdown(&countdown);
                self.discard_target(&target);
                info!(target = %target, "Pending take cancelled");
            }
            RecordingState::Recording { target, countdown } => {
                self.stop_countdown(&countdown);
                self.stop_capture();
                self.discard_target(&target);
                info!(target = %target, "Active take cancelled");
            }
        }
    }

    /// Transition from waiting to recording, preserving the target.
    ///
    /// The caller has already taken the state; on failure the state is
    /// left `Idle` and the target discarded.
    fn begin_capture(&mut self, target: TakeHandle) {
        let countdown = Countdown::capture();

        if let Err(e) = self.device.start_capture(&target) {
            error!(target = %target, error = ?e, "Failed to start capture, abandoning take");
            self.discard_target(&target);
            return;
        }

        // Same ordering as start_recording: never enter Recording unless
        // the capture countdown is actually running.
        if let Err(e) = self.countdowns.arm(&countdown) {
            error!(
                target = %target,
                error = ?e,
                "Failed to arm capture countdown, abandoning take"
            );
            self.stop_capture();
            self.discard_target(&target);
            return;
        }

        info!(
            target = %target,
            countdown_id = %countdown.id(),
            "Recording started"
        );

        self.state = RecordingState::Recording { target, countdown };
    }

    fn stop_countdown(&mut self, countdown: &Countdown) {
        if let Err(e) = self.countdowns.disarm(countdown) {
            warn!(countdown_id = %countdown.id(), error = ?e, "Failed to stop countdown");
        }
    }

    fn stop_capture(&mut self) {
        if let Err(e) = self.device.stop_capture() {
            warn!(error = ?e, "Failed to stop capture");
        }
    }

    fn discard_target(&mut self, target: &TakeHandle) {
        if let Err(e) = self.store.discard(target) {
            warn!(target = %target, error = ?e, "Failed to discard target");
        }
    }
}
