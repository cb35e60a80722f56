//! Mailbox task that owns the recording controller.
//!
//! The controller is single-owner by design; the service serializes every
//! mutation by running it on one task and feeding it from channels. Handles
//! send commands, the scheduler sends elapsed notifications, and observers
//! watch the published state.

use crate::{
    RecorderCommand, ServiceError, ServiceResult,
    config::ServiceConfig,
    scheduler::{CountdownElapsed, ELAPSED_CHANNEL_CAPACITY, TokioCountdowns},
};

use std::panic::Location;

use error_location::ErrorLocation;
use timed_take_core::{CaptureDevice, RecordingController, RecordingState, TakeHandle, TakeStore};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument};

/// Async recorder service.
///
/// Owns a [`RecordingController`] wired to a [`TokioCountdowns`] scheduler
/// and runs it as a mailbox task. Commands from [`RecorderHandle`]s and
/// elapsed notifications from the scheduler are interleaved through one
/// `select!` loop, so the controller only ever sees one call at a time.
/// After every mutation the resulting state is published on a watch
/// channel for observers.
pub struct RecorderService<D, S> {
    controller: RecordingController<D, S, TokioCountdowns>,
    command_rx: mpsc::Receiver<RecorderCommand>,
    elapsed_rx: mpsc::Receiver<CountdownElapsed>,
    state_tx: watch::Sender<RecordingState>,
}

impl<D, S> RecorderService<D, S>
where
    D: CaptureDevice,
    S: TakeStore,
{
    /// Create a service and the handle that talks to it.
    ///
    /// The service does nothing until [`run`](Self::run) is awaited; the
    /// handle can be cloned freely.
    pub fn new(device: D, store: S, config: &ServiceConfig) -> (Self, RecorderHandle) {
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer.get());
        let (elapsed_tx, elapsed_rx) = mpsc::channel(ELAPSED_CHANNEL_CAPACITY);
        let (state_tx, state_rx) = watch::channel(RecordingState::Idle);

        let controller =
            RecordingController::new(device, store, TokioCountdowns::new(elapsed_tx));

        let service = Self {
            controller,
            command_rx,
            elapsed_rx,
            state_tx,
        };

        let handle = RecorderHandle {
            command_tx,
            state_rx,
        };

        (service, handle)
    }

    /// Run the service event loop.
    ///
    /// Blocks until `shutdown_rx` signals or a [`RecorderCommand::Shutdown`]
    /// arrives; a dropped shutdown sender counts as a signal. Any take still
    /// in flight is cancelled on the way out so the capture device is never
    /// left running.
    #[instrument(skip(self, shutdown_rx))]
    pub async fn run(mut self, mut shutdown_rx: watch::Receiver<bool>) -> ServiceResult<()> {
        info!("Recorder service starting");

        loop {
            tokio::select! {
                // Matches on Err too, so this branch never disables and the
                // loop always has a way out.
                _ = shutdown_rx.changed() => {
                    info!("Shutdown signal received");
                    break;
                }

                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        RecorderCommand::StartRecording { target } => {
                            self.controller.start_recording(target);
                        }
                        RecorderCommand::Cancel => {
                            self.controller.cancel();
                        }
                        RecorderCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                    self.publish_state();
                }

                Some(elapsed) = self.elapsed_rx.recv() => {
                    debug!(
                        countdown_id = %elapsed.id,
                        phase = ?elapsed.phase,
                        "Countdown elapsed"
                    );
                    self.controller.countdown_elapsed(elapsed.id);
                    self.publish_state();
                }
            }
        }

        // Never leave capture running past the service's lifetime.
        self.controller.cancel();
        self.publish_state();

        info!("Recorder service shut down successfully");

        Ok(())
    }

    fn publish_state(&self) {
        self.state_tx.send_replace(self.controller.state().clone());
    }
}

/// Cloneable handle to a running [`RecorderService`].
///
/// Commands are delivered through a bounded channel; the async senders
/// apply backpressure rather than dropping. State reads never touch the
/// service task -- they borrow the watch channel's latest published value.
#[derive(Clone, Debug)]
pub struct RecorderHandle {
    command_tx: mpsc::Sender<RecorderCommand>,
    state_rx: watch::Receiver<RecordingState>,
}

impl RecorderHandle {
    /// Request a take into `target`, cancelling any take in flight.
    #[instrument(skip(self))]
    pub async fn start_recording(&self, target: TakeHandle) -> ServiceResult<()> {
        self.command_tx
            .send(RecorderCommand::StartRecording { target })
            .await
            .map_err(|e| ServiceError::ChannelSendFailed {
                message: format!("Failed to send StartRecording: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Cancel the take in flight, if any.
    #[instrument(skip(self))]
    pub async fn cancel(&self) -> ServiceResult<()> {
        self.command_tx
            .send(RecorderCommand::Cancel)
            .await
            .map_err(|e| ServiceError::ChannelSendFailed {
                message: format!("Failed to send Cancel: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Ask the service to shut down.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> ServiceResult<()> {
        self.command_tx
            .send(RecorderCommand::Shutdown)
            .await
            .map_err(|e| ServiceError::ChannelSendFailed {
                message: format!("Failed to send Shutdown: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// The most recently published state.
    pub fn state(&self) -> RecordingState {
        self.state_rx.borrow().clone()
    }

    /// Wait for the next state publication and return it.
    ///
    /// Fails once the service has stopped and dropped its side of the
    /// watch channel.
    pub async fn state_changed(&mut self) -> ServiceResult<RecordingState> {
        self.state_rx
            .changed()
            .await
            .map_err(|e| ServiceError::ChannelClosed {
                message: format!("State channel closed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(self.state_rx.borrow_and_update().clone())
    }
}
