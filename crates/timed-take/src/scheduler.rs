//! Tokio-backed countdown scheduler.

use std::collections::HashMap;

use timed_take_core::{CoreResult, Countdown, CountdownId, CountdownPhase, CountdownScheduler};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, instrument};

/// Capacity of the elapsed-notification channel.
///
/// The controller runs at most one countdown at a time, so the channel
/// never fills in practice; the headroom absorbs stale notifications from
/// countdowns replaced just as they fired.
pub(crate) const ELAPSED_CHANNEL_CAPACITY: usize = 8;

/// Notification that a countdown fired.
#[derive(Debug, Clone)]
pub struct CountdownElapsed {
    /// Id of the countdown that fired.
    pub id: CountdownId,
    /// Which lifecycle leg the countdown was timing.
    pub phase: CountdownPhase,
}

/// [`CountdownScheduler`] backed by tokio timers.
///
/// Each armed countdown becomes a spawned task that sleeps for the
/// countdown's duration and then sends a [`CountdownElapsed`] notification.
/// Disarming aborts the task. A countdown that fires in the instant before
/// it is disarmed still delivers; the notification arrives carrying an id
/// the controller no longer owns and is dropped as stale.
///
/// Arming spawns onto the ambient runtime, so the scheduler must live
/// inside one -- [`RecorderService`](crate::RecorderService) drives it from
/// its mailbox task.
pub struct TokioCountdowns {
    elapsed_tx: mpsc::Sender<CountdownElapsed>,
    tasks: HashMap<CountdownId, JoinHandle<()>>,
}

impl TokioCountdowns {
    /// Create a scheduler delivering notifications into `elapsed_tx`.
    pub fn new(elapsed_tx: mpsc::Sender<CountdownElapsed>) -> Self {
        Self {
            elapsed_tx,
            tasks: HashMap::new(),
        }
    }

    /// Drop bookkeeping for tasks that already ran to completion.
    fn sweep_finished(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }
}

impl CountdownScheduler for TokioCountdowns {
    #[instrument(skip(self))]
    fn arm(&mut self, countdown: &Countdown) -> CoreResult<()> {
        self.sweep_finished();

        let id = countdown.id();
        let phase = countdown.phase();
        let duration = countdown.duration();
        let elapsed_tx = self.elapsed_tx.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            // Best effort: if the service is gone there is nobody left to
            // care that the countdown fired.
            let _ = elapsed_tx.send(CountdownElapsed { id, phase }).await;
        });

        self.tasks.insert(id, handle);
        debug!(countdown_id = %id, ?duration, "Countdown armed");

        Ok(())
    }

    #[instrument(skip(self))]
    fn disarm(&mut self, countdown: &Countdown) -> CoreResult<()> {
        if let Some(handle) = self.tasks.remove(&countdown.id()) {
            handle.abort();
            debug!(countdown_id = %countdown.id(), "Countdown disarmed");
        }
        self.sweep_finished();

        Ok(())
    }
}
