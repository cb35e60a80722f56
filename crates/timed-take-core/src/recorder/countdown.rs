use std::{fmt, time::Duration};

use uuid::Uuid;

/// Delay between a take being requested and capture starting.
///
/// Gives the operator time to settle before the device opens. The value is
/// part of the state machine's contract: every arm countdown runs for
/// exactly this long.
pub const ARM_DURATION: Duration = Duration::from_secs(5);

/// Maximum length of a captured take.
///
/// The capture countdown bounds the take; when it elapses the controller
/// stops the device and the take completes.
pub const CAPTURE_DURATION: Duration = Duration::from_secs(10);

/// Unique identity of one countdown instance.
///
/// Doubles as the staleness token: elapsed notifications carry the id of
/// the countdown that fired, and the controller ignores any id that does
/// not match the countdown owned by its current state. A notification from
/// a cancelled or replaced countdown can therefore arrive late without
/// corrupting a newer take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountdownId(Uuid);

impl CountdownId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CountdownId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which leg of the take lifecycle a countdown times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    /// Waiting between the request and the start of capture.
    Arm,
    /// Bounding the duration of capture.
    Capture,
}

/// One-shot countdown owned by a recording state.
///
/// Constructing a countdown mints a fresh [`CountdownId`]; two countdowns
/// are never equal, which is what "each state owns a distinct timer
/// instance" means in practice. The scheduler collaborator runs the clock;
/// this value is the controller's handle to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    id: CountdownId,
    phase: CountdownPhase,
    duration: Duration,
}

impl Countdown {
    /// A fresh arm countdown of [`ARM_DURATION`].
    pub fn arm() -> Self {
        Self {
            id: CountdownId::new(),
            phase: CountdownPhase::Arm,
            duration: ARM_DURATION,
        }
    }

    /// A fresh capture countdown of [`CAPTURE_DURATION`].
    pub fn capture() -> Self {
        Self {
            id: CountdownId::new(),
            phase: CountdownPhase::Capture,
            duration: CAPTURE_DURATION,
        }
    }

    /// This countdown's unique id.
    pub fn id(&self) -> CountdownId {
        self.id
    }

    /// Which lifecycle leg this countdown times.
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    /// How long this countdown runs before it elapses.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
