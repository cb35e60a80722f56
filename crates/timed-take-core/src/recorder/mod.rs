mod controller;
mod countdown;
mod ports;
mod state;

pub use {
    controller::RecordingController,
    countdown::{ARM_DURATION, CAPTURE_DURATION, Countdown, CountdownId, CountdownPhase},
    ports::{CaptureDevice, CountdownScheduler, TakeStore},
    state::{RecordingState, TakeHandle},
};
