//! Timed-take: countdown-driven take recording service.
//!
//! Async runtime around [`timed_take_core`]: a mailbox task owns the
//! recording controller, [`RecorderHandle`]s send commands and observe
//! published state, and [`TokioCountdowns`] runs the countdowns on tokio
//! timers. The core crate's types are re-exported so embedders only need
//! this crate.

mod command;
mod config;
mod error;
pub mod logging;
mod scheduler;
mod service;

pub use {
    command::RecorderCommand,
    config::{Config, LoggingConfig, ServiceConfig},
    error::{Result as ServiceResult, ServiceError},
    scheduler::{CountdownElapsed, TokioCountdowns},
    service::{RecorderHandle, RecorderService},
};

pub use timed_take_core::{
    ARM_DURATION, CAPTURE_DURATION, CaptureDevice, CoreResult, Countdown, CountdownId,
    CountdownPhase, CountdownScheduler, RecorderError, RecordingController, RecordingState,
    TakeHandle, TakeStore,
};
