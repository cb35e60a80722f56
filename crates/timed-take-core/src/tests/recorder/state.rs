use crate::{Countdown, RecordingState, TakeHandle};

/// WHAT: The default state is Idle
/// WHY: A controller must begin its life with no take in flight
#[test]
fn given_default_state_when_inspected_then_idle_with_no_payload() {
    let state = RecordingState::default();

    assert!(state.is_idle());
    assert_eq!(state.target(), None);
    assert_eq!(state.countdown(), None);
}

/// WHAT: WaitingToRecord exposes its target and countdown
/// WHY: Observers read the in-flight take through the accessors, not by
///      matching variants themselves
#[test]
fn given_waiting_state_when_inspected_then_payload_accessible() {
    let target = TakeHandle::new("take-1.wav");
    let countdown = Countdown::arm();
    let state = RecordingState::WaitingToRecord {
        target: target.clone(),
        countdown: countdown.clone(),
    };

    assert!(!state.is_idle());
    assert_eq!(state.target(), Some(&target));
    assert_eq!(state.countdown(), Some(&countdown));
}

/// WHAT: Recording exposes its target and countdown
/// WHY: Same accessor contract as the waiting state
#[test]
fn given_recording_state_when_inspected_then_payload_accessible() {
    let target = TakeHandle::new("take-2.wav");
    let countdown = Countdown::capture();
    let state = RecordingState::Recording {
        target: target.clone(),
        countdown: countdown.clone(),
    };

    assert!(!state.is_idle());
    assert_eq!(state.target(), Some(&target));
    assert_eq!(state.countdown(), Some(&countdown));
}

/// WHAT: Take handles compare and display by name
/// WHY: Stores key their bookkeeping on the handle, and logs print it
#[test]
fn given_take_handles_when_compared_and_displayed_then_name_is_identity() {
    let first = TakeHandle::new("session/take-3.wav");
    let same = TakeHandle::new(String::from("session/take-3.wav"));
    let other = TakeHandle::new("session/take-4.wav");

    assert_eq!(first, same);
    assert_ne!(first, other);
    assert_eq!(first.name(), "session/take-3.wav");
    assert_eq!(first.to_string(), "session/take-3.wav");
}
