//! End-to-end scenarios for the RelayController → FSM → relay pipeline.
//!
//! Gestures and supervisor ticks are injected directly with explicit
//! timestamps; the relay command history is checked on a mock port.

use crate::mock_hw::{LogSink, MockHardware};

use relay_latch::app::events::AppEvent;
use relay_latch::app::service::RelayController;
use relay_latch::config::ControllerConfig;
use relay_latch::fsm::{GestureEvent, RelayMode};

fn make_controller() -> (RelayController, MockHardware, LogSink) {
    let mut ctl = RelayController::new(ControllerConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    ctl.start(&mut hw, &mut sink);
    (ctl, hw, sink)
}

#[test]
fn boot_drives_relay_off() {
    let (ctl, hw, sink) = make_controller();
    assert_eq!(ctl.mode(), RelayMode::Off);
    assert_eq!(hw.relay_calls, vec![false]);
    assert_eq!(sink.events, vec![AppEvent::Started(RelayMode::Off)]);
}

#[test]
fn click_latch_expires_after_sixty_seconds() {
    let (mut ctl, mut hw, mut sink) = make_controller();

    ctl.handle_gesture(GestureEvent::Click, 0, &mut hw, &mut sink);
    assert_eq!(ctl.mode(), RelayMode::LatchedOn);
    assert!(hw.relay_on());
    assert_eq!(ctl.session().map(|s| s.started_ms), Some(0));

    assert!(ctl.poll_timeout(59_000, &mut hw, &mut sink).is_none());
    assert_eq!(ctl.mode(), RelayMode::LatchedOn);
    assert!(hw.relay_on());

    assert!(ctl.poll_timeout(60_000, &mut hw, &mut sink).is_some());
    assert_eq!(ctl.mode(), RelayMode::Off);
    assert!(!hw.relay_on());
    assert!(ctl.session().is_none());
}

#[test]
fn hold_over_latch_is_immune_to_timeout() {
    let (mut ctl, mut hw, mut sink) = make_controller();

    ctl.handle_gesture(GestureEvent::Click, 0, &mut hw, &mut sink);
    assert_eq!(ctl.mode(), RelayMode::LatchedOn);

    ctl.handle_gesture(GestureEvent::HoldStart, 10_000, &mut hw, &mut sink);
    assert_eq!(ctl.mode(), RelayMode::HeldOn);
    assert!(hw.relay_on());
    assert!(ctl.session().is_none());

    assert!(ctl.poll_timeout(70_000, &mut hw, &mut sink).is_none());
    assert_eq!(ctl.mode(), RelayMode::HeldOn);
    assert!(hw.relay_on());

    ctl.handle_gesture(GestureEvent::HoldEnd, 12_000, &mut hw, &mut sink);
    assert_eq!(ctl.mode(), RelayMode::Off);
    assert!(!hw.relay_on());
}

#[test]
fn plain_hold_never_creates_a_session() {
    let (mut ctl, mut hw, mut sink) = make_controller();

    ctl.handle_gesture(GestureEvent::HoldStart, 0, &mut hw, &mut sink);
    assert_eq!(ctl.mode(), RelayMode::HeldOn);
    assert!(ctl.session().is_none());

    for now in (0..200_000).step_by(1_000) {
        assert!(ctl.poll_timeout(now, &mut hw, &mut sink).is_none());
    }

    ctl.handle_gesture(GestureEvent::HoldEnd, 3_000, &mut hw, &mut sink);
    assert_eq!(ctl.mode(), RelayMode::Off);
    assert!(ctl.poll_timeout(500_000, &mut hw, &mut sink).is_none());
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::LatchStarted { .. })),
        0
    );
}

#[test]
fn second_click_turns_off_early() {
    let (mut ctl, mut hw, mut sink) = make_controller();

    ctl.handle_gesture(GestureEvent::Click, 1_000, &mut hw, &mut sink);
    ctl.handle_gesture(GestureEvent::Click, 5_000, &mut hw, &mut sink);
    assert_eq!(ctl.mode(), RelayMode::Off);
    assert_eq!(hw.relay_calls, vec![false, true, false]);

    // The old session must not fire later.
    assert!(ctl.poll_timeout(61_000, &mut hw, &mut sink).is_none());
    assert_eq!(hw.relay_calls, vec![false, true, false]);
}

#[test]
fn repeated_hold_start_issues_one_command() {
    let (mut ctl, mut hw, mut sink) = make_controller();

    ctl.handle_gesture(GestureEvent::HoldStart, 0, &mut hw, &mut sink);
    ctl.handle_gesture(GestureEvent::HoldStart, 5, &mut hw, &mut sink);
    assert_eq!(hw.relay_calls, vec![false, true]);
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::RelayCommanded { .. })),
        1
    );
}

#[test]
fn relaunch_after_auto_off_starts_fresh_session() {
    let (mut ctl, mut hw, mut sink) = make_controller();

    ctl.handle_gesture(GestureEvent::Click, 0, &mut hw, &mut sink);
    ctl.poll_timeout(60_000, &mut hw, &mut sink);
    assert_eq!(ctl.mode(), RelayMode::Off);

    ctl.handle_gesture(GestureEvent::Click, 61_000, &mut hw, &mut sink);
    assert_eq!(ctl.session().map(|s| s.started_ms), Some(61_000));
    assert!(ctl.poll_timeout(120_999, &mut hw, &mut sink).is_none());
    assert!(ctl.poll_timeout(121_000, &mut hw, &mut sink).is_some());
}
