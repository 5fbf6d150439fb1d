//! Full-pipeline tests: raw button level → PollLoop → relay.
//!
//! A simulated millisecond clock drives [`PollLoop::step`] once per
//! millisecond, so the scheduler cadences (5 ms button, 1 s auto-off),
//! the debounce filter and the hold threshold all run for real.

use crate::mock_hw::{LogSink, MockHardware, MockInputPin, MockOutputPin, SharedLevel};

use relay_latch::adapters::hardware::HardwareAdapter;
use relay_latch::app::events::AppEvent;
use relay_latch::app::ports::{ButtonPort, RelayPort};
use relay_latch::app::runner::PollLoop;
use relay_latch::config::ControllerConfig;
use relay_latch::drivers::relay::RelayDriver;
use relay_latch::fsm::{GestureEvent, RelayMode};

fn run(
    poll: &mut PollLoop,
    hw: &mut (impl RelayPort + ButtonPort),
    sink: &mut LogSink,
    from_ms: u32,
    to_ms: u32,
) {
    for now in from_ms..to_ms {
        poll.step(now, hw, sink);
    }
}

fn make_loop() -> (PollLoop, MockHardware, LogSink) {
    let mut poll = PollLoop::new(ControllerConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = LogSink::new();
    poll.start(&mut hw, &mut sink);
    (poll, hw, sink)
}

#[test]
fn idle_button_leaves_relay_off() {
    let (mut poll, mut hw, mut sink) = make_loop();
    run(&mut poll, &mut hw, &mut sink, 0, 5_000);
    assert_eq!(poll.mode(), RelayMode::Off);
    assert_eq!(hw.relay_calls, vec![false]);
}

#[test]
fn short_press_latches_then_auto_offs() {
    let (mut poll, mut hw, mut sink) = make_loop();

    run(&mut poll, &mut hw, &mut sink, 0, 1_000);
    hw.pressed = true;
    run(&mut poll, &mut hw, &mut sink, 1_000, 1_200);
    hw.pressed = false;
    run(&mut poll, &mut hw, &mut sink, 1_200, 1_300);

    assert_eq!(poll.mode(), RelayMode::LatchedOn);
    assert!(hw.relay_on());
    let started = poll.controller().session().map(|s| s.started_ms);
    assert_eq!(started, Some(1_250));

    // Supervisor runs on whole seconds: first check past 61_250 is 62_000.
    run(&mut poll, &mut hw, &mut sink, 1_300, 62_000);
    assert_eq!(poll.mode(), RelayMode::LatchedOn);
    run(&mut poll, &mut hw, &mut sink, 62_000, 62_001);
    assert_eq!(poll.mode(), RelayMode::Off);
    assert!(!hw.relay_on());
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::AutoOff { .. })),
        1
    );
}

#[test]
fn long_press_is_momentary() {
    let (mut poll, mut hw, mut sink) = make_loop();

    hw.pressed = true;
    run(&mut poll, &mut hw, &mut sink, 1_000, 4_000);
    assert_eq!(poll.mode(), RelayMode::HeldOn);
    assert!(hw.relay_on());

    hw.pressed = false;
    run(&mut poll, &mut hw, &mut sink, 4_000, 4_100);
    assert_eq!(poll.mode(), RelayMode::Off);
    assert!(!hw.relay_on());

    assert_eq!(
        sink.count(|e| *e == AppEvent::Gesture(GestureEvent::Click)),
        0,
        "a hold must never also be a click"
    );
}

#[test]
fn hold_during_latch_takes_over_and_outlives_timer() {
    let (mut poll, mut hw, mut sink) = make_loop();

    // Click at t≈0.
    hw.pressed = true;
    run(&mut poll, &mut hw, &mut sink, 0, 100);
    hw.pressed = false;
    run(&mut poll, &mut hw, &mut sink, 100, 10_000);
    assert_eq!(poll.mode(), RelayMode::LatchedOn);

    // Hold from 10 s to 80 s, well past the latch deadline.
    hw.pressed = true;
    run(&mut poll, &mut hw, &mut sink, 10_000, 80_000);
    assert_eq!(poll.mode(), RelayMode::HeldOn);
    assert!(hw.relay_on());
    assert!(poll.controller().session().is_none());

    hw.pressed = false;
    run(&mut poll, &mut hw, &mut sink, 80_000, 80_100);
    assert_eq!(poll.mode(), RelayMode::Off);
    assert_eq!(
        sink.count(|e| matches!(e, AppEvent::AutoOff { .. })),
        0
    );
}

#[test]
fn hardware_adapter_drives_pins() {
    let relay_level = SharedLevel::default();
    // Pull-up: released button reads high.
    let button_level = SharedLevel::new_high();

    let mut hw = HardwareAdapter::new(
        RelayDriver::new(MockOutputPin(relay_level.clone())),
        MockInputPin(button_level.clone()),
    );
    let mut poll = PollLoop::new(ControllerConfig::default());
    let mut sink = LogSink::new();
    poll.start(&mut hw, &mut sink);
    assert!(!relay_level.is_high());

    button_level.set(false);
    run(&mut poll, &mut hw, &mut sink, 0, 150);
    button_level.set(true);
    run(&mut poll, &mut hw, &mut sink, 150, 300);

    assert_eq!(poll.mode(), RelayMode::LatchedOn);
    assert!(relay_level.is_high());
    assert!(hw.relay_energized());
    // Boot write plus the energise.
    assert_eq!(relay_level.writes(), 2);
}
