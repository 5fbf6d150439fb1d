//! Fuzz target: button level stream → PollLoop → relay
//!
//! Each input byte is one sample: bit 7 is the raw button level, the low
//! seven bits are the milliseconds to advance before the next step.
//! The clock starts close to the u32 wrap so every run crosses it.
//! Checks:
//! - No panics under arbitrary level and timing sequences
//! - The relay line always matches the controller mode
//! - A latch session exists exactly while the mode is LatchedOn
//!
//! cargo fuzz run fuzz_gesture_pipeline

#![no_main]

use libfuzzer_sys::fuzz_target;
use relay_latch::app::events::AppEvent;
use relay_latch::app::ports::{ButtonPort, EventSink, RelayPort};
use relay_latch::app::runner::PollLoop;
use relay_latch::config::ControllerConfig;
use relay_latch::fsm::RelayMode;

struct Bench {
    pressed: bool,
    relay: Option<bool>,
}

impl RelayPort for Bench {
    fn set_relay(&mut self, energized: bool) {
        self.relay = Some(energized);
    }
}

impl ButtonPort for Bench {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut poll = PollLoop::new(ControllerConfig::default());
    let mut bench = Bench {
        pressed: false,
        relay: None,
    };
    let mut sink = Discard;
    poll.start(&mut bench, &mut sink);

    let mut now: u32 = u32::MAX - 30_000;
    for &b in data {
        bench.pressed = b & 0x80 != 0;
        let advance = u32::from(b & 0x7F);
        for _ in 0..=advance {
            poll.step(now, &mut bench, &mut sink);
            now = now.wrapping_add(1);
        }

        let mode = poll.mode();
        assert_eq!(bench.relay, Some(mode.is_energized()));
        assert_eq!(
            poll.controller().session().is_some(),
            mode == RelayMode::LatchedOn
        );
    }
});
