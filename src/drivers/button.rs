//! Polled, debounced button driver with click / hold detection.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up.  The poll loop samples the
//! line every few milliseconds and passes the raw "pressed" level into
//! [`GestureClassifier::tick`], which runs the debounce filter and the
//! gesture state machine.
//!
//! ## Gesture detection
//!
//! | Gesture    | Condition                              | Event       |
//! |------------|----------------------------------------|-------------|
//! | Click      | Released before the hold threshold     | `Click`     |
//! | Hold start | Still pressed at the hold threshold    | `HoldStart` |
//! | Hold end   | Released after `HoldStart` fired       | `HoldEnd`   |
//!
//! A press is either a click or a hold, never both, and every
//! `HoldStart` is followed by exactly one `HoldEnd`.  Both edges are
//! timed from their first raw sample: a press whose raw release lands
//! before the hold threshold is a click even if the release is only
//! confirmed after the threshold has passed.

use crate::config::ControllerConfig;
use crate::fsm::GestureEvent;

/// Internal state machine for gesture detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Released,
    Pressed { since_ms: u32 },
    Holding,
}

pub struct GestureClassifier {
    hold_threshold_ms: u32,
    debounce_ms: u32,
    /// Last raw sample and when it last changed.
    raw: bool,
    raw_since_ms: u32,
    /// Debounced level.
    stable: bool,
    state: GestureState,
}

impl GestureClassifier {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            hold_threshold_ms: config.hold_threshold_ms,
            debounce_ms: config.debounce_ms,
            raw: false,
            raw_since_ms: 0,
            stable: false,
            state: GestureState::Released,
        }
    }

    /// Call from the poll loop at the button interval.
    /// `raw_pressed` is the undebounced level, `now_ms` monotonic time.
    /// Returns a classified gesture, if one completed on this sample.
    pub fn tick(&mut self, raw_pressed: bool, now_ms: u32) -> Option<GestureEvent> {
        if raw_pressed != self.raw {
            self.raw = raw_pressed;
            self.raw_since_ms = now_ms;
        }

        if self.raw != self.stable
            && now_ms.wrapping_sub(self.raw_since_ms) >= self.debounce_ms
        {
            self.stable = self.raw;
            return self.on_edge(self.stable, self.raw_since_ms);
        }

        // A release still inside its debounce window keeps the press a click.
        if let GestureState::Pressed { since_ms } = self.state {
            if self.raw == self.stable
                && now_ms.wrapping_sub(since_ms) >= self.hold_threshold_ms
            {
                self.state = GestureState::Holding;
                return Some(GestureEvent::HoldStart);
            }
        }

        None
    }

    /// Debounced button level.
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// True between `HoldStart` and `HoldEnd`.
    pub fn is_holding(&self) -> bool {
        self.state == GestureState::Holding
    }

    fn on_edge(&mut self, pressed: bool, at_ms: u32) -> Option<GestureEvent> {
        match (self.state, pressed) {
            (GestureState::Released, true) => {
                self.state = GestureState::Pressed { since_ms: at_ms };
                None
            }
            (GestureState::Pressed { .. }, false) => {
                self.state = GestureState::Released;
                Some(GestureEvent::Click)
            }
            (GestureState::Holding, false) => {
                self.state = GestureState::Released;
                Some(GestureEvent::HoldEnd)
            }
            _ => None,
        }
    }
}
