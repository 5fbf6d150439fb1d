//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one diagnostic line per
//! application event to the logger (UART on target, stderr on host).

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::fsm::{GestureEvent, Input};

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(mode) => {
                info!("START | mode={:?}, relay forced OFF", mode);
            }
            AppEvent::Gesture(g) => match g {
                GestureEvent::Click => debug!("BUTTON | click"),
                GestureEvent::HoldStart => info!("ACTION | hold active, relay ON"),
                GestureEvent::HoldEnd => info!("ACTION | hold released, relay OFF"),
            },
            AppEvent::ModeChanged { from, to, cause } => {
                info!("STATE | {:?} -> {:?} ({})", from, to, cause_label(*cause));
            }
            AppEvent::RelayCommanded { energized } => {
                info!("RELAY | {}", if *energized { "ON" } else { "OFF" });
            }
            AppEvent::LatchStarted { auto_off_ms, .. } => {
                info!("ACTION | latch ON (auto-off in {}s)", auto_off_ms / 1000);
            }
            AppEvent::LatchCancelled { elapsed_ms } => {
                info!("ACTION | latch cleared after {}ms", elapsed_ms);
            }
            AppEvent::AutoOff { elapsed_ms } => {
                info!("TIMER | {}s limit reached, turning OFF", elapsed_ms / 1000);
            }
        }
    }
}

fn cause_label(cause: Input) -> &'static str {
    match cause {
        Input::Gesture(GestureEvent::Click) => "click",
        Input::Gesture(GestureEvent::HoldStart) => "hold start",
        Input::Gesture(GestureEvent::HoldEnd) => "hold end",
        Input::TimeoutExpired => "auto-off",
    }
}
