//! Outbound application events.
//!
//! The [`RelayController`](super::service::RelayController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  The log sink
//! turns each one into a single diagnostic line.

use serde::Serialize;

use crate::fsm::{GestureEvent, Input, RelayMode};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppEvent {
    /// The controller has started; the relay was forced off.
    Started(RelayMode),

    /// A classified gesture reached the controller.
    Gesture(GestureEvent),

    /// The mode changed.
    ModeChanged {
        from: RelayMode,
        to: RelayMode,
        cause: Input,
    },

    /// The relay line was commanded.
    RelayCommanded { energized: bool },

    /// A latch session began at `at_ms`.
    LatchStarted { at_ms: u32, auto_off_ms: u32 },

    /// The running latch session was discarded before expiry.
    LatchCancelled { elapsed_ms: u32 },

    /// The supervisor found the latch expired.
    AutoOff { elapsed_ms: u32 },
}
