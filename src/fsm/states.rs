//! Concrete mode handlers and table builder.
//!
//! Each mode is one plain `fn` pointer with no captured state.
//!
//! ```text
//!         ──[Click]──▶
//!    OFF               LATCHED_ON ──[TimeoutExpired]──▶ OFF
//!         ◀──[Click]──
//!     │                    │
//! [HoldStart]         [HoldStart]  (latch timer cancelled)
//!     ▼                    ▼
//!  HELD_ON ◀───────────────┘
//!     │
//! [HoldEnd]──▶ OFF
//! ```
//!
//! Inputs not shown leave the mode untouched and issue nothing.

use super::{GestureEvent, Input, RelayCommand, RelayMode, StateDescriptor, Step, TimerAction};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at construction.
pub fn build_state_table() -> [StateDescriptor; RelayMode::COUNT] {
    [
        // Index 0: Off
        StateDescriptor {
            id: RelayMode::Off,
            name: "Off",
            on_input: off_input,
        },
        // Index 1: LatchedOn
        StateDescriptor {
            id: RelayMode::LatchedOn,
            name: "LatchedOn",
            on_input: latched_input,
        },
        // Index 2: HeldOn
        StateDescriptor {
            id: RelayMode::HeldOn,
            name: "HeldOn",
            on_input: held_input,
        },
    ]
}

/// Pure transition function over the whole table.
pub fn step(mode: RelayMode, input: Input) -> Step {
    match mode {
        RelayMode::Off => off_input(input),
        RelayMode::LatchedOn => latched_input(input),
        RelayMode::HeldOn => held_input(input),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  OFF
// ═══════════════════════════════════════════════════════════════════════════

fn off_input(input: Input) -> Step {
    match input {
        Input::Gesture(GestureEvent::Click) => Step {
            next: RelayMode::LatchedOn,
            relay: Some(RelayCommand::Energize),
            timer: TimerAction::Start,
        },
        Input::Gesture(GestureEvent::HoldStart) => Step {
            next: RelayMode::HeldOn,
            relay: Some(RelayCommand::Energize),
            timer: TimerAction::Keep,
        },
        Input::Gesture(GestureEvent::HoldEnd) | Input::TimeoutExpired => Step::stay(RelayMode::Off),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  LATCHED_ON
// ═══════════════════════════════════════════════════════════════════════════

fn latched_input(input: Input) -> Step {
    match input {
        Input::Gesture(GestureEvent::Click) | Input::TimeoutExpired => Step {
            next: RelayMode::Off,
            relay: Some(RelayCommand::DeEnergize),
            timer: TimerAction::Cancel,
        },
        // Already energised; the hold takes over and the latch timer goes.
        Input::Gesture(GestureEvent::HoldStart) => Step {
            next: RelayMode::HeldOn,
            relay: Some(RelayCommand::Energize),
            timer: TimerAction::Cancel,
        },
        Input::Gesture(GestureEvent::HoldEnd) => Step::stay(RelayMode::LatchedOn),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  HELD_ON
// ═══════════════════════════════════════════════════════════════════════════

fn held_input(input: Input) -> Step {
    match input {
        Input::Gesture(GestureEvent::HoldEnd) => Step {
            next: RelayMode::Off,
            relay: Some(RelayCommand::DeEnergize),
            timer: TimerAction::Keep,
        },
        // The classifier never reports a click mid-hold.
        Input::Gesture(GestureEvent::Click | GestureEvent::HoldStart) | Input::TimeoutExpired => {
            Step::stay(RelayMode::HeldOn)
        }
    }
}
