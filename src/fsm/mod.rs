//! Function-pointer relay state machine.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  StateTable                                  │
//! │  ┌───────────┬────────────────────────────┐  │
//! │  │ RelayMode │ on_input                   │  │
//! │  ├───────────┼────────────────────────────┤  │
//! │  │ Off       │ fn(Input) -> Step          │  │
//! │  │ LatchedOn │ fn(Input) -> Step          │  │
//! │  │ HeldOn    │ fn(Input) -> Step          │  │
//! │  └───────────┴────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Every input is routed to the handler of the **current** mode.  The
//! handler is a pure function of the input and returns a [`Step`]: the
//! next mode, an optional relay command, and what to do with the latch
//! timer.  The engine applies the step to the owned [`RelayState`],
//! stamping a new [`LatchSession`] with the input's timestamp when the
//! step asks for one.  Nothing else mutates the mode.

pub mod context;
pub mod states;

use context::{LatchSession, RelayState};
use log::debug;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Mode identity
// ---------------------------------------------------------------------------

/// The three mutually exclusive relay modes.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum RelayMode {
    /// Relay de-energised, no timer.
    Off = 0,
    /// Energised by a click; auto-off timer running.
    LatchedOn = 1,
    /// Energised while the button is held; no timer.
    HeldOn = 2,
}

impl RelayMode {
    /// Total number of modes, used to size the table array.
    pub const COUNT: usize = 3;

    /// Convert a table index back to `RelayMode`.  Out-of-range indices
    /// assert in debug builds and fall back to `Off` (relay released).
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Off,
            1 => Self::LatchedOn,
            2 => Self::HeldOn,
            _ => {
                debug_assert!(false, "invalid relay mode index: {idx}");
                Self::Off
            }
        }
    }

    /// Relay output derived from the mode.
    pub fn is_energized(self) -> bool {
        !matches!(self, Self::Off)
    }
}

// ---------------------------------------------------------------------------
// Inputs and effects
// ---------------------------------------------------------------------------

/// Classified button gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GestureEvent {
    /// Quick press-and-release, shorter than the hold threshold.
    Click,
    /// Press crossed the hold threshold while still down.
    HoldStart,
    /// Release after a `HoldStart`.
    HoldEnd,
}

/// Everything the state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Input {
    Gesture(GestureEvent),
    /// Synthetic input raised by the timeout supervisor.
    TimeoutExpired,
}

impl From<GestureEvent> for Input {
    fn from(g: GestureEvent) -> Self {
        Self::Gesture(g)
    }
}

/// Command for the relay output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelayCommand {
    Energize,
    DeEnergize,
}

impl RelayCommand {
    /// Output level for this command.
    pub fn is_energize(self) -> bool {
        matches!(self, Self::Energize)
    }

    /// The command that drives the output to match `mode`.
    pub fn for_mode(mode: RelayMode) -> Self {
        if mode.is_energized() {
            Self::Energize
        } else {
            Self::DeEnergize
        }
    }
}

/// What happens to the latch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimerAction {
    /// Leave the session (or its absence) as it is.
    Keep,
    /// Begin a new session at the input's timestamp.
    Start,
    /// Discard the running session.
    Cancel,
}

/// Result of one state handler call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: RelayMode,
    pub relay: Option<RelayCommand>,
    pub timer: TimerAction,
}

impl Step {
    /// Stay in `mode` with no side effects.
    pub const fn stay(mode: RelayMode) -> Self {
        Self {
            next: mode,
            relay: None,
            timer: TimerAction::Keep,
        }
    }
}

/// Full record of an applied input, returned to the caller so it can
/// drive the relay and report what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub input: Input,
    pub from: RelayMode,
    pub to: RelayMode,
    pub relay: Option<RelayCommand>,
    pub timer: TimerAction,
    /// Session in force after the transition.
    pub session: Option<LatchSession>,
}

impl Transition {
    pub fn mode_changed(&self) -> bool {
        self.from != self.to
    }

    /// True when the input changed nothing at all.
    pub fn is_noop(&self) -> bool {
        !self.mode_changed() && self.relay.is_none() && self.timer == TimerAction::Keep
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type alias and descriptor
// ---------------------------------------------------------------------------

/// Signature for a mode's input handler.
pub type InputHandlerFn = fn(Input) -> Step;

/// Static descriptor for a single relay mode.
pub struct StateDescriptor {
    pub id: RelayMode,
    pub name: &'static str,
    pub on_input: InputHandlerFn,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// The relay state machine.
///
/// Owns the state table and the [`RelayState`]; the only component
/// allowed to start or stop a latch session.
pub struct RelayStateMachine {
    table: [StateDescriptor; RelayMode::COUNT],
    state: RelayState,
}

impl Default for RelayStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayStateMachine {
    /// Construct in `Off` with the standard table.
    pub fn new() -> Self {
        Self {
            table: states::build_state_table(),
            state: RelayState::new(),
        }
    }

    /// Apply one input observed at `now_ms`.
    pub fn apply(&mut self, input: Input, now_ms: u32) -> Transition {
        let from = self.state.mode();
        let step = (self.table[from as usize].on_input)(input);

        let session = match step.timer {
            TimerAction::Start => Some(LatchSession::new(now_ms)),
            TimerAction::Cancel => None,
            TimerAction::Keep => self.state.session(),
        };
        self.state.set(step.next, session);

        if step.next != from {
            debug!(
                "FSM transition: {} -> {} on {:?}",
                self.table[from as usize].name, self.table[step.next as usize].name, input
            );
        }

        Transition {
            input,
            from,
            to: step.next,
            relay: step.relay,
            timer: step.timer,
            session,
        }
    }

    pub fn mode(&self) -> RelayMode {
        self.state.mode()
    }

    pub fn session(&self) -> Option<LatchSession> {
        self.state.session()
    }

    pub fn state(&self) -> &RelayState {
        &self.state
    }

    /// Human-readable name of the current mode.
    pub fn mode_name(&self) -> &'static str {
        self.table[self.state.mode() as usize].name
    }
}
