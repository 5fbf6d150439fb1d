//! Application service: the hexagonal core.
//!
//! [`RelayController`] owns the relay state machine and the timeout
//! supervisor.  It is the thin adapter between the gesture stream / the
//! periodic auto-off check and the pure transition function: it feeds
//! inputs to [`RelayStateMachine::apply`], forwards the resulting relay
//! command to the [`RelayPort`], and reports what happened through the
//! [`EventSink`].
//!
//! ```text
//!  GestureEvent ──▶ ┌─────────────────────────┐ ──▶ EventSink
//!                   │    RelayController      │
//!   timeout tick ──▶│  FSM · TimeoutSupervisor│ ──▶ RelayPort
//!                   └─────────────────────────┘
//! ```

use log::info;

use crate::config::ControllerConfig;
use crate::fsm::context::LatchSession;
use crate::fsm::{GestureEvent, Input, RelayMode, RelayStateMachine, TimerAction, Transition};
use crate::supervisor::TimeoutSupervisor;

use super::events::AppEvent;
use super::ports::{EventSink, RelayPort};

// ───────────────────────────────────────────────────────────────
// RelayController
// ───────────────────────────────────────────────────────────────

pub struct RelayController {
    fsm: RelayStateMachine,
    supervisor: TimeoutSupervisor,
    config: ControllerConfig,
}

impl RelayController {
    /// Construct the service.  The relay is not touched until [`start`].
    ///
    /// [`start`]: Self::start
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            fsm: RelayStateMachine::new(),
            supervisor: TimeoutSupervisor::new(&config),
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the relay to match the initial `Off` mode.
    pub fn start(&mut self, relay: &mut impl RelayPort, sink: &mut impl EventSink) {
        relay.set_relay(self.fsm.mode().is_energized());
        sink.emit(&AppEvent::Started(self.fsm.mode()));
        info!("RelayController started in {:?}", self.fsm.mode());
    }

    // ── Inputs ────────────────────────────────────────────────

    /// Apply a classified gesture observed at `now_ms`.
    pub fn handle_gesture(
        &mut self,
        gesture: GestureEvent,
        now_ms: u32,
        relay: &mut impl RelayPort,
        sink: &mut impl EventSink,
    ) -> Transition {
        sink.emit(&AppEvent::Gesture(gesture));
        self.dispatch(Input::Gesture(gesture), now_ms, relay, sink)
    }

    /// Run the auto-off supervisor.  Returns the transition when the
    /// latch expired, `None` otherwise.
    pub fn poll_timeout(
        &mut self,
        now_ms: u32,
        relay: &mut impl RelayPort,
        sink: &mut impl EventSink,
    ) -> Option<Transition> {
        let session = self.fsm.session();
        let start = session.map(|s| s.started_ms);
        if !self.supervisor.tick(now_ms, self.fsm.mode(), start) {
            return None;
        }

        let elapsed_ms = session.map_or(0, |s| s.elapsed_ms(now_ms));
        sink.emit(&AppEvent::AutoOff { elapsed_ms });
        Some(self.dispatch(Input::TimeoutExpired, now_ms, relay, sink))
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> RelayMode {
        self.fsm.mode()
    }

    pub fn session(&self) -> Option<LatchSession> {
        self.fsm.session()
    }

    /// Time left on the latch, `None` when not latched.
    pub fn remaining_ms(&self, now_ms: u32) -> Option<u32> {
        self.supervisor.remaining_ms(
            now_ms,
            self.fsm.mode(),
            self.fsm.session().map(|s| s.started_ms),
        )
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn dispatch(
        &mut self,
        input: Input,
        now_ms: u32,
        relay: &mut impl RelayPort,
        sink: &mut impl EventSink,
    ) -> Transition {
        let prior_session = self.fsm.session();
        let t = self.fsm.apply(input, now_ms);

        if let Some(cmd) = t.relay {
            relay.set_relay(cmd.is_energize());
            sink.emit(&AppEvent::RelayCommanded {
                energized: cmd.is_energize(),
            });
        }

        match (t.timer, t.session, prior_session) {
            (TimerAction::Start, Some(session), _) => {
                sink.emit(&AppEvent::LatchStarted {
                    at_ms: session.started_ms,
                    auto_off_ms: self.config.auto_off_ms,
                });
            }
            (TimerAction::Cancel, _, Some(prior)) if input != Input::TimeoutExpired => {
                sink.emit(&AppEvent::LatchCancelled {
                    elapsed_ms: prior.elapsed_ms(now_ms),
                });
            }
            _ => {}
        }

        if t.mode_changed() {
            sink.emit(&AppEvent::ModeChanged {
                from: t.from,
                to: t.to,
                cause: input,
            });
        }

        t
    }
}
