//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RelayController (domain)
//! ```
//!
//! Driven adapters (relay output, button input, event sinks) implement
//! these traits.  The [`RelayController`](super::service::RelayController)
//! and [`PollLoop`](super::runner::PollLoop) consume them via generics, so
//! the domain core never touches GPIO directly.

// ───────────────────────────────────────────────────────────────
// Relay port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the relay line.
pub trait RelayPort {
    /// Energise (`true`) or release (`false`) the relay.  Idempotent.
    fn set_relay(&mut self, energized: bool);
}

// ───────────────────────────────────────────────────────────────
// Button port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: raw, undebounced button level.
pub trait ButtonPort {
    /// `true` while the button is physically pressed.
    fn is_pressed(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → diagnostics)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Task delegate (decouples scheduler from the event queue)
// ───────────────────────────────────────────────────────────────

/// Callback trait that the [`Scheduler`](crate::scheduler::Scheduler)
/// invokes when a periodic task is due.
pub trait TaskDelegate {
    /// * `label`: human-readable task label.
    /// * `kind`: which periodic activity is due.
    fn on_task_due(&mut self, label: &str, kind: TaskKind);
}

/// The periodic activities of the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Sample the button and run the gesture classifier.
    ButtonPoll,
    /// Run the auto-off supervisor.
    TimeoutPoll,
}
