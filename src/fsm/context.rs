//! Owned state threaded through the relay state machine.
//!
//! `RelayState` is the single record the state handlers' results are
//! applied to: the current [`RelayMode`] and, while latched, the
//! [`LatchSession`] that the timeout supervisor measures against.

use super::RelayMode;

// ---------------------------------------------------------------------------
// Latch session
// ---------------------------------------------------------------------------

/// Bookkeeping for one click-initiated latch.  Exists only while the
/// mode is [`RelayMode::LatchedOn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatchSession {
    /// Monotonic timestamp (ms, wrapping) at which the latch began.
    pub started_ms: u32,
}

impl LatchSession {
    pub fn new(started_ms: u32) -> Self {
        Self { started_ms }
    }

    /// Milliseconds since the session started.  Wrap-safe.
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.started_ms)
    }
}

// ---------------------------------------------------------------------------
// RelayState
// ---------------------------------------------------------------------------

/// Mode plus the optional latch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayState {
    mode: RelayMode,
    session: Option<LatchSession>,
}

impl Default for RelayState {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayState {
    /// Power-on state: `Off`, no session.
    pub fn new() -> Self {
        Self {
            mode: RelayMode::Off,
            session: None,
        }
    }

    pub fn mode(&self) -> RelayMode {
        self.mode
    }

    pub fn session(&self) -> Option<LatchSession> {
        self.session
    }

    /// Whether the relay should currently be energised.
    pub fn is_energized(&self) -> bool {
        self.mode.is_energized()
    }

    /// A session exists if and only if the mode is `LatchedOn`.
    pub fn is_consistent(&self) -> bool {
        (self.mode == RelayMode::LatchedOn) == self.session.is_some()
    }

    pub(super) fn set(&mut self, mode: RelayMode, session: Option<LatchSession>) {
        self.mode = mode;
        self.session = session;
        debug_assert!(self.is_consistent(), "latch session out of sync: {self:?}");
    }
}
