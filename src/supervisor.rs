//! Auto-off timeout supervisor.
//!
//! Polled once per timeout interval by the poll loop.  It only *signals*
//! expiry; the relay state machine performs the actual transition when
//! the service feeds it [`Input::TimeoutExpired`](crate::fsm::Input).
//!
//! ## Expiry rule
//!
//! Fires if and only if the mode is `LatchedOn`, a session exists, and
//! at least `auto_off_ms` have passed since the session started
//! (boundary inclusive).  Held and off modes never fire, so a stale
//! timestamp left over from a cancelled latch cannot cut the relay.
//!
//! Elapsed time is computed with wrapping `u32` subtraction: a monotonic
//! millisecond counter that rolls over (~49.7 days) still yields the
//! right elapsed value as long as the session is shorter than the wrap
//! period.

use crate::config::ControllerConfig;
use crate::fsm::RelayMode;
use log::debug;

/// Timeout supervisor.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutSupervisor {
    auto_off_ms: u32,
}

impl TimeoutSupervisor {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            auto_off_ms: config.auto_off_ms,
        }
    }

    /// Configured auto-off duration.
    pub fn auto_off_ms(&self) -> u32 {
        self.auto_off_ms
    }

    /// Evaluate the latch timer.  Returns `true` when the session has
    /// expired and the relay must be turned off.
    pub fn tick(&self, now_ms: u32, mode: RelayMode, session_start_ms: Option<u32>) -> bool {
        let Some(start) = session_start_ms else {
            return false;
        };
        if mode != RelayMode::LatchedOn {
            return false;
        }
        let elapsed = elapsed_ms(now_ms, start);
        let expired = elapsed >= self.auto_off_ms;
        if expired {
            debug!("Supervisor: latch expired after {}ms", elapsed);
        }
        expired
    }

    /// Time left before the latch expires, or `None` when no latch runs.
    pub fn remaining_ms(
        &self,
        now_ms: u32,
        mode: RelayMode,
        session_start_ms: Option<u32>,
    ) -> Option<u32> {
        match (mode, session_start_ms) {
            (RelayMode::LatchedOn, Some(start)) => {
                Some(self.auto_off_ms.saturating_sub(elapsed_ms(now_ms, start)))
            }
            _ => None,
        }
    }
}

/// Wrap-safe elapsed milliseconds between two monotonic readings.
pub fn elapsed_ms(now_ms: u32, start_ms: u32) -> u32 {
    now_ms.wrapping_sub(start_ms)
}
