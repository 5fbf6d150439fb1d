//! Controller timing parameters
//!
//! All timing constants for the relay controller. These are fixed at
//! build time; [`ControllerConfig`] bundles them so the service, the
//! classifier and the poll loop are constructed from one value.

use serde::{Deserialize, Serialize};

/// Continuous press duration that turns a press into a hold.
pub const HOLD_THRESHOLD_MS: u32 = 500;
/// Minimum time a raw button level must be stable to be accepted.
pub const DEBOUNCE_MS: u32 = 50;
/// Latched sessions are cut off after this long.
pub const AUTO_OFF_MS: u32 = 60_000;
/// Gesture classifier polling period.
pub const BUTTON_POLL_INTERVAL_MS: u32 = 5;
/// Timeout supervisor polling period.
pub const TIMEOUT_POLL_INTERVAL_MS: u32 = 1_000;

/// Core controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Gestures ---
    /// Press duration (ms) at which a hold starts
    pub hold_threshold_ms: u32,
    /// Debounce window (ms) for the raw button level
    pub debounce_ms: u32,

    // --- Auto-off ---
    /// Latched session lifetime (ms)
    pub auto_off_ms: u32,

    // --- Timing ---
    /// Button polling interval (ms)
    pub button_poll_interval_ms: u32,
    /// Auto-off check interval (ms)
    pub timeout_poll_interval_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Gestures
            hold_threshold_ms: HOLD_THRESHOLD_MS,
            debounce_ms: DEBOUNCE_MS,

            // Auto-off
            auto_off_ms: AUTO_OFF_MS,

            // Timing
            button_poll_interval_ms: BUTTON_POLL_INTERVAL_MS, // 200 Hz
            timeout_poll_interval_ms: TIMEOUT_POLL_INTERVAL_MS, // 1 Hz
        }
    }
}

impl ControllerConfig {
    /// Auto-off duration in whole seconds, for diagnostics.
    pub fn auto_off_secs(&self) -> u32 {
        self.auto_off_ms / 1000
    }
}
