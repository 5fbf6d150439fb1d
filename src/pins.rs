//! GPIO pin assignments for the relay board.
//!
//! The binary selects the matching `peripherals.pins.gpioNN` fields by
//! name and reports these numbers in its boot log; keep the two in step
//! when rewiring.

// ---------------------------------------------------------------------------
// User button (active-low, internal pull-up)
// ---------------------------------------------------------------------------

/// Momentary push-button. Pressing connects the line to GND.
pub const BUTTON_GPIO: i32 = 14;

// ---------------------------------------------------------------------------
// Relay coil driver
// ---------------------------------------------------------------------------

/// Digital output: HIGH = relay energised.
pub const RELAY_GPIO: i32 = 12;
