//! Hardware adapter: bridges real pins to domain port traits.
//!
//! Owns the [`RelayDriver`] and the button input pin, exposing them
//! through [`RelayPort`] and [`ButtonPort`].  Generic over the
//! `embedded-hal` pin traits: on target the binary plugs in ESP-IDF
//! `PinDriver`s, on host the integration tests plug in mock pins.

use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::{ButtonPort, RelayPort};
use crate::drivers::relay::RelayDriver;
use crate::error::{InputError, Result};

/// Concrete adapter that combines the relay and button behind port traits.
pub struct HardwareAdapter<R, B> {
    relay: RelayDriver<R>,
    button: B,
    /// Latched so a failing input pin is reported once, not every 5 ms.
    input_fault: bool,
}

impl<R: OutputPin, B: InputPin> HardwareAdapter<R, B> {
    pub fn new(relay: RelayDriver<R>, button: B) -> Self {
        Self {
            relay,
            button,
            input_fault: false,
        }
    }

    /// Last level the relay driver successfully wrote.
    pub fn relay_energized(&self) -> bool {
        self.relay.is_energized()
    }

    /// Active-low: pressed pulls the line to GND.
    fn read_pressed(&mut self) -> Result<bool> {
        self.button
            .is_low()
            .map_err(|_| InputError::GpioReadFailed.into())
    }
}

// ── RelayPort implementation ──────────────────────────────────

impl<R: OutputPin, B: InputPin> RelayPort for HardwareAdapter<R, B> {
    fn set_relay(&mut self, energized: bool) {
        if let Err(e) = self.relay.set(energized) {
            warn!("Relay command {} failed: {}", if energized { "ON" } else { "OFF" }, e);
        }
    }
}

// ── ButtonPort implementation ─────────────────────────────────

impl<R: OutputPin, B: InputPin> ButtonPort for HardwareAdapter<R, B> {
    /// A failed read counts as released.
    fn is_pressed(&mut self) -> bool {
        match self.read_pressed() {
            Ok(pressed) => {
                self.input_fault = false;
                pressed
            }
            Err(e) => {
                if !self.input_fault {
                    warn!("Button: {}", e);
                    self.input_fault = true;
                }
                false
            }
        }
    }
}
