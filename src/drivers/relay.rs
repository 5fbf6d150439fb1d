//! Relay coil driver.
//!
//! Drives one digital output (HIGH = energised) through the
//! `embedded-hal` [`OutputPin`] trait, so the same driver runs on an
//! ESP-IDF `PinDriver` and on host-side mock pins.
//!
//! Commands are idempotent: re-issuing the level that is already on the
//! line skips the register write.  The driver remembers the last level it
//! *successfully* wrote; a failed write leaves that record unchanged so
//! the next command retries.

use embedded_hal::digital::OutputPin;
use log::debug;

use crate::error::{ActuatorError, Result};

pub struct RelayDriver<P> {
    pin: P,
    /// Last level written to the line (`None` until the first write).
    written: Option<bool>,
}

impl<P: OutputPin> RelayDriver<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, written: None }
    }

    /// Energise (`true`) or release (`false`) the relay.
    pub fn set(&mut self, energized: bool) -> Result<()> {
        if self.written == Some(energized) {
            return Ok(());
        }

        let res = if energized {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        res.map_err(|_| ActuatorError::GpioWriteFailed)?;

        self.written = Some(energized);
        debug!("Relay: line {}", if energized { "HIGH" } else { "LOW" });
        Ok(())
    }

    /// Last level successfully commanded; `false` before the first write.
    pub fn is_energized(&self) -> bool {
        self.written.unwrap_or(false)
    }

    /// Give the pin back (used by tests to inspect mock pins).
    pub fn release(self) -> P {
        self.pin
    }
}
