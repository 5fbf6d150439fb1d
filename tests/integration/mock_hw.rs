//! Mock hardware for integration tests.
//!
//! Records every relay command so tests can assert on the full command
//! history, and lets tests press and release the button by hand.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use relay_latch::app::events::AppEvent;
use relay_latch::app::ports::{ButtonPort, EventSink, RelayPort};

// ── MockHardware (port level) ─────────────────────────────────

pub struct MockHardware {
    /// Every `set_relay` call, in order.
    pub relay_calls: Vec<bool>,
    /// Raw button level returned by `is_pressed`.
    pub pressed: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            relay_calls: Vec::new(),
            pressed: false,
        }
    }

    /// Level the relay line was last driven to.
    pub fn relay_on(&self) -> bool {
        self.relay_calls.last().copied().unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayPort for MockHardware {
    fn set_relay(&mut self, energized: bool) {
        self.relay_calls.push(energized);
    }
}

impl ButtonPort for MockHardware {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

// ── Mock pins (embedded-hal level) ────────────────────────────

/// Shared pin level so the test keeps a handle after the adapter takes
/// ownership of the pin.
#[derive(Clone, Default)]
pub struct SharedLevel(Rc<RefCell<PinLog>>);

#[derive(Default)]
pub struct PinLog {
    pub high: bool,
    pub writes: u32,
}

#[allow(dead_code)]
impl SharedLevel {
    pub fn new_high() -> Self {
        let level = Self::default();
        level.set(true);
        level
    }

    pub fn set(&self, high: bool) {
        self.0.borrow_mut().high = high;
    }

    pub fn is_high(&self) -> bool {
        self.0.borrow().high
    }

    pub fn writes(&self) -> u32 {
        self.0.borrow().writes
    }
}

pub struct MockOutputPin(pub SharedLevel);

impl ErrorType for MockOutputPin {
    type Error = Infallible;
}

impl OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut log = self.0.0.borrow_mut();
        log.high = false;
        log.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut log = self.0.0.borrow_mut();
        log.high = true;
        log.writes += 1;
        Ok(())
    }
}

pub struct MockInputPin(pub SharedLevel);

impl ErrorType for MockInputPin {
    type Error = Infallible;
}

impl InputPin for MockInputPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.is_high())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.is_high())
    }
}

// ── LogSink ───────────────────────────────────────────────────

pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
