//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the controller's business rules: the relay
//! service and the cooperative poll loop that drives it.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real GPIO.

pub mod events;
pub mod ports;
pub mod runner;
pub mod service;
