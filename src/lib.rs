//! Relay latch controller firmware library.
//!
//! Exposes the pure-logic modules for integration testing.  All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module; the binary in `main.rs` wires them to real pins.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod fsm;
pub mod pins;
pub mod scheduler;
pub mod supervisor;
