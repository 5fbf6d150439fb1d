//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements          | Connects to              |
//! |------------|---------------------|--------------------------|
//! | `hardware` | RelayPort           | Relay output pin         |
//! |            | ButtonPort          | Button input pin         |
//! | `log_sink` | EventSink           | Serial log output        |
//! | `time`     | -                   | ESP32 system timer       |

pub mod hardware;
pub mod log_sink;
pub mod time;
