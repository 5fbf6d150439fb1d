//! Button and relay drivers.

pub mod button;
pub mod relay;
