//! Relay Latch Firmware: Main Entry Point
//!
//! Hexagonal layout with a single cooperative poll loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter        LogEventSink     MonotonicClock  │
//! │  (RelayPort+ButtonPort) (EventSink)      (now_ms)        │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ───────────────    │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │ PollLoop: Scheduler · EventQueue · Classifier      │  │
//! │  │   RelayController: FSM · TimeoutSupervisor         │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use relay_latch::adapters::hardware::HardwareAdapter;
use relay_latch::adapters::log_sink::LogEventSink;
use relay_latch::adapters::time::MonotonicClock;
use relay_latch::app::runner::PollLoop;
use relay_latch::config::ControllerConfig;
use relay_latch::drivers::relay::RelayDriver;
use relay_latch::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Relay Latch v{}                  ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = ControllerConfig::default();
    info!("Config: {}", serde_json::to_string(&config)?);

    // ── 2. GPIO ───────────────────────────────────────────────
    let peripherals = Peripherals::take()?;

    let mut relay_pin = PinDriver::output(peripherals.pins.gpio12)?;
    relay_pin.set_low()?;

    let mut button_pin = PinDriver::input(peripherals.pins.gpio14)?;
    button_pin.set_pull(Pull::Up)?;

    info!(
        "GPIO: relay=GPIO{} (active high), button=GPIO{} (active low, pull-up)",
        pins::RELAY_GPIO,
        pins::BUTTON_GPIO
    );

    let mut hw = HardwareAdapter::new(RelayDriver::new(relay_pin), button_pin);
    let mut sink = LogEventSink::new();
    let clock = MonotonicClock::new();

    // ── 3. Controller ─────────────────────────────────────────
    let mut poll_loop = PollLoop::new(config);
    poll_loop.start(&mut hw, &mut sink);

    info!("System ready. Entering poll loop.");

    // ── 4. Poll loop ──────────────────────────────────────────
    loop {
        poll_loop.step(clock.now_ms(), &mut hw, &mut sink);

        // Yield so the idle task can run and feed the task watchdog.
        FreeRtos::delay_ms(1);
    }
}
