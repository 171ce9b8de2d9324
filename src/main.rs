//! Relay bridge firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  HardwareGpio (GpioPort)     UartTransport           │
//! │          │                        │                  │
//! │          ▼                        ▼                  │
//! │   setup(): relays LOW ──▶ FrameBridge::begin()       │
//! │            └─▶ provide set_relay_1 .. set_relay_4    │
//! │                                                      │
//! │   runtime::run(): poll the bridge forever            │
//! └──────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use relaybridge::adapters::uart_transport::UartTransport;
use relaybridge::app::setup::setup;
use relaybridge::config::FirmwareConfig;
use relaybridge::drivers::gpio::HardwareGpio;
use relaybridge::rpc::bridge::FrameBridge;
use relaybridge::rpc::runtime;

fn halt() -> ! {
    #[allow(clippy::empty_loop)]
    loop {}
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  RelayBridge v{}                  ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = FirmwareConfig::default();

    // ── 2. Host link ──────────────────────────────────────────
    let transport = match UartTransport::new(&config) {
        Ok(t) => t,
        Err(e) => {
            error!("UART init failed: {} — halting", e);
            halt();
        }
    };
    let mut bridge = FrameBridge::new(transport, config.protocol_version);

    // ── 3. Relays + endpoints ─────────────────────────────────
    let mut gpio = HardwareGpio::new();
    if let Err(e) = setup(&mut gpio, &mut bridge) {
        error!("startup failed: {} — halting", e);
        halt();
    }

    // ── 4. Serve forever ──────────────────────────────────────
    let e = runtime::run(&mut bridge, &config);
    error!("bridge runtime exited: {} — halting", e);
    halt()
}
