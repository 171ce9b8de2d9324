//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter          | Implements | Connects to        |
//! |------------------|------------|--------------------|
//! | `uart_transport` | Transport  | ESP32 UART driver  |
//!
//! GPIO is served by [`crate::drivers::gpio::HardwareGpio`].

#[cfg(target_os = "espidf")]
pub mod uart_transport;
