//! Firmware configuration parameters
//!
//! Compile-time defaults for the bridge link.  Nothing is persisted and no
//! environment is consulted; the device boots into the same configuration
//! every time.

use serde::{Deserialize, Serialize};

use crate::pins::{self, PinId};

/// Wire protocol version announced in the bridge handshake.
pub const PROTOCOL_VERSION: u16 = 1;

/// Core firmware configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareConfig {
    // --- Bridge UART ---
    /// UART peripheral number used for the host link
    pub uart_port: u8,
    /// Baud rate of the host link
    pub uart_baud: u32,
    /// TX pin of the host link
    pub uart_tx_gpio: i32,
    /// RX pin of the host link
    pub uart_rx_gpio: i32,

    // --- Runtime ---
    /// Interval between bridge polls (milliseconds)
    pub poll_interval_ms: u32,
    /// Protocol version sent in the `Hello` handshake
    pub protocol_version: u16,
}

impl FirmwareConfig {
    pub fn uart_tx(&self) -> PinId {
        PinId::new(self.uart_tx_gpio)
    }

    pub fn uart_rx(&self) -> PinId {
        PinId::new(self.uart_rx_gpio)
    }
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self {
            // Bridge UART
            uart_port: 1,
            uart_baud: 115_200,
            uart_tx_gpio: pins::BRIDGE_UART_TX_GPIO.raw(),
            uart_rx_gpio: pins::BRIDGE_UART_RX_GPIO.raw(),

            // Runtime
            poll_interval_ms: 5,
            protocol_version: PROTOCOL_VERSION,
        }
    }
}
