//! GPIO pin assignments for the relay board.
//!
//! Target: ESP32-S3 (GPIO0..=21 and GPIO26..=48; 22..=25 are not bonded out).
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

use core::fmt;

/// Platform pin identifier.
///
/// Accepts any integer-compatible identifier the board exposes, including
/// the symbolic channels in [`board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId(i32);

impl PinId {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// Whether `pin` exists as a general-purpose I/O on the ESP32-S3.
pub const fn is_valid_gpio(pin: PinId) -> bool {
    matches!(pin.0, 0..=21 | 26..=48)
}

impl From<i32> for PinId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<u8> for PinId {
    fn from(raw: u8) -> Self {
        Self(i32::from(raw))
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Board-defined symbolic channels
// ---------------------------------------------------------------------------

/// Symbolic pins defined by the board support package rather than the
/// digital header numbering.
pub mod board {
    use super::PinId;

    /// Onboard RGB LED 3, red channel.
    ///
    /// Placeholder: the pin number must be taken from the board definition
    /// of the target hardware. Relay 1 follows whatever value lands here.
    pub const LED3_R: PinId = PinId::new(21);
}

// ---------------------------------------------------------------------------
// Relay outputs (active HIGH, push-pull)
// ---------------------------------------------------------------------------

/// Relay 1 shares the onboard LED3 red channel.
pub const RELAY_1_GPIO: PinId = board::LED3_R;
pub const RELAY_2_GPIO: PinId = PinId::new(7);
pub const RELAY_3_GPIO: PinId = PinId::new(8);
pub const RELAY_4_GPIO: PinId = PinId::new(12);

// ---------------------------------------------------------------------------
// Bridge UART (link to the host processor)
// ---------------------------------------------------------------------------

pub const BRIDGE_UART_TX_GPIO: PinId = PinId::new(17);
pub const BRIDGE_UART_RX_GPIO: PinId = PinId::new(18);
