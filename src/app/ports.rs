//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   GpioPort ──▶ RelayHandler ──▶ Bridge (endpoint registry)
//! ```
//!
//! The startup sequence in [`setup`](super::setup) consumes these via
//! generics, so the domain core never touches registers or UARTs directly.
//! The bridge side of the boundary lives in [`crate::rpc::bridge::Bridge`].

use embedded_hal::digital::OutputPin;

use crate::error::GpioError;
use crate::pins::PinId;

// ───────────────────────────────────────────────────────────────
// GPIO port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Hands out configured digital outputs.
///
/// A pin object can only be obtained through [`configure_output`], so any
/// code holding one may assume the direction register is already set.
///
/// [`configure_output`]: GpioPort::configure_output
pub trait GpioPort {
    /// Output pin handed to relay handlers.
    type Output: OutputPin;

    /// Configure `pin` as a push-pull output driven LOW and return a handle.
    ///
    /// Each pin may be claimed at most once.
    fn configure_output(&mut self, pin: PinId) -> Result<Self::Output, GpioError>;
}
