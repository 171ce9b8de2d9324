//! Unified error types for the relay firmware.
//!
//! Only initialisation can fail in a way the firmware reports: pin
//! configuration, bridge start, and endpoint registration.  Everything that
//! happens after the bridge starts serving is answered on the wire (see
//! [`crate::rpc::message::ErrorCode`]) or silently ignored (pin writes).
//! All variants are `Copy` so they can be returned from the startup path
//! without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A relay output could not be configured.
    Gpio(GpioError),
    /// The bridge failed to start or rejected a registration.
    Bridge(BridgeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Bridge(e) => write!(f, "bridge: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// `gpio_config` rejected the pin (ESP-IDF return code).
    ConfigFailed(i32),
    /// `gpio_set_level` failed (ESP-IDF return code).
    WriteFailed(i32),
    /// The pin has already been handed out as an output.
    AlreadyClaimed,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFailed(rc) => write!(f, "output config failed (rc={rc})"),
            Self::WriteFailed(rc) => write!(f, "level write failed (rc={rc})"),
            Self::AlreadyClaimed => write!(f, "pin already claimed"),
        }
    }
}

impl embedded_hal::digital::Error for GpioError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

// ---------------------------------------------------------------------------
// Bridge errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    /// The handshake could not be written to the transport.
    StartFailed,
    /// `provide` was called before `begin`.
    NotStarted,
    /// The registry is sealed; the bridge is already serving.
    Sealed,
    /// An endpoint with this name is already registered.
    DuplicateEndpoint,
    /// No free registry slot.
    RegistryFull,
    /// Endpoint name is empty or exceeds the wire limit.
    InvalidName,
    /// Outbound message did not fit in a frame.
    Encode,
    /// The underlying transport failed or closed.
    Transport,
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartFailed => write!(f, "start handshake failed"),
            Self::NotStarted => write!(f, "bridge not started"),
            Self::Sealed => write!(f, "registry sealed"),
            Self::DuplicateEndpoint => write!(f, "duplicate endpoint"),
            Self::RegistryFull => write!(f, "registry full"),
            Self::InvalidName => write!(f, "invalid endpoint name"),
            Self::Encode => write!(f, "message encode failed"),
            Self::Transport => write!(f, "transport failure"),
        }
    }
}

impl From<BridgeError> for Error {
    fn from(e: BridgeError) -> Self {
        Self::Bridge(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
