//! Relay bindings: logical relay → output pin → bridge endpoint.
//!
//! The table is fixed at build time.  Endpoint names are part of the wire
//! contract with the host runtime and must never change.

use core::fmt;

use crate::pins::{self, PinId};

/// Number of relays on the board.
pub const RELAY_COUNT: usize = 4;

/// Logical relay identifier, always in `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelayId(u8);

impl RelayId {
    pub const fn new(n: u8) -> Option<Self> {
        if n >= 1 && n as usize <= RELAY_COUNT {
            Some(Self(n))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// All relays in ascending order.
    pub fn all() -> impl Iterator<Item = RelayId> {
        BINDINGS.iter().map(|b| b.relay)
    }

    pub fn binding(self) -> &'static RelayBinding {
        &BINDINGS[usize::from(self.0 - 1)]
    }

    pub fn pin(self) -> PinId {
        self.binding().pin
    }

    pub fn endpoint(self) -> &'static str {
        self.binding().endpoint
    }
}

impl fmt::Display for RelayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Relay number outside `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRelay(pub u8);

impl fmt::Display for InvalidRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no relay {} (valid: 1..={})", self.0, RELAY_COUNT)
    }
}

impl TryFrom<u8> for RelayId {
    type Error = InvalidRelay;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(InvalidRelay(n))
    }
}

/// One row of the relay table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayBinding {
    pub relay: RelayId,
    pub pin: PinId,
    pub endpoint: &'static str,
}

pub const BINDINGS: [RelayBinding; RELAY_COUNT] = [
    RelayBinding {
        relay: RelayId(1),
        pin: pins::RELAY_1_GPIO,
        endpoint: "set_relay_1",
    },
    RelayBinding {
        relay: RelayId(2),
        pin: pins::RELAY_2_GPIO,
        endpoint: "set_relay_2",
    },
    RelayBinding {
        relay: RelayId(3),
        pin: pins::RELAY_3_GPIO,
        endpoint: "set_relay_3",
    },
    RelayBinding {
        relay: RelayId(4),
        pin: pins::RELAY_4_GPIO,
        endpoint: "set_relay_4",
    },
];
