//! Relay actuator handler.
//!
//! The four endpoints differ only in the pin they drive, so a single
//! handler type is bound once per relay.  Handlers are dumb actuators:
//! `true` drives the pin HIGH, `false` drives it LOW, and a failed write
//! is dropped on the floor.

use embedded_hal::digital::{OutputPin, PinState};
use log::{debug, trace};

use super::relay::RelayId;

pub struct RelayHandler<P> {
    relay: RelayId,
    pin: P,
}

impl<P: OutputPin> RelayHandler<P> {
    /// `pin` must already be configured as an output.
    pub fn new(relay: RelayId, pin: P) -> Self {
        Self { relay, pin }
    }

    pub fn relay(&self) -> RelayId {
        self.relay
    }

    pub fn endpoint(&self) -> &'static str {
        self.relay.endpoint()
    }

    /// Drive the relay output. Last write wins.
    pub fn set(&mut self, state: bool) {
        if let Err(e) = self.pin.set_state(PinState::from(state)) {
            trace!("relay {}: write ignored ({:?})", self.relay, e);
            return;
        }
        debug!(
            "relay {} -> {}",
            self.relay,
            if state { "HIGH" } else { "LOW" }
        );
    }

    /// Give the pin back (tests and teardown only; the firmware never releases pins).
    pub fn into_pin(self) -> P {
        self.pin
    }
}
