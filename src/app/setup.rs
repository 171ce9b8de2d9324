//! Startup sequence.
//!
//! ```text
//!   configure relay outputs (all LOW)
//!            │
//!            ▼
//!      bridge.begin()
//!            │
//!            ▼
//!   provide set_relay_1 .. set_relay_4
//! ```
//!
//! A failure at any step aborts startup; nothing after it runs.

use log::info;

use crate::error::Result;
use crate::rpc::bridge::Bridge;

use super::handlers::RelayHandler;
use super::ports::GpioPort;
use super::relay::{BINDINGS, RELAY_COUNT};

/// Bring the relay outputs up and publish one endpoint per relay.
///
/// Returns once every endpoint is registered; the caller then hands the
/// bridge to the runtime.
pub fn setup<G, B>(gpio: &mut G, bridge: &mut B) -> Result<()>
where
    G: GpioPort,
    G::Output: 'static,
    B: Bridge,
{
    let mut handlers = Vec::with_capacity(RELAY_COUNT);
    for binding in &BINDINGS {
        let pin = gpio.configure_output(binding.pin)?;
        info!("setup: relay {} on {} (LOW)", binding.relay, binding.pin);
        handlers.push(RelayHandler::new(binding.relay, pin));
    }

    bridge.begin()?;

    for mut handler in handlers {
        let name = handler.endpoint();
        bridge.provide(name, move |state| handler.set(state))?;
        info!("setup: endpoint '{}' registered", name);
    }

    info!("setup: {} relay endpoint(s) ready", RELAY_COUNT);
    Ok(())
}
