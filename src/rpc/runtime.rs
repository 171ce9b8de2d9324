//! Cooperative bridge runtime.
//!
//! The foreground has no work of its own: once startup completes, the only
//! job left is servicing the bridge.  The service loop runs on an
//! `edge-executor` local executor and yields to the `async-io-mini`
//! reactor between polls, so the CPU idles instead of spinning.
//!
//! ```text
//!  ┌──────────────────────────────────────────────┐
//!  │  futures_lite::block_on                      │
//!  │  ┌────────────────────────────────────────┐  │
//!  │  │ LocalExecutor                          │  │
//!  │  │   serve: poll() → Timer::after(Δ) ─┐   │  │
//!  │  │            ▲───────────────────────┘   │  │
//!  │  └────────────────────────────────────────┘  │
//!  └──────────────────────────────────────────────┘
//! ```

use core::time::Duration;

use log::{info, trace, warn};

use crate::config::FirmwareConfig;
use crate::error::BridgeError;

use super::bridge::Bridge;

/// Poll `bridge` every `interval` until the transport fails.
///
/// Dispatch happens inside `poll`; this loop only paces it.
pub async fn serve<B: Bridge>(bridge: &mut B, interval: Duration) -> BridgeError {
    loop {
        match bridge.poll() {
            Ok(0) => {}
            Ok(n) => trace!("runtime: dispatched {} call(s)", n),
            Err(e) => {
                warn!("runtime: bridge stopped: {}", e);
                return e;
            }
        }
        async_io_mini::Timer::after(interval).await;
    }
}

/// Block the calling thread on the bridge service loop.
///
/// Only returns if the bridge fails; the caller decides whether to halt.
pub fn run<B: Bridge>(bridge: &mut B, config: &FirmwareConfig) -> BridgeError {
    let executor: edge_executor::LocalExecutor<'_, 4> = edge_executor::LocalExecutor::new();
    let interval = Duration::from_millis(u64::from(config.poll_interval_ms));

    info!("runtime: serving bridge every {:?}", interval);
    futures_lite::future::block_on(executor.run(serve(bridge, interval)))
}
