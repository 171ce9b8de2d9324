//! Fuzz target: `FrameBridge::poll`
//!
//! Feeds arbitrary host traffic into a serving bridge with one endpoint
//! registered. The bridge must never panic, and the handler count it
//! reports must match what the handler actually observed.
//!
//! cargo fuzz run fuzz_bridge_poll

#![no_main]

use std::cell::Cell;
use std::rc::Rc;

use libfuzzer_sys::fuzz_target;
use relaybridge::rpc::bridge::{Bridge, FrameBridge};
use relaybridge::rpc::transport::{MemoryTransport, Transport};

fuzz_target!(|data: &[u8]| {
    let hits = Rc::new(Cell::new(0usize));
    let sink = Rc::clone(&hits);

    let mut bridge = FrameBridge::new(MemoryTransport::new(), 1);
    if bridge.begin().is_err() {
        return;
    }
    let _ = bridge.provide("set_relay_1", move |_| sink.set(sink.get() + 1));

    bridge.transport_mut().push_inbound(data);
    let mut reported = 0;
    while bridge.transport().available() {
        match bridge.poll() {
            Ok(n) => reported += n,
            Err(_) => break,
        }
    }
    assert_eq!(reported, hits.get());
});
