//! End-to-end: setup over a real `FrameBridge`, driven by `BridgeClient`
//! through an in-memory transport.

use relaybridge::app::setup::setup;
use relaybridge::config::{FirmwareConfig, PROTOCOL_VERSION};
use relaybridge::pins::{self, PinId};
use relaybridge::rpc::bridge::{Bridge, BridgeState, FrameBridge};
use relaybridge::rpc::client::BridgeClient;
use relaybridge::rpc::message::{Body, ErrorCode, Message, Value};
use relaybridge::rpc::runtime;
use relaybridge::rpc::transport::MemoryTransport;

use crate::mock_hw::{MockGpio, journal};

fn booted() -> (MockGpio, FrameBridge<MemoryTransport>, BridgeClient) {
    let mut gpio = MockGpio::new(journal());
    let mut bridge = FrameBridge::new(MemoryTransport::new(), PROTOCOL_VERSION);
    setup(&mut gpio, &mut bridge).unwrap();
    (gpio, bridge, BridgeClient::new())
}

#[test]
fn startup_announces_device_with_hello() {
    let (_gpio, mut bridge, mut client) = booted();
    let out = client.receive(&bridge.transport_mut().take_outbound());
    assert_eq!(out.len(), 1);
    assert!(matches!(out[0].body, Body::Hello { version } if version == PROTOCOL_VERSION));
    assert_eq!(bridge.state(), BridgeState::Started);
}

#[test]
fn calls_drive_pins_and_are_acknowledged_in_order() {
    let (gpio, mut bridge, mut client) = booted();
    bridge.transport_mut().take_outbound();

    let mut ids = Vec::new();
    for (name, state) in [("set_relay_2", true), ("set_relay_3", true), ("set_relay_3", false)] {
        let (id, wire) = client.set(name, state).unwrap();
        bridge.transport_mut().push_inbound(&wire);
        ids.push(id);
    }

    assert_eq!(bridge.poll(), Ok(3));
    assert!(gpio.is_high(pins::RELAY_2_GPIO));
    assert!(!gpio.is_high(pins::RELAY_3_GPIO));
    assert_eq!(gpio.record(PinId::new(8)).writes, 2);
    assert!(!gpio.is_high(pins::RELAY_1_GPIO));

    let replies = client.receive(&bridge.transport_mut().take_outbound());
    let got: Vec<u32> = replies.iter().map(|m| m.id).collect();
    assert_eq!(got, ids);
    assert!(replies.iter().all(|m| m.outcome() == Some(Ok(()))));
}

#[test]
fn malformed_calls_never_reach_pins() {
    let (gpio, mut bridge, mut client) = booted();
    bridge.transport_mut().take_outbound();
    let before = gpio.snapshot();

    let (_, unknown) = client.set("set_relay_9", true).unwrap();
    let (_, no_args) = client.call("set_relay_1", &[]).unwrap();
    let (_, two_args) = client
        .call("set_relay_1", &[Value::Bool(true), Value::Bool(true)])
        .unwrap();
    let (_, wrong_type) = client.call("set_relay_4", &[Value::Int(1)]).unwrap();
    for wire in [unknown, no_args, two_args, wrong_type] {
        bridge.transport_mut().push_inbound(&wire);
    }

    assert_eq!(bridge.poll(), Ok(0));
    assert_eq!(gpio.snapshot(), before);

    let codes: Vec<_> = client
        .receive(&bridge.transport_mut().take_outbound())
        .iter()
        .map(Message::outcome)
        .collect();
    assert_eq!(
        codes,
        vec![
            Some(Err(ErrorCode::UnknownEndpoint)),
            Some(Err(ErrorCode::BadArguments)),
            Some(Err(ErrorCode::BadArguments)),
            Some(Err(ErrorCode::BadArguments)),
        ]
    );
}

#[test]
fn frames_split_across_polls_are_reassembled() {
    let (gpio, mut bridge, mut client) = booted();
    let (_, wire) = client.set("set_relay_1", true).unwrap();
    let (head, tail) = wire.split_at(3);

    bridge.transport_mut().push_inbound(head);
    assert_eq!(bridge.poll(), Ok(0));
    assert!(!gpio.is_high(pins::board::LED3_R));

    bridge.transport_mut().push_inbound(tail);
    assert_eq!(bridge.poll(), Ok(1));
    assert!(gpio.is_high(pins::board::LED3_R));
}

#[test]
fn registry_is_immutable_once_serving() {
    let (_gpio, mut bridge, _client) = booted();
    bridge.poll().unwrap();
    assert_eq!(
        bridge.provide("set_relay_5", |_| {}),
        Err(relaybridge::error::BridgeError::Sealed)
    );
    assert_eq!(bridge.endpoints().count(), 4);
}

#[test]
fn runtime_serves_until_transport_closes() {
    let (gpio, mut bridge, mut client) = booted();
    for n in 1..=4 {
        let (_, wire) = client.set(&format!("set_relay_{n}"), true).unwrap();
        bridge.transport_mut().push_inbound(&wire);
    }
    bridge.transport_mut().close();

    let config = FirmwareConfig {
        poll_interval_ms: 1,
        ..FirmwareConfig::default()
    };
    let err = runtime::run(&mut bridge, &config);

    assert_eq!(err, relaybridge::error::BridgeError::Transport);
    for pin in [
        pins::RELAY_1_GPIO,
        pins::RELAY_2_GPIO,
        pins::RELAY_3_GPIO,
        pins::RELAY_4_GPIO,
    ] {
        assert!(gpio.is_high(pin), "{pin} not HIGH");
    }
}

#[test]
fn trickling_transport_still_yields_decodable_replies() {
    let mut gpio = MockGpio::new(journal());
    let mut transport = MemoryTransport::new();
    transport.limit_writes(Some(3));
    let mut bridge = FrameBridge::new(transport, PROTOCOL_VERSION);
    setup(&mut gpio, &mut bridge).unwrap();

    let mut client = BridgeClient::new();
    let (id, wire) = client.set("set_relay_1", true).unwrap();
    bridge.transport_mut().push_inbound(&wire);
    assert_eq!(bridge.poll(), Ok(1));
    assert!(gpio.is_high(pins::RELAY_1_GPIO));

    let got = client.receive(&bridge.transport_mut().take_outbound());
    assert_eq!(got.len(), 2);
    assert!(matches!(got[0].body, Body::Hello { .. }));
    assert_eq!(got[1].id, id);
    assert_eq!(got[1].outcome(), Some(Ok(())));
}
