//! Startup and relay behaviour against the mock bridge and pin bank.

use relaybridge::app::relay::{BINDINGS, RelayId};
use relaybridge::app::setup::setup;
use relaybridge::error::{BridgeError, Error};
use relaybridge::pins::{self, PinId};
use relaybridge::rpc::bridge::Bridge;

use crate::mock_hw::{MockBridge, MockGpio, Step, journal};

fn booted() -> (MockGpio, MockBridge) {
    let j = journal();
    let mut gpio = MockGpio::new(j.clone());
    let mut bridge = MockBridge::new(j);
    setup(&mut gpio, &mut bridge).expect("setup");
    (gpio, bridge)
}

fn relay_pins() -> [PinId; 4] {
    [
        pins::RELAY_1_GPIO,
        pins::RELAY_2_GPIO,
        pins::RELAY_3_GPIO,
        pins::RELAY_4_GPIO,
    ]
}

// ── Scenarios ─────────────────────────────────────────────────

#[test]
fn init_configures_outputs_and_registers_endpoints() {
    let (gpio, bridge) = booted();
    for pin in relay_pins() {
        assert!(gpio.is_output(pin), "{pin} not an output");
        assert!(!gpio.is_high(pin), "{pin} not LOW after init");
    }
    for name in ["set_relay_1", "set_relay_2", "set_relay_3", "set_relay_4"] {
        assert!(bridge.is_provided(name), "{name} missing");
    }
    assert_eq!(bridge.endpoint_count(), 4);
}

#[test]
fn relay_2_drives_pin_7_only() {
    let (gpio, mut bridge) = booted();
    let before = gpio.snapshot();

    assert!(bridge.invoke("set_relay_2", true));

    assert!(gpio.is_high(PinId::new(7)));
    for pin in [pins::RELAY_1_GPIO, pins::RELAY_3_GPIO, pins::RELAY_4_GPIO] {
        assert_eq!(gpio.record(pin), before[&pin]);
    }
}

#[test]
fn relay_3_follows_last_write() {
    let (gpio, mut bridge) = booted();
    let pin = PinId::new(8);

    bridge.invoke("set_relay_3", true);
    assert!(gpio.is_high(pin));
    bridge.invoke("set_relay_3", false);
    assert!(!gpio.is_high(pin));
}

#[test]
fn repeated_true_on_relay_1_is_stable() {
    let (gpio, mut bridge) = booted();
    let others_before: Vec<_> = relay_pins()[1..].iter().map(|&p| gpio.record(p)).collect();

    bridge.invoke("set_relay_1", true);
    bridge.invoke("set_relay_1", true);

    assert!(gpio.is_high(pins::board::LED3_R));
    let others_after: Vec<_> = relay_pins()[1..].iter().map(|&p| gpio.record(p)).collect();
    assert_eq!(others_before, others_after);
}

#[test]
fn all_relays_can_be_on_together() {
    let (gpio, mut bridge) = booted();
    for n in 1..=4 {
        bridge.invoke(&format!("set_relay_{n}"), true);
    }
    for pin in relay_pins() {
        assert!(gpio.is_high(pin), "{pin} not HIGH");
    }
}

#[test]
fn relay_4_off_before_on_matches_default() {
    let (gpio, mut bridge) = booted();
    bridge.invoke("set_relay_4", false);
    assert!(gpio.is_output(PinId::new(12)));
    assert!(!gpio.is_high(PinId::new(12)));
}

// ── Properties ────────────────────────────────────────────────

#[test]
fn every_relay_maps_true_to_high_and_false_to_low() {
    for id in RelayId::all() {
        let (gpio, mut bridge) = booted();
        bridge.invoke(id.endpoint(), true);
        assert!(gpio.is_high(id.pin()), "{id}");
        bridge.invoke(id.endpoint(), false);
        assert!(!gpio.is_high(id.pin()), "{id}");
    }
}

#[test]
fn pins_are_configured_before_bridge_starts_and_endpoints_follow() {
    let j = journal();
    let mut gpio = MockGpio::new(j.clone());
    let mut bridge = MockBridge::new(j.clone());
    setup(&mut gpio, &mut bridge).unwrap();

    let steps = j.borrow().clone();
    let begin = steps.iter().position(|s| *s == Step::Begin).unwrap();

    let configured: Vec<_> = steps[..begin]
        .iter()
        .filter_map(|s| match s {
            Step::Configure(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(configured, relay_pins());

    let provided: Vec<_> = steps[begin + 1..]
        .iter()
        .filter_map(|s| match s {
            Step::Provide(n) => Some(*n),
            _ => None,
        })
        .collect();
    let expected: Vec<_> = BINDINGS.iter().map(|b| b.endpoint).collect();
    assert_eq!(provided, expected);

    assert!(!steps.iter().any(|s| matches!(s, Step::Write(..))));
}

#[test]
fn unknown_endpoint_touches_no_pin() {
    let (gpio, mut bridge) = booted();
    let before = gpio.snapshot();
    assert!(!bridge.invoke("set_relay_5", true));
    assert!(!bridge.invoke("SET_RELAY_1", true));
    assert_eq!(gpio.snapshot(), before);
}

#[test]
fn bridge_start_failure_is_fatal() {
    let j = journal();
    let mut gpio = MockGpio::new(j.clone());
    let mut bridge = MockBridge::failing(j.clone());

    let err = setup(&mut gpio, &mut bridge).unwrap_err();
    assert_eq!(err, Error::Bridge(BridgeError::StartFailed));
    assert_eq!(bridge.endpoint_count(), 0);
    assert!(!j.borrow().iter().any(|s| matches!(s, Step::Provide(_))));
}

#[test]
fn second_setup_cannot_reclaim_pins() {
    let j = journal();
    let mut gpio = MockGpio::new(j.clone());
    let mut bridge = MockBridge::new(j.clone());
    setup(&mut gpio, &mut bridge).unwrap();

    let mut again = MockBridge::new(j);
    assert!(matches!(
        setup(&mut gpio, &mut again),
        Err(Error::Gpio(relaybridge::error::GpioError::AlreadyClaimed))
    ));
}
