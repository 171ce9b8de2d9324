//! Relay bridge firmware library.
//!
//! Four relay outputs exposed to a host processor as the bridge endpoints
//! `set_relay_1` .. `set_relay_4`.  Everything except the UART adapter
//! builds on the host, so the startup sequence and the bridge protocol are
//! tested without hardware.  ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod rpc;
