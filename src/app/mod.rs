//! Application core — relay bindings and the startup sequence.
//!
//! Hardware is reached only through the port traits in [`ports`] and the
//! [`Bridge`](crate::rpc::bridge::Bridge) trait, so this layer runs
//! unchanged against mocks on the host.

pub mod handlers;
pub mod ports;
pub mod relay;
pub mod setup;
