//! Bridge — exposes named boolean endpoints to the host runtime.
//!
//! Lifecycle:
//!
//! ```text
//!   Idle ──begin()──▶ Started ──first poll()──▶ Serving
//!                      provide() ok              provide() → Sealed
//! ```
//!
//! Every inbound frame passes through the same pipeline:
//!
//! 1. **Framing** — [`FrameDecoder`] reassembles length-prefixed payloads.
//! 2. **Decoding** — payloads that are not a valid [`Message`] are dropped.
//! 3. **Resolution** — unknown endpoints are answered with
//!    [`ErrorCode::UnknownEndpoint`].
//! 4. **Argument check** — anything but a single boolean is answered with
//!    [`ErrorCode::BadArguments`].
//!
//! Only calls that clear all four gates reach a handler, in arrival order.

use log::{debug, info, warn};

use crate::error::BridgeError;

use super::codec::FrameDecoder;
use super::message::{Body, ErrorCode, Message, Value, bool_arg};
use super::registry::Registry;
use super::transport::Transport;

/// Bytes pulled from the transport per read.
const READ_BUF_SIZE: usize = 128;

/// Remote-invocation runtime the firmware registers its endpoints with.
pub trait Bridge {
    /// Start the transport and announce the device to the host.
    fn begin(&mut self) -> Result<(), BridgeError>;

    /// Register `handler` under `name`. Only valid between `begin` and the
    /// first `poll`.
    fn provide<F>(&mut self, name: &'static str, handler: F) -> Result<(), BridgeError>
    where
        F: FnMut(bool) + 'static;

    /// Service the transport once. Returns the number of handler
    /// invocations performed.
    fn poll(&mut self) -> Result<usize, BridgeError>;

    /// Whether an endpoint is registered under `name`.
    fn is_provided(&self, name: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Idle,
    Started,
    Serving,
}

/// [`Bridge`] over a framed byte [`Transport`].
pub struct FrameBridge<T: Transport> {
    transport: T,
    decoder: FrameDecoder,
    registry: Registry,
    state: BridgeState,
    protocol_version: u16,
    next_msg_id: u32,
}

impl<T: Transport> FrameBridge<T> {
    pub fn new(transport: T, protocol_version: u16) -> Self {
        Self {
            transport,
            decoder: FrameDecoder::new(),
            registry: Registry::new(),
            state: BridgeState::Idle,
            protocol_version,
            next_msg_id: 1,
        }
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Registered endpoint names in registration order.
    pub fn endpoints(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    fn alloc_msg_id(&mut self) -> u32 {
        let id = self.next_msg_id;
        self.next_msg_id = self.next_msg_id.wrapping_add(1);
        id
    }

    fn send(&mut self, msg: &Message) -> Result<(), BridgeError> {
        let wire = msg.to_frame()?;
        let mut sent = 0;
        while sent < wire.len() {
            let n = self.transport.write(&wire[sent..]).map_err(|e| {
                warn!("bridge: write failed: {:?}", e);
                BridgeError::Transport
            })?;
            if n == 0 {
                warn!("bridge: transport stalled ({}/{} bytes)", sent, wire.len());
                return Err(BridgeError::Transport);
            }
            sent += n;
        }
        self.transport.flush().map_err(|e| {
            warn!("bridge: flush failed: {:?}", e);
            BridgeError::Transport
        })
    }

    /// Handle one frame payload. Returns `true` if a handler ran.
    fn handle_frame(&mut self, payload: &[u8]) -> Result<bool, BridgeError> {
        let Some(msg) = Message::from_payload(payload) else {
            warn!("bridge: dropping undecodable frame ({} bytes)", payload.len());
            return Ok(false);
        };

        match msg.body {
            Body::Call { method, args } => {
                let outcome = self.dispatch(method.as_str(), &args);
                if let Err(code) = outcome {
                    warn!("bridge: call #{} to '{}' rejected: {:?}", msg.id, method, code);
                }
                self.send(&Message::reply(msg.id, outcome))?;
                Ok(outcome.is_ok())
            }
            Body::Hello { version } => {
                info!(
                    "bridge: host hello (protocol v{}, ours v{})",
                    version, self.protocol_version
                );
                self.send(&Message::hello(msg.id, self.protocol_version))?;
                Ok(false)
            }
            Body::Reply { .. } => {
                debug!("bridge: ignoring unsolicited reply #{}", msg.id);
                Ok(false)
            }
        }
    }

    fn dispatch(&mut self, method: &str, args: &[Value]) -> Result<(), ErrorCode> {
        if !self.registry.contains(method) {
            return Err(ErrorCode::UnknownEndpoint);
        }
        let state = bool_arg(args).ok_or(ErrorCode::BadArguments)?;
        debug!("bridge: {}({})", method, state);
        self.registry.invoke(method, state);
        Ok(())
    }
}

impl<T: Transport> Bridge for FrameBridge<T> {
    fn begin(&mut self) -> Result<(), BridgeError> {
        if self.state != BridgeState::Idle {
            debug!("bridge: begin() called twice, ignoring");
            return Ok(());
        }

        let id = self.alloc_msg_id();
        self.send(&Message::hello(id, self.protocol_version))
            .map_err(|_| BridgeError::StartFailed)?;

        self.state = BridgeState::Started;
        info!("bridge: started (protocol v{})", self.protocol_version);
        Ok(())
    }

    fn provide<F>(&mut self, name: &'static str, handler: F) -> Result<(), BridgeError>
    where
        F: FnMut(bool) + 'static,
    {
        match self.state {
            BridgeState::Idle => Err(BridgeError::NotStarted),
            BridgeState::Serving => Err(BridgeError::Sealed),
            BridgeState::Started => self.registry.register(name, Box::new(handler)),
        }
    }

    fn poll(&mut self) -> Result<usize, BridgeError> {
        match self.state {
            BridgeState::Idle => return Err(BridgeError::NotStarted),
            BridgeState::Started => {
                self.registry.seal();
                self.state = BridgeState::Serving;
                info!("bridge: serving {} endpoint(s)", self.registry.len());
            }
            BridgeState::Serving => {}
        }

        let mut buf = [0u8; READ_BUF_SIZE];
        let n = self.transport.read(&mut buf).map_err(|e| {
            warn!("bridge: read failed: {:?}", e);
            BridgeError::Transport
        })?;

        let mut invoked = 0;
        let mut offset = 0;
        while offset < n {
            let (used, frame) = self.decoder.feed(&buf[offset..n]);
            offset += used;
            if let Some(frame) = frame {
                if self.handle_frame(&frame)? {
                    invoked += 1;
                }
            }
        }
        Ok(invoked)
    }

    fn is_provided(&self, name: &str) -> bool {
        self.registry.contains(name)
    }
}
