//! Host-side bridge caller.
//!
//! The counterpart of [`FrameBridge`](super::bridge::FrameBridge): encodes
//! calls the way the host runtime does and decodes whatever the device
//! sends back.  Used by the host simulation and the integration tests.

use crate::error::BridgeError;

use super::codec::{FrameDecoder, WireFrame};
use super::message::{Message, Value};

pub struct BridgeClient {
    decoder: FrameDecoder,
    next_id: u32,
}

impl Default for BridgeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeClient {
    pub fn new() -> Self {
        Self {
            decoder: FrameDecoder::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Encode a call. Returns the message id and the bytes to transmit.
    pub fn call(&mut self, method: &str, args: &[Value]) -> Result<(u32, WireFrame), BridgeError> {
        let id = self.alloc_id();
        let frame = Message::call(id, method, args)?.to_frame()?;
        Ok((id, frame))
    }

    /// Encode a boolean actuator call.
    pub fn set(&mut self, method: &str, state: bool) -> Result<(u32, WireFrame), BridgeError> {
        self.call(method, &[Value::Bool(state)])
    }

    /// Encode a handshake.
    pub fn hello(&mut self, version: u16) -> Result<(u32, WireFrame), BridgeError> {
        let id = self.alloc_id();
        Ok((id, Message::hello(id, version).to_frame()?))
    }

    /// Decode every complete message in `bytes`. Partial frames carry over
    /// to the next call; undecodable payloads are skipped.
    pub fn receive(&mut self, mut bytes: &[u8]) -> Vec<Message> {
        let mut out = Vec::new();
        while !bytes.is_empty() {
            let (used, frame) = self.decoder.feed(bytes);
            bytes = &bytes[used..];
            if let Some(msg) = frame.and_then(|f| Message::from_payload(&f)) {
                out.push(msg);
            }
        }
        out
    }
}
