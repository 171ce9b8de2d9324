//! Bridge message schema.
//!
//! Every frame payload is one postcard-encoded [`Message`].  The device
//! only ever *serves* calls: it sends `Hello` once at start, answers each
//! `Call` with a `Reply`, and answers a host `Hello` with its own.

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

use super::codec::{MAX_FRAME_SIZE, WireFrame, encode_frame};

/// Longest endpoint name accepted on the wire.
pub const MAX_NAME_LEN: usize = 32;

/// Maximum number of call arguments.
pub const MAX_ARGS: usize = 4;

/// Longest string argument.
pub const MAX_STR_LEN: usize = 32;

pub type EndpointName = String<MAX_NAME_LEN>;

/// A single call argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Str(String<MAX_STR_LEN>),
}

/// Why a call was not delivered to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// No endpoint is registered under the requested name.
    UnknownEndpoint,
    /// The arguments do not match the endpoint signature.
    BadArguments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Body {
    /// Handshake carrying the sender's protocol version.
    Hello { version: u16 },
    /// Invoke `method` with `args`.
    Call {
        method: EndpointName,
        args: Vec<Value, MAX_ARGS>,
    },
    /// Outcome of the call with the same message id.
    Reply { ok: bool, error: Option<ErrorCode> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub body: Body,
}

impl Message {
    pub fn hello(id: u32, version: u16) -> Self {
        Self {
            id,
            body: Body::Hello { version },
        }
    }

    pub fn reply(id: u32, outcome: Result<(), ErrorCode>) -> Self {
        let body = match outcome {
            Ok(()) => Body::Reply {
                ok: true,
                error: None,
            },
            Err(code) => Body::Reply {
                ok: false,
                error: Some(code),
            },
        };
        Self { id, body }
    }

    /// Build a call. Fails if the name or argument list exceeds wire limits.
    pub fn call(id: u32, method: &str, args: &[Value]) -> Result<Self, BridgeError> {
        let mut name = EndpointName::new();
        name.push_str(method).map_err(|()| BridgeError::InvalidName)?;
        let args = Vec::from_slice(args).map_err(|()| BridgeError::Encode)?;
        Ok(Self {
            id,
            body: Body::Call { method: name, args },
        })
    }

    /// Outcome carried by a `Reply`, `None` for other bodies.
    pub fn outcome(&self) -> Option<Result<(), ErrorCode>> {
        match self.body {
            Body::Reply { ok: true, .. } => Some(Ok(())),
            Body::Reply { ok: false, error } => Some(Err(error.unwrap_or(ErrorCode::BadArguments))),
            _ => None,
        }
    }

    /// Serialize and length-prefix this message.
    pub fn to_frame(&self) -> Result<WireFrame, BridgeError> {
        let mut buf = [0u8; MAX_FRAME_SIZE];
        let payload = postcard::to_slice(self, &mut buf).map_err(|_| BridgeError::Encode)?;
        encode_frame(payload).ok_or(BridgeError::Encode)
    }

    /// Parse a frame payload. `None` if it is not a valid message.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        postcard::from_bytes(payload).ok()
    }
}

/// Extract the single boolean argument of an actuator call.
pub fn bool_arg(args: &[Value]) -> Option<bool> {
    match args {
        [Value::Bool(state)] => Some(*state),
        _ => None,
    }
}
