//! Length-prefix frame codec.
//!
//! Wire format:
//! ```text
//! ┌────────────┬──────────────────────────┐
//! │ Length (2B)│ postcard payload (N B)   │
//! │ LE u16     │ 1 ≤ N ≤ 256              │
//! └────────────┴──────────────────────────┘
//! ```
//!
//! The decoder accumulates bytes across reads and yields one complete
//! frame at a time together with the number of input bytes it consumed,
//! so a single read holding several frames is drained by calling
//! [`FrameDecoder::feed`] until the input is exhausted.

use heapless::Vec;
use log::trace;

/// Maximum frame payload size.
pub const MAX_FRAME_SIZE: usize = 256;

/// Frame header size (2-byte little-endian length).
pub const HEADER_SIZE: usize = 2;

/// Largest encoded frame, header included.
pub const MAX_WIRE_SIZE: usize = MAX_FRAME_SIZE + HEADER_SIZE;

/// Decoded frame payload.
pub type Frame = Vec<u8, MAX_FRAME_SIZE>;

/// Encoded frame ready for the transport.
pub type WireFrame = Vec<u8, MAX_WIRE_SIZE>;

enum DecoderState {
    Header { collected: usize },
    Payload { expected: usize },
}

/// Streaming frame decoder.
pub struct FrameDecoder {
    state: DecoderState,
    header: [u8; HEADER_SIZE],
    payload: Frame,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Header { collected: 0 },
            header: [0; HEADER_SIZE],
            payload: Frame::new(),
        }
    }

    /// Feed bytes into the decoder.
    ///
    /// Returns how many bytes of `data` were consumed and, if one was
    /// completed, the frame payload. Consumption stops right after a
    /// completed frame; the caller feeds the remainder again.
    pub fn feed(&mut self, data: &[u8]) -> (usize, Option<Frame>) {
        let mut offset = 0;

        while offset < data.len() {
            match self.state {
                DecoderState::Header { collected } => {
                    self.header[collected] = data[offset];
                    offset += 1;

                    if collected + 1 < HEADER_SIZE {
                        self.state = DecoderState::Header {
                            collected: collected + 1,
                        };
                        continue;
                    }

                    let expected = usize::from(u16::from_le_bytes(self.header));
                    if expected == 0 || expected > MAX_FRAME_SIZE {
                        trace!("codec: dropping frame header with length {}", expected);
                        self.state = DecoderState::Header { collected: 0 };
                        continue;
                    }

                    self.payload.clear();
                    self.state = DecoderState::Payload { expected };
                }

                DecoderState::Payload { expected } => {
                    let needed = expected - self.payload.len();
                    let take = needed.min(data.len() - offset);

                    // Cannot overflow: expected <= MAX_FRAME_SIZE.
                    let _ = self.payload.extend_from_slice(&data[offset..offset + take]);
                    offset += take;

                    if self.payload.len() == expected {
                        self.state = DecoderState::Header { collected: 0 };
                        return (offset, Some(core::mem::take(&mut self.payload)));
                    }
                }
            }
        }

        (offset, None)
    }

    /// Reset decoder state (e.g. after the host restarts).
    pub fn reset(&mut self) {
        self.state = DecoderState::Header { collected: 0 };
        self.payload.clear();
    }

    /// True when no partial frame is buffered.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, DecoderState::Header { collected: 0 })
    }
}

/// Encode a payload into a length-prefixed frame.
///
/// Returns `None` for empty or oversize payloads.
pub fn encode_frame(payload: &[u8]) -> Option<WireFrame> {
    if payload.is_empty() || payload.len() > MAX_FRAME_SIZE {
        return None;
    }

    let mut out = WireFrame::new();
    out.extend_from_slice(&(payload.len() as u16).to_le_bytes()).ok()?;
    out.extend_from_slice(payload).ok()?;
    Some(out)
}
