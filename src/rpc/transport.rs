//! Transport abstraction — the byte channel to the host processor.
//!
//! Concrete implementations:
//! - UART link to the host ([`crate::adapters::uart_transport`], ESP-IDF only)
//! - [`MemoryTransport`], an in-memory pipe for host simulation and tests
//!
//! The bridge is generic over `Transport`, so swapping the carrier
//! requires zero changes to dispatch.

use std::collections::VecDeque;

/// Byte-oriented transport channel.
pub trait Transport {
    /// Error type for this transport.
    type Error: core::fmt::Debug;

    /// Read up to `buf.len()` bytes into `buf`.
    /// Returns 0 if no data is available (non-blocking).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write `data`, returning the number of bytes accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Check if data is available for reading.
    fn available(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryTransportError {
    /// The peer closed its side and every inbound byte has been consumed.
    Closed,
    /// Writes were disabled with [`MemoryTransport::reject_writes`].
    WriteRejected,
}

/// In-memory transport: inbound bytes are scripted, outbound bytes captured.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    inbound: VecDeque<u8>,
    outbound: Vec<u8>,
    closed: bool,
    reject_writes: bool,
    write_limit: Option<usize>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes as if the host had sent them.
    pub fn push_inbound(&mut self, data: &[u8]) {
        self.inbound.extend(data);
    }

    /// Drain everything written so far.
    pub fn take_outbound(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.outbound)
    }

    /// Simulate the host closing its sending side. Queued bytes are still
    /// delivered; writes keep landing in the outbound buffer.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Accept at most `limit` bytes per `write`, like a driver with a small
    /// TX FIFO. `Some(0)` makes every write stall.
    pub fn limit_writes(&mut self, limit: Option<usize>) {
        self.write_limit = limit;
    }
}

impl Transport for MemoryTransport {
    type Error = MemoryTransportError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.inbound.is_empty() && self.closed {
            return Err(MemoryTransportError::Closed);
        }
        let n = buf.len().min(self.inbound.len());
        for (slot, byte) in buf.iter_mut().zip(self.inbound.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        if self.reject_writes {
            return Err(MemoryTransportError::WriteRejected);
        }
        let n = self.write_limit.map_or(data.len(), |limit| limit.min(data.len()));
        self.outbound.extend_from_slice(&data[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn available(&self) -> bool {
        !self.inbound.is_empty()
    }
}
