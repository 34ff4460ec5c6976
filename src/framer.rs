//! Per-connection Inbound Framer
//!
//! Feeds transport chunks into an [`InboundBuffer`] and hands complete
//! protocol lines (or known-length payloads) to the command layer.
//! The only policy applied here is the control line limit: a peer that
//! sends more than `max_control_line` bytes without a CRLF is reported.

use bytes::Bytes;
use log::{debug, trace, warn};
use thiserror::Error;

use crate::config::FramerConfig;
use crate::streaming::InboundBuffer;
use crate::telemetry;

/// Framing errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FramingError {
    #[error("control line exceeds {limit} bytes ({pending} pending without CRLF)")]
    ControlLineTooLong { pending: usize, limit: usize },
    #[error("payload length {len} cannot be framed")]
    PayloadTooLarge { len: usize },
    #[error("payload of {len} bytes is not followed by CRLF")]
    MissingPayloadTerminator { len: usize },
}

/// Streaming line framer - one per connection
#[derive(Debug)]
pub struct InboundFramer {
    /// Accumulated, not yet framed bytes
    buffer: InboundBuffer,
    /// Control line limit
    max_control_line: usize,
    /// Emit framing events
    log_events: bool,
    /// Lines handed out so far
    lines_framed: usize,
    /// Bytes handed out so far (lines and payloads)
    bytes_framed: usize,
}

impl InboundFramer {
    /// Create a new framer from configuration
    pub fn new(config: &FramerConfig) -> Self {
        Self {
            buffer: InboundBuffer::with_capacity(config.chunk_queue_capacity),
            max_control_line: config.max_control_line,
            log_events: config.log_events,
            lines_framed: 0,
            bytes_framed: 0,
        }
    }

    /// Append a chunk received from the transport
    pub fn push(&mut self, chunk: impl Into<Bytes>) {
        let chunk = chunk.into();
        trace!(
            "received chunk: {} bytes, {} pending",
            chunk.len(),
            self.buffer.size()
        );
        self.buffer.fill(chunk);
    }

    /// Next complete line, CRLF included.
    ///
    /// `Ok(None)` means more data is needed.
    pub fn next_line(&mut self) -> Result<Option<Bytes>, FramingError> {
        let Some(len) = self.buffer.proto_len() else {
            let pending = self.buffer.size();
            if pending > self.max_control_line {
                if self.log_events {
                    telemetry::event_control_line_exceeded(pending, self.max_control_line).emit();
                }
                return Err(FramingError::ControlLineTooLong {
                    pending,
                    limit: self.max_control_line,
                });
            }
            return Ok(None);
        };

        let line = self.buffer.drain(len);
        self.lines_framed += 1;
        self.bytes_framed += line.len();

        debug!("framed line: {} bytes, {} pending", line.len(), self.buffer.size());
        if self.log_events {
            telemetry::event_line(line.len())
                .with_pending(self.buffer.size(), self.buffer.length())
                .emit();
        }
        Ok(Some(line))
    }

    /// Every complete line currently buffered.
    ///
    /// Lines framed before a limit error are returned first; the error is
    /// reported on the next call, since the oversize tail is left in place.
    pub fn lines(&mut self) -> Result<Vec<Bytes>, FramingError> {
        let mut lines = Vec::new();
        loop {
            match self.next_line() {
                Ok(Some(line)) => lines.push(line),
                Ok(None) => return Ok(lines),
                Err(e) if lines.is_empty() => return Err(e),
                Err(_) => return Ok(lines),
            }
        }
    }

    /// Payload of `len` bytes plus its trailing CRLF, once all of it is
    /// buffered. No line limit applies; payloads may contain CRLF.
    ///
    /// Nothing is drained when the bytes after the payload are not CRLF.
    pub fn next_payload(&mut self, len: usize) -> Result<Option<Bytes>, FramingError> {
        let Some(total) = len.checked_add(2) else {
            return Err(FramingError::PayloadTooLarge { len });
        };
        if self.buffer.size() < total {
            return Ok(None);
        }
        if self.buffer.byte_at(len) != Some(b'\r') || self.buffer.byte_at(len + 1) != Some(b'\n') {
            warn!("payload of {} bytes not followed by CRLF, {} pending", len, self.buffer.size());
            return Err(FramingError::MissingPayloadTerminator { len });
        }

        let payload = self.buffer.drain(total);
        self.bytes_framed += payload.len();

        debug!("framed payload: {} bytes, {} pending", len, self.buffer.size());
        if self.log_events {
            telemetry::event_payload(payload.len())
                .with_pending(self.buffer.size(), self.buffer.length())
                .emit();
        }
        Ok(Some(payload))
    }

    /// Bytes buffered but not yet framed
    pub fn pending(&self) -> usize {
        self.buffer.size()
    }

    pub fn lines_framed(&self) -> usize {
        self.lines_framed
    }

    pub fn bytes_framed(&self) -> usize {
        self.bytes_framed
    }

    /// Discard buffered bytes and counters for reuse
    pub fn reset(&mut self) {
        let discarded = self.buffer.size();
        self.buffer.clear();
        self.lines_framed = 0;
        self.bytes_framed = 0;

        if self.log_events {
            telemetry::event_reset(discarded).emit();
        }
    }
}

impl Default for InboundFramer {
    fn default() -> Self {
        Self::new(&FramerConfig::default())
    }
}
