//! Telemetry Module for inbound framing
//!
//! Emits structured JSON events through the `log` facade so they can be
//! picked up by whatever logger the host installs.

use log::{info, warn};
use serde::Serialize;

/// Framing event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FramingEventType {
    /// A complete control line was drained
    LineFramed,
    /// A payload of known length was drained
    PayloadFramed,
    /// Pending bytes outgrew the control line limit
    ControlLineExceeded,
    /// Buffered bytes were discarded
    BufferReset,
}

/// Framing event for logging
#[derive(Debug, Clone, Serialize)]
pub struct FramingEvent {
    /// Event type
    pub event_type: FramingEventType,
    /// Bytes drained or discarded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Bytes left buffered afterwards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<usize>,
    /// Chunks left buffered afterwards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<usize>,
    /// Configured limit, for limit events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl FramingEvent {
    /// Create a new framing event
    pub fn new(event_type: FramingEventType) -> Self {
        Self {
            event_type,
            bytes: None,
            pending: None,
            chunks: None,
            limit: None,
        }
    }

    pub fn with_bytes(mut self, bytes: usize) -> Self {
        self.bytes = Some(bytes);
        self
    }

    pub fn with_pending(mut self, pending: usize, chunks: usize) -> Self {
        self.pending = Some(pending);
        self.chunks = Some(chunks);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Log the event
    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(json) => match self.event_type {
                FramingEventType::ControlLineExceeded => {
                    warn!("[INBOUND-FRAMING] {}", json);
                }
                _ => {
                    info!("[INBOUND-FRAMING] {}", json);
                }
            },
            Err(e) => {
                warn!("Failed to serialize framing event: {}", e);
            }
        }
    }
}

/// Create a line framed event
pub fn event_line(len: usize) -> FramingEvent {
    FramingEvent::new(FramingEventType::LineFramed).with_bytes(len)
}

/// Create a payload framed event
pub fn event_payload(len: usize) -> FramingEvent {
    FramingEvent::new(FramingEventType::PayloadFramed).with_bytes(len)
}

/// Create a control line limit event
pub fn event_control_line_exceeded(pending: usize, limit: usize) -> FramingEvent {
    FramingEvent::new(FramingEventType::ControlLineExceeded)
        .with_bytes(pending)
        .with_limit(limit)
}

/// Create a buffer reset event
pub fn event_reset(discarded: usize) -> FramingEvent {
    FramingEvent::new(FramingEventType::BufferReset).with_bytes(discarded)
}
