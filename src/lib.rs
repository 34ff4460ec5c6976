//! Inbound framing for line-oriented NATS protocol streams
//!
//! A transport delivers bytes in chunks that bear no relation to protocol
//! lines. This crate accumulates those chunks and cuts them back into
//! CRLF-terminated lines:
//!
//! ```
//! use inbound_framing::InboundBuffer;
//!
//! let mut buf = InboundBuffer::new();
//! buf.fill("+OK\r\nPI");
//! buf.fill("NG\r\n");
//!
//! while let Some(len) = buf.proto_len() {
//!     let line = buf.drain(len);
//!     assert!(line.ends_with(b"\r\n"));
//! }
//! assert_eq!(buf.size(), 0);
//! ```
//!
//! Everything is synchronous and owned by a single connection; callers
//! that share a buffer across threads must wrap it themselves.

pub mod config;
pub mod framer;
pub mod streaming;
pub mod telemetry;

pub use config::{ConfigError, FramerConfig};
pub use framer::{FramingError, InboundFramer};
pub use streaming::convert::{concat, from_ascii, to_ascii};
pub use streaming::{CrlfState, DataBuffer, InboundBuffer};
