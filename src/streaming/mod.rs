//! Streaming module for inbound protocol reassembly
//!
//! This module provides streaming primitives that:
//! - Accumulate transport chunks without copying (data buffer)
//! - Find CRLF terminators across chunk boundaries (FSM, no substring search)
//! - Convert between single-byte text and bytes

pub mod convert;
pub mod crlf_fsm;
pub mod data_buffer;
pub mod inbound_buffer;

pub use crlf_fsm::{CrlfState, Step};
pub use data_buffer::DataBuffer;
pub use inbound_buffer::InboundBuffer;
