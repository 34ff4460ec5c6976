//! Chunk Accumulation Buffer
//!
//! Transport reads arrive as immutable chunks of arbitrary size. This buffer
//! keeps them in arrival order and hands out prefixes on demand:
//! - Appending never copies (chunks are reference-counted `Bytes`)
//! - Draining from a single chunk never copies
//! - Draining across chunks copies exactly once into one destination

use std::collections::VecDeque;

use bytes::{Bytes, BytesMut};
use log::trace;

/// Ordered sequence of immutable byte chunks.
#[derive(Debug, Default)]
pub struct DataBuffer {
    /// Chunks in arrival order, front = oldest
    chunks: VecDeque<Bytes>,
    /// Sum of all chunk lengths
    byte_length: usize,
}

impl DataBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            chunks: VecDeque::new(),
            byte_length: 0,
        }
    }

    /// Create an empty buffer with room for `chunks` chunk handles
    pub fn with_capacity(chunks: usize) -> Self {
        Self {
            chunks: VecDeque::with_capacity(chunks),
            byte_length: 0,
        }
    }

    /// Append a chunk to the back. Empty chunks are ignored.
    pub fn fill(&mut self, chunk: impl Into<Bytes>) {
        let chunk = chunk.into();
        if chunk.is_empty() {
            return;
        }
        self.byte_length += chunk.len();
        self.chunks.push_back(chunk);
        self.check_length();
    }

    /// Remove and return the first `n` bytes as one contiguous range.
    ///
    /// `n` is clamped to [`size`](Self::size). Draining zero bytes or an empty
    /// buffer returns an empty range and leaves the buffer untouched.
    pub fn drain(&mut self, n: usize) -> Bytes {
        if n == 0 || self.chunks.is_empty() {
            return Bytes::new();
        }
        let n = n.min(self.byte_length);

        let first_len = self.chunks.front().map_or(0, Bytes::len);
        let drained = if first_len >= n {
            self.split_front(n)
        } else {
            self.drain_spanning(n)
        };

        self.byte_length -= drained.len();
        self.check_length();
        drained
    }

    /// Remove and return everything buffered.
    pub fn drain_all(&mut self) -> Bytes {
        self.drain(self.byte_length)
    }

    /// Single-chunk path: the first chunk holds at least `n` bytes.
    fn split_front(&mut self, n: usize) -> Bytes {
        let Some(first) = self.chunks.front_mut() else {
            unreachable!("split_front called on an empty chunk list");
        };
        if first.len() > n {
            return first.split_to(n);
        }
        // Whole chunk consumed, hand it out as-is
        match self.chunks.pop_front() {
            Some(chunk) => chunk,
            None => unreachable!("front chunk vanished"),
        }
    }

    /// Multi-chunk path: `n` exceeds the first chunk and `n <= byte_length`.
    fn drain_spanning(&mut self, n: usize) -> Bytes {
        let mut out = BytesMut::with_capacity(n);
        let mut consumed_chunks = 0;

        while out.len() < n {
            let need = n - out.len();
            let Some(mut chunk) = self.chunks.pop_front() else {
                unreachable!(
                    "chunk list ran out with {} of {} bytes still owed (byte_length={})",
                    need, n, self.byte_length
                );
            };

            if chunk.len() > need {
                out.extend_from_slice(&chunk.split_to(need));
                self.chunks.push_front(chunk);
            } else {
                out.extend_from_slice(&chunk);
                consumed_chunks += 1;
            }
        }

        trace!(
            "drained {} bytes across {} whole chunk(s), {} chunk(s) left",
            n,
            consumed_chunks,
            self.chunks.len()
        );
        out.freeze()
    }

    /// Total buffered bytes
    pub fn size(&self) -> usize {
        self.byte_length
    }

    /// Number of stored chunks
    pub fn length(&self) -> usize {
        self.chunks.len()
    }

    /// True when no bytes are buffered
    pub fn is_empty(&self) -> bool {
        self.byte_length == 0
    }

    /// Drop all buffered chunks
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.byte_length = 0;
    }

    /// Byte at `offset` from the front, without draining
    pub fn byte_at(&self, mut offset: usize) -> Option<u8> {
        for chunk in &self.chunks {
            if offset < chunk.len() {
                return Some(chunk[offset]);
            }
            offset -= chunk.len();
        }
        None
    }

    /// Iterate over the stored chunks front to back without consuming them
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.chunks.iter().map(|c| c.as_ref())
    }

    #[inline]
    fn check_length(&self) {
        debug_assert_eq!(
            self.byte_length,
            self.chunks.iter().map(Bytes::len).sum::<usize>(),
            "byte_length out of sync with stored chunks"
        );
        debug_assert!(self.chunks.iter().all(|c| !c.is_empty()));
    }
}
