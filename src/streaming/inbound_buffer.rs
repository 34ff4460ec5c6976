//! Inbound Line Buffer
//!
//! A [`DataBuffer`] that also knows where the next protocol line ends.
//! The scan walks the fragmented chunks in place with a [`CrlfState`]
//! machine, so a terminator split across two transport reads is found
//! without ever joining the chunks.

use bytes::Bytes;

use super::crlf_fsm::CrlfState;
use super::data_buffer::DataBuffer;

/// Chunk buffer with CRLF line detection
#[derive(Debug, Default)]
pub struct InboundBuffer {
    data: DataBuffer,
}

impl InboundBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            data: DataBuffer::new(),
        }
    }

    /// Create an empty buffer with room for `chunks` chunk handles
    pub fn with_capacity(chunks: usize) -> Self {
        Self {
            data: DataBuffer::with_capacity(chunks),
        }
    }

    /// Length of the next complete line, terminator included.
    ///
    /// Returns `None` while no CR immediately followed by LF is buffered.
    /// The scan restarts from the front on every call and does not mutate
    /// the buffer. A bare LF never ends a line.
    pub fn proto_len(&self) -> Option<usize> {
        let mut state = CrlfState::new();
        let mut count = 0;

        for chunk in self.data.chunks() {
            if let Some(end) = state.feed(chunk) {
                return Some(count + end);
            }
            count += chunk.len();
        }

        None
    }

    /// Drain exactly one complete line, if one is buffered
    pub fn next_line(&mut self) -> Option<Bytes> {
        self.proto_len().map(|len| self.data.drain(len))
    }

    /// Append a chunk to the back. Empty chunks are ignored.
    pub fn fill(&mut self, chunk: impl Into<Bytes>) {
        self.data.fill(chunk);
    }

    /// Remove and return up to `n` bytes from the front
    pub fn drain(&mut self, n: usize) -> Bytes {
        self.data.drain(n)
    }

    /// Remove and return everything buffered
    pub fn drain_all(&mut self) -> Bytes {
        self.data.drain_all()
    }

    /// Total buffered bytes
    pub fn size(&self) -> usize {
        self.data.size()
    }

    /// Number of stored chunks
    pub fn length(&self) -> usize {
        self.data.length()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Byte at `offset` from the front, without draining
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.data.byte_at(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(s: &str) -> InboundBuffer {
        let mut buf = InboundBuffer::new();
        for b in s.bytes() {
            buf.fill(vec![b]);
        }
        buf
    }

    #[test]
    fn test_empty_has_no_line() {
        let buf = InboundBuffer::new();
        assert_eq!(buf.length(), 0);
        assert_eq!(buf.proto_len(), None);
    }

    #[test]
    fn test_ping_byte_by_byte() {
        let line = b"PING\r\n";
        let mut buf = InboundBuffer::new();

        for (i, &b) in line.iter().enumerate() {
            buf.fill(vec![b]);
            if i + 1 < line.len() {
                assert_eq!(buf.proto_len(), None, "prefix of {} bytes", i + 1);
            }
        }
        assert_eq!(buf.proto_len(), Some(6));
    }

    #[test]
    fn test_scan_does_not_mutate() {
        let buf = fragment("+OK\r\nPING\r\n");
        assert_eq!(buf.proto_len(), Some(5));
        assert_eq!(buf.proto_len(), Some(5));
        assert_eq!(buf.size(), 11);
        assert_eq!(buf.length(), 11);
    }

    #[test]
    fn test_terminator_split_across_chunks() {
        let mut buf = InboundBuffer::new();
        buf.fill("-ERR hello\r");
        assert_eq!(buf.proto_len(), None);

        buf.fill("\n+OK");
        assert_eq!(buf.proto_len(), Some(12));
    }

    #[test]
    fn test_bare_lf_does_not_terminate() {
        let mut buf = InboundBuffer::new();
        buf.fill("INFO {}\n");
        assert_eq!(buf.proto_len(), None);

        buf.fill("more\r\n");
        assert_eq!(buf.proto_len(), Some(14));
    }

    #[test]
    fn test_lone_cr_does_not_terminate() {
        let mut buf = InboundBuffer::new();
        buf.fill("a\rb");
        assert_eq!(buf.proto_len(), None);
        buf.fill("\r\n");
        assert_eq!(buf.proto_len(), Some(5));
    }

    #[test]
    fn test_scan_then_drain_two_lines() {
        let mut buf = fragment("-ERR hello\r\n+OK\r\n");

        let first = buf.next_line().expect("first line");
        assert_eq!(&first[..], b"-ERR hello\r\n");

        let second = buf.next_line().expect("second line");
        assert_eq!(&second[..], b"+OK\r\n");

        assert_eq!(buf.next_line(), None);
        assert_eq!(buf.size(), 0);
    }

    #[test]
    fn test_partial_line_left_in_place() {
        let mut buf = InboundBuffer::new();
        buf.fill("PONG\r\nPI");

        assert_eq!(buf.next_line().as_deref(), Some(&b"PONG\r\n"[..]));
        assert_eq!(buf.next_line(), None);
        assert_eq!(buf.size(), 2);
    }
}
