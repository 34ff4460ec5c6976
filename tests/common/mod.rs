//! Shared test support: builds protocol byte streams and fragments them.

#![allow(dead_code)]

use inbound_framing::InboundBuffer;

/// Accumulates protocol commands into one growable byte stream
#[derive(Default)]
pub struct InboundBufferBuilder {
    commands: Vec<String>,
    buf: Vec<u8>,
}

impl InboundBufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, s: &str) -> &mut Self {
        self.commands.push(s.to_string());
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    pub fn info(&mut self, json: &str) -> &mut Self {
        self.push(&format!("INFO {}\r\n", json))
    }

    pub fn ok(&mut self) -> &mut Self {
        self.push("+OK\r\n")
    }

    pub fn err(&mut self, msg: &str) -> &mut Self {
        self.push(&format!("-ERR {}\r\n", msg))
    }

    pub fn ping(&mut self) -> &mut Self {
        self.push("PING\r\n")
    }

    pub fn pong(&mut self) -> &mut Self {
        self.push("PONG\r\n")
    }

    pub fn sub(&mut self, sid: u64, subject: &str, queue: Option<&str>) -> &mut Self {
        match queue {
            Some(q) => self.push(&format!("SUB {} {} {}\r\n", subject, q, sid)),
            None => self.push(&format!("SUB {} {}\r\n", subject, sid)),
        }
    }

    /// MSG header and payload, pushed as one command
    pub fn msg(&mut self, subject: &str, sid: u64, reply: Option<&str>, payload: &str) -> &mut Self {
        let len = payload.len();
        match reply {
            Some(r) => self.push(&format!("MSG {} {} {} {}\r\n{}\r\n", subject, sid, r, len, payload)),
            None => self.push(&format!("MSG {} {} {}\r\n{}\r\n", subject, sid, len, payload)),
        }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// One chunk per byte, the worst case a transport can deliver
    pub fn fragment(&self) -> InboundBuffer {
        self.fragment_by(1)
    }

    /// Chunks of `size` bytes (last one may be shorter)
    pub fn fragment_by(&self, size: usize) -> InboundBuffer {
        let mut ib = InboundBuffer::new();
        for chunk in self.buf.chunks(size.max(1)) {
            ib.fill(chunk.to_vec());
        }
        ib
    }
}

/// Make CR and LF visible in assertion output
pub fn visible(s: &str) -> String {
    s.replace('\r', "␍").replace('\n', "␤")
}
