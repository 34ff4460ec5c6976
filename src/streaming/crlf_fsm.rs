//! CRLF Terminator State Machine
//!
//! Two states, one transition per byte:
//! - `AwaitingCr`: no carriage return pending
//! - `SawCr`: the previous byte was a carriage return
//!
//! An LF seen in `SawCr` completes a terminator. A lone LF or a CR followed
//! by anything else does not. No lookahead and no concatenated view of the
//! input are needed, so the machine can be fed across chunk boundaries.

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';

/// State of the terminator search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrlfState {
    /// No CR pending
    #[default]
    AwaitingCr,
    /// Previous byte was CR
    SawCr,
}

/// Outcome of feeding one byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Terminator not complete yet
    Continue,
    /// The byte just fed was the LF of a CRLF pair
    Terminated,
}

impl CrlfState {
    /// Create a machine in its initial state
    pub fn new() -> Self {
        Self::AwaitingCr
    }

    /// Advance by one byte - O(1)
    #[inline]
    pub fn advance(&mut self, byte: u8) -> Step {
        match (*self, byte) {
            (CrlfState::SawCr, LF) => {
                *self = CrlfState::AwaitingCr;
                Step::Terminated
            }
            (_, CR) => {
                *self = CrlfState::SawCr;
                Step::Continue
            }
            _ => {
                *self = CrlfState::AwaitingCr;
                Step::Continue
            }
        }
    }

    /// Feed a slice, returning the 1-based offset of the first terminating
    /// LF within it. State carries over when nothing is found.
    pub fn feed(&mut self, bytes: &[u8]) -> Option<usize> {
        bytes
            .iter()
            .position(|&b| self.advance(b) == Step::Terminated)
            .map(|i| i + 1)
    }

    pub fn reset(&mut self) {
        *self = CrlfState::AwaitingCr;
    }
}
