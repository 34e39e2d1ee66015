//! Line assembly for the serial byte stream.
//!
//! Bytes are accumulated until a CR or LF arrives. The completed line is
//! trimmed of surrounding ASCII whitespace and emitted if anything is left.
//!
//! The buffer is bounded: once [`MAX_LINE_LEN`] bytes are buffered, further
//! bytes of the same line are dropped until the next terminator. The
//! truncated line is still emitted and will normally fail to decode.

use heapless::Vec;

/// Maximum buffered line length in bytes
pub const MAX_LINE_LEN: usize = 1536;

/// A complete, trimmed, non-empty line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8, MAX_LINE_LEN>,
}

impl Line {
    /// Raw line bytes (no terminator, trimmed)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for emitted lines, provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Accumulates bytes into lines
#[derive(Debug, Clone)]
pub struct LineAssembler {
    buffer: Vec<u8, MAX_LINE_LEN>,
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl LineAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
        }
    }

    /// Discard any partially buffered line
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of bytes buffered for the current line
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Some(line)` when a terminator completes a non-empty line.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        if byte == b'\n' || byte == b'\r' {
            let line = self.take_line();
            self.reset();
            return line;
        }

        // Overflow bytes are discarded
        let _ = self.buffer.push(byte);
        None
    }

    /// Feed a chunk of bytes, calling `on_line` for every completed line
    pub fn feed_bytes<F>(&mut self, bytes: &[u8], mut on_line: F)
    where
        F: FnMut(Line),
    {
        for &byte in bytes {
            if let Some(line) = self.feed(byte) {
                on_line(line);
            }
        }
    }

    fn take_line(&self) -> Option<Line> {
        let trimmed = self.buffer.trim_ascii();
        if trimmed.is_empty() {
            return None;
        }

        // Never longer than the buffer it was sliced from
        let bytes = Vec::from_slice(trimmed).ok()?;
        Some(Line { bytes })
    }
}
