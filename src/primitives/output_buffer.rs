//! Append-only byte buffer for a single frame
//!
//! Everything one render pass emits (escape sequences and row bytes) is
//! accumulated here and handed to the terminal with a single write, so the
//! screen never shows a half-drawn frame.

use std::io::{self, Write};

/// Growable byte run owned by one render pass
#[derive(Debug, Default)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer that can hold `capacity` bytes before growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Append a byte run after everything appended so far.
    ///
    /// If the buffer cannot grow, the run is dropped and the buffer is left
    /// exactly as it was.
    pub fn append(&mut self, s: &[u8]) {
        if self.bytes.try_reserve(s.len()).is_err() {
            return;
        }
        self.bytes.extend_from_slice(s);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the whole buffer to `out` in one pass and discard it
    pub fn flush_to<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bytes)?;
        out.flush()
    }
}

/// Lets crossterm commands be queued straight into the frame
impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
