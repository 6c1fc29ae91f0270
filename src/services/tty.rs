//! Adapters between the controlling terminal and the editor core
//!
//! [`TtyInput`] turns raw-mode reads on stdin into a [`ByteSource`];
//! [`TtyOutput`] writes frames straight to the stdout file descriptor,
//! bypassing std's line buffering so a frame is one `write(2)`.

use crate::input::source::ByteSource;
use nix::errno::Errno;
use std::io::{self, Write};
use std::os::fd::AsFd;

/// Stdin in raw mode, one `read(2)` of one byte per call
#[derive(Debug, Default)]
pub struct TtyInput;

impl TtyInput {
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for TtyInput {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        read_one(nix::unistd::read(io::stdin().as_fd(), &mut byte), byte[0])
    }
}

/// Map the result of a one-byte read to a byte or a timeout
fn read_one(result: nix::Result<usize>, byte: u8) -> io::Result<Option<u8>> {
    match result {
        Ok(1) => Ok(Some(byte)),
        // VMIN = 0: a zero-length read is the VTIME timeout
        Ok(_) => Ok(None),
        Err(Errno::EAGAIN | Errno::EINTR) => Ok(None),
        Err(e) => Err(io::Error::from(e)),
    }
}

/// Unbuffered stdout
#[derive(Debug, Default)]
pub struct TtyOutput;

impl TtyOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Write for TtyOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        nix::unistd::write(io::stdout().as_fd(), buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
