//! Raw/cooked terminal mode switching
//!
//! [`TerminalModes::enable`] captures the terminal attributes of stdin, then
//! switches to raw mode. The original attributes are restored exactly once,
//! whichever way the process leaves: [`TerminalModes::disable`] on the normal
//! path, `Drop` on early returns, and a [`RestoreHandle`] from a panic hook.

use anyhow::{Context, Result};
use nix::sys::termios::{
    self, ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices,
    Termios,
};
use std::io;
use std::os::fd::AsFd;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable, thread-safe way to put the original attributes back.
///
/// Holds a plain copy of the captured attributes so it can be moved into a
/// panic hook. All handles of one [`TerminalModes`] share a single
/// "restored" flag.
#[derive(Clone)]
pub struct RestoreHandle {
    original: libc::termios,
    restored: Arc<AtomicBool>,
}

impl std::fmt::Debug for RestoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestoreHandle")
            .field("restored", &self.is_restored())
            .finish_non_exhaustive()
    }
}

impl RestoreHandle {
    /// Restore the original attributes unless some handle already did
    pub fn restore(&self) -> Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        let original = Termios::from(self.original);
        termios::tcsetattr(io::stdin().as_fd(), SetArg::TCSAFLUSH, &original)
            .map_err(io::Error::from)
            .context("tcsetattr")?;
        tracing::debug!("Terminal attributes restored");
        Ok(())
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }
}

/// Raw mode guard for the controlling terminal
#[derive(Debug)]
pub struct TerminalModes {
    handle: RestoreHandle,
}

impl TerminalModes {
    /// Capture the current attributes of stdin and switch it to raw mode.
    ///
    /// Reads return after at most `read_timeout_deciseconds` with zero or more
    /// bytes.
    pub fn enable(read_timeout_deciseconds: u8) -> Result<Self> {
        let original = termios::tcgetattr(io::stdin().as_fd())
            .map_err(io::Error::from)
            .context("tcgetattr")?;

        // Restoration is armed before the attributes change
        let modes = Self {
            handle: RestoreHandle {
                original: libc::termios::from(original.clone()),
                restored: Arc::new(AtomicBool::new(false)),
            },
        };

        let raw = raw_attributes(&original, read_timeout_deciseconds);
        termios::tcsetattr(io::stdin().as_fd(), SetArg::TCSAFLUSH, &raw)
            .map_err(io::Error::from)
            .context("tcsetattr")?;

        tracing::info!(
            "Raw mode enabled (read timeout {} ds)",
            read_timeout_deciseconds
        );
        Ok(modes)
    }

    /// A handle that can restore the terminal from outside the guard
    pub fn restore_handle(&self) -> RestoreHandle {
        self.handle.clone()
    }

    /// Restore the captured attributes
    pub fn disable(&mut self) -> Result<()> {
        self.handle.restore()
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        if let Err(e) = self.handle.restore() {
            tracing::warn!("Failed to restore terminal attributes: {:#}", e);
        }
    }
}

/// Raw-mode variant of `original`.
///
/// Input: no CR-to-NL translation, no software flow control, no break signal,
/// no parity check, no 8th-bit stripping. Output: no post-processing. Local:
/// no echo, no canonical mode, no INTR/QUIT signals, no extended input
/// processing. 8-bit characters. A read returns as soon as one byte arrives
/// or after `read_timeout_deciseconds` with nothing.
pub fn raw_attributes(original: &Termios, read_timeout_deciseconds: u8) -> Termios {
    let mut raw = original.clone();
    raw.input_flags &= !(InputFlags::ICRNL
        | InputFlags::IXON
        | InputFlags::BRKINT
        | InputFlags::INPCK
        | InputFlags::ISTRIP);
    raw.output_flags &= !OutputFlags::OPOST;
    raw.control_flags |= ControlFlags::CS8;
    raw.local_flags &=
        !(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::ISIG | LocalFlags::IEXTEN);
    raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
    raw.control_chars[SpecialCharacterIndices::VTIME as usize] = read_timeout_deciseconds;
    raw
}
