//! Terminal geometry detection
//!
//! The kernel is asked first (`TIOCGWINSZ`). Some terminals report zero
//! columns or do not support the ioctl; then the cursor is pushed to the
//! bottom-right corner and the terminal is asked where it ended up.

use crate::input::source::ByteSource;
use crate::primitives::output_buffer::OutputBuffer;
use anyhow::{anyhow, Context, Result};
use crossterm::{cursor, queue};
use std::io::Write;

/// Device status report: "where is the cursor?"
const CURSOR_POSITION_QUERY: &[u8] = b"\x1b[6n";

/// Longest cursor position report accepted, terminator excluded
const MAX_REPORT_LEN: usize = 31;

/// Size of the terminal in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub rows: usize,
    pub cols: usize,
}

/// Detect the terminal size, falling back to a cursor position probe over
/// `input`/`output` when the kernel does not know it.
pub fn get_window_size<S, W>(input: &mut S, output: &mut W) -> Result<TerminalSize>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    if let Some(size) = kernel_window_size() {
        tracing::info!("Terminal size: {}x{}", size.cols, size.rows);
        return Ok(size);
    }

    tracing::debug!("TIOCGWINSZ unavailable, probing with the cursor position");
    let size = probe_window_size(input, output)?;
    tracing::info!("Terminal size (probed): {}x{}", size.cols, size.rows);
    Ok(size)
}

fn kernel_window_size() -> Option<TerminalSize> {
    // SAFETY: winsize is plain old data and is only read after a successful ioctl
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    // SAFETY: TIOCGWINSZ writes a winsize through the pointer, which is valid
    let result = unsafe { libc::ioctl(libc::STDIN_FILENO, libc::TIOCGWINSZ, &mut ws) };
    if result == -1 || ws.ws_col == 0 {
        return None;
    }
    Some(TerminalSize {
        rows: usize::from(ws.ws_row),
        cols: usize::from(ws.ws_col),
    })
}

/// Move the cursor as far right and down as it goes, then read its position
pub fn probe_window_size<S, W>(input: &mut S, output: &mut W) -> Result<TerminalSize>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    let mut ab = OutputBuffer::new();
    queue!(ab, cursor::MoveRight(999), cursor::MoveDown(999))
        .context("move cursor to bottom right")?;
    ab.flush_to(output)
        .context("move cursor to bottom right")?;
    cursor_position(input, output)
}

/// Ask the terminal for the cursor position and wait for the report
pub fn cursor_position<S, W>(input: &mut S, output: &mut W) -> Result<TerminalSize>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    output
        .write_all(CURSOR_POSITION_QUERY)
        .and_then(|()| output.flush())
        .context("query cursor position")?;

    let mut report = Vec::with_capacity(MAX_REPORT_LEN);
    while report.len() < MAX_REPORT_LEN {
        match input.read_byte().context("read")? {
            Some(b'R') | None => break,
            Some(byte) => report.push(byte),
        }
    }

    parse_cursor_position_report(&report)
        .ok_or_else(|| anyhow!("invalid cursor position report {:?}", report))
}

/// Parse `ESC [ rows ; cols` (the `R` terminator already stripped)
pub fn parse_cursor_position_report(report: &[u8]) -> Option<TerminalSize> {
    let body = report.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some(TerminalSize {
        rows: rows.parse().ok()?,
        cols: cols.parse().ok()?,
    })
}
