//! Frame rendering
//!
//! A frame is built in an [`OutputBuffer`] and flushed with one write:
//!
//! 1. hide the cursor and move home
//! 2. one line per screen row: document bytes, a `~` filler past the end of
//!    the document, or the welcome banner for an empty document
//! 3. erase to end of line after every row, `\r\n` between rows
//! 4. place the cursor and show it again

use crate::model::cursor::Cursor;
use crate::model::document::Document;
use crate::primitives::output_buffer::OutputBuffer;
use crate::view::viewport::Viewport;
use crossterm::{
    cursor, queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Text of the welcome banner shown for an empty document
pub fn welcome_banner() -> String {
    format!("Led Editor -- version {}", crate::VERSION)
}

/// The welcome banner centered in `screencols` columns, truncated if wider
pub fn welcome_line(screencols: usize) -> Vec<u8> {
    let banner = welcome_banner();
    let len = banner.len().min(screencols);
    let padding = ((screencols - len) / 2).saturating_sub(1);

    let mut line = Vec::with_capacity(padding + len);
    line.resize(padding, b' ');
    line.extend_from_slice(&banner.as_bytes()[..len]);
    line
}

/// Append every visible row to `ab`
pub fn draw_rows(
    document: &Document,
    viewport: &Viewport,
    ab: &mut OutputBuffer,
) -> io::Result<()> {
    for y in 0..viewport.screenrows {
        let filerow = y + viewport.rowoff;
        match document.row(filerow) {
            Some(row) => ab.append(row.visible(viewport.coloff, viewport.screencols)),
            None if document.is_empty() && y == viewport.screenrows / 3 => {
                ab.append(&welcome_line(viewport.screencols));
            }
            None => ab.append(b"~"),
        }

        queue!(ab, Clear(ClearType::UntilNewLine))?;
        if y + 1 < viewport.screenrows {
            ab.append(b"\r\n");
        }
    }
    Ok(())
}

/// Build one complete frame. The viewport must already be scrolled to the
/// cursor.
pub fn render_frame(
    document: &Document,
    viewport: &Viewport,
    cursor_pos: Cursor,
) -> io::Result<OutputBuffer> {
    let mut ab = OutputBuffer::with_capacity(viewport.screenrows * (viewport.screencols + 8));

    queue!(ab, cursor::Hide, cursor::MoveTo(0, 0))?;
    draw_rows(document, viewport, &mut ab)?;

    let (col, row) = viewport.cursor_screen_position(cursor_pos);
    queue!(
        ab,
        cursor::MoveTo(to_u16(col), to_u16(row)),
        cursor::Show
    )?;
    Ok(ab)
}

/// Clear the whole screen and move the cursor home, in one write
pub fn clear_screen<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    let mut ab = OutputBuffer::new();
    queue!(ab, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    ab.flush_to(out)
}

/// Pass `result` through, clearing the screen first if it is an error.
/// The clear is best-effort; the original error is what gets reported.
pub fn clear_screen_on_error<T, W: Write + ?Sized>(
    result: anyhow::Result<T>,
    out: &mut W,
) -> anyhow::Result<T> {
    if let Err(e) = &result {
        tracing::error!("Fatal: {:#}", e);
        let _ = clear_screen(out);
    }
    result
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
