//! Escape sequence decoder
//!
//! Navigation keys reach a raw-mode terminal as short escape sequences:
//!
//! | bytes             | key                 |
//! |-------------------|---------------------|
//! | `ESC [ A`..`D`    | Up, Down, Right, Left |
//! | `ESC [ H` / `F`   | Home / End          |
//! | `ESC O H` / `F`   | Home / End          |
//! | `ESC [ 1 ~`, `7 ~`| Home                |
//! | `ESC [ 4 ~`, `8 ~`| End                 |
//! | `ESC [ 3 ~`       | Delete              |
//! | `ESC [ 5 ~` / `6 ~` | PageUp / PageDown |
//!
//! Each follow byte gets exactly one bounded-wait read. A missing byte or an
//! unknown sequence decodes to [`Key::Escape`]; the bytes already read are
//! consumed.

use crate::input::keys::{Key, ESC};
use crate::input::source::ByteSource;
use anyhow::{Context, Result};

/// Block until one key is available and decode it.
///
/// Timeouts before the first byte are retried; a read error is returned.
pub fn read_key<S: ByteSource + ?Sized>(source: &mut S) -> Result<Key> {
    let byte = loop {
        if let Some(byte) = source.read_byte().context("read")? {
            break byte;
        }
    };

    if byte != ESC {
        return Ok(Key::Char(byte));
    }

    let key = decode_escape(source)?;
    tracing::trace!("Decoded escape sequence as {:?}", key);
    Ok(key)
}

/// Decode the bytes that follow an escape byte
fn decode_escape<S: ByteSource + ?Sized>(source: &mut S) -> Result<Key> {
    let Some(first) = source.read_byte().context("read")? else {
        return Ok(Key::Escape);
    };
    let Some(second) = source.read_byte().context("read")? else {
        return Ok(Key::Escape);
    };

    let key = match (first, second) {
        (b'[', digit @ b'0'..=b'9') => match source.read_byte().context("read")? {
            Some(b'~') => tilde_key(digit),
            _ => None,
        },
        (b'[', letter) => csi_key(letter),
        (b'O', letter) => ss3_key(letter),
        _ => None,
    };

    Ok(key.unwrap_or(Key::Escape))
}

/// `ESC [ <digit> ~`
fn tilde_key(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}

/// `ESC [ <letter>`
fn csi_key(letter: u8) -> Option<Key> {
    match letter {
        b'A' => Some(Key::ArrowUp),
        b'B' => Some(Key::ArrowDown),
        b'C' => Some(Key::ArrowRight),
        b'D' => Some(Key::ArrowLeft),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

/// `ESC O <letter>`
fn ss3_key(letter: u8) -> Option<Key> {
    match letter {
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}
