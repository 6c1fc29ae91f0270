use std::fmt;

/// The escape byte that starts every terminal key sequence
pub const ESC: u8 = 0x1b;

/// Byte produced by holding Ctrl with `k` (`k & 0x1f`)
pub const fn ctrl_key(k: u8) -> u8 {
    k & 0x1f
}

/// Ctrl-Q, the quit key
pub const QUIT: u8 = ctrl_key(b'q');

/// A logical key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single raw byte, printable or control
    Char(u8),
    /// A lone escape byte, or an escape sequence that was not recognised
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Delete,
    PageUp,
    PageDown,
}

impl Key {
    /// True for raw control bytes (0x00-0x1f and 0x7f)
    pub fn is_control(self) -> bool {
        matches!(self, Key::Char(b) if b.is_ascii_control())
    }
}

/// Human readable form used by the key debug tool and trace logs:
/// `113 ('q')` for printable bytes, `17` for control bytes, the key name
/// otherwise.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Key::Char(b) if self.is_control() || !b.is_ascii() => write!(f, "{}", b),
            Key::Char(b) => write!(f, "{} ('{}')", b, b as char),
            named => write!(f, "{:?}", named),
        }
    }
}
