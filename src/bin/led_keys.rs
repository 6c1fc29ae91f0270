//! Print every key the decoder produces, one per line, until `q`.
//!
//! Useful for checking what a terminal sends for navigation keys:
//! `cargo run --features dev-bins --bin led-keys`

use anyhow::Result as AnyhowResult;
use led::config::Config;
use led::input::decoder::read_key;
use led::input::keys::Key;
use led::services::terminal_modes::TerminalModes;
use led::services::tty::{TtyInput, TtyOutput};
use std::io::Write;

fn main() -> AnyhowResult<()> {
    let config = Config::default();
    let mut modes = TerminalModes::enable(config.editor.read_timeout_deciseconds)?;

    let restore = modes.restore_handle();
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = restore.restore();
        original_hook(panic);
    }));

    let result = echo_keys(&mut TtyInput::new(), &mut TtyOutput::new());
    modes.disable()?;
    result
}

fn echo_keys(input: &mut TtyInput, out: &mut TtyOutput) -> AnyhowResult<()> {
    loop {
        let key = read_key(input)?;
        // OPOST is off, so the line break needs an explicit carriage return
        write!(out, "{}\r\n", key)?;
        if key == Key::Char(b'q') {
            return Ok(());
        }
    }
}
