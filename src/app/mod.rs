//! Editor session
//!
//! Owns the document, the cursor and the viewport, and runs the loop:
//! render a frame, block for one key, dispatch it.

use crate::config::Config;
use crate::input::decoder::read_key;
use crate::input::keys::{Key, QUIT};
use crate::input::source::ByteSource;
use crate::model::cursor::{Cursor, Direction};
use crate::model::document::Document;
use crate::services::window_size::TerminalSize;
use crate::view::render::{clear_screen, render_frame};
use crate::view::viewport::Viewport;
use anyhow::{Context, Result};
use std::io::Write;

/// What the loop should do after a key was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressOutcome {
    Continue,
    Quit,
}

/// The editor state for one terminal session
#[derive(Debug)]
pub struct Editor {
    document: Document,
    cursor: Cursor,
    viewport: Viewport,
    config: Config,
}

impl Editor {
    pub fn new(document: Document, size: TerminalSize, config: Config) -> Self {
        match document.path() {
            Some(path) => tracing::debug!(
                "Editor created for {}: {} rows, {}x{} terminal",
                path.display(),
                document.num_rows(),
                size.cols,
                size.rows
            ),
            None => tracing::debug!(
                "Editor created for a scratch document, {}x{} terminal",
                size.cols,
                size.rows
            ),
        }
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::new(size),
            config,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scroll to the cursor and write one frame to `out`
    pub fn refresh_screen<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<()> {
        self.viewport.scroll(self.cursor);
        let frame = render_frame(&self.document, &self.viewport, self.cursor)
            .context("render frame")?;
        frame.flush_to(out).context("write")?;
        Ok(())
    }

    /// Apply one decoded key to the editor state
    pub fn process_key(&mut self, key: Key) -> KeypressOutcome {
        match key {
            Key::Char(QUIT) => return KeypressOutcome::Quit,
            Key::PageUp | Key::PageDown => {
                let direction = if key == Key::PageUp {
                    Direction::Up
                } else {
                    Direction::Down
                };
                for _ in 0..self.config.editor.page_scroll_rows {
                    self.cursor.move_in(direction, &self.document);
                }
            }
            Key::Home => self.cursor.cx = 0,
            // Last screen column, not the end of the row
            Key::End => self.cursor.cx = self.viewport.screencols - 1,
            Key::ArrowLeft => self.cursor.move_in(Direction::Left, &self.document),
            Key::ArrowRight => self.cursor.move_in(Direction::Right, &self.document),
            Key::ArrowUp => self.cursor.move_in(Direction::Up, &self.document),
            Key::ArrowDown => self.cursor.move_in(Direction::Down, &self.document),
            _ => {}
        }
        KeypressOutcome::Continue
    }

    /// Read one key and handle it. On quit the screen is cleared.
    pub fn process_keypress<S, W>(&mut self, input: &mut S, out: &mut W) -> Result<KeypressOutcome>
    where
        S: ByteSource + ?Sized,
        W: Write + ?Sized,
    {
        let key = read_key(input)?;
        tracing::trace!("Key: {}", key);

        let outcome = self.process_key(key);
        if outcome == KeypressOutcome::Quit {
            tracing::info!("Quit requested");
            clear_screen(out).context("write")?;
        }
        Ok(outcome)
    }

    /// Render and dispatch keys until the quit key
    pub fn run<S, W>(&mut self, input: &mut S, out: &mut W) -> Result<()>
    where
        S: ByteSource + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            self.refresh_screen(out)?;
            if self.process_keypress(input, out)? == KeypressOutcome::Quit {
                return Ok(());
            }
        }
    }
}
