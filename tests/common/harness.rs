// EditorTestHarness - Virtual terminal environment for E2E testing

#![allow(dead_code)]

use led::app::{Editor, KeypressOutcome};
use led::config::Config;
use led::input::keys::{Key, ESC};
use led::input::source::ScriptedInput;
use led::model::cursor::Cursor;
use led::model::document::Document;
use led::services::window_size::TerminalSize;
use std::io;
use tempfile::TempDir;

/// Bytes a terminal sends for `key`
pub fn key_bytes(key: Key) -> Vec<u8> {
    let seq: &[u8] = match key {
        Key::Char(b) => return vec![b],
        Key::Escape => &[ESC],
        Key::ArrowUp => b"\x1b[A",
        Key::ArrowDown => b"\x1b[B",
        Key::ArrowRight => b"\x1b[C",
        Key::ArrowLeft => b"\x1b[D",
        Key::Home => b"\x1b[H",
        Key::End => b"\x1b[F",
        Key::Delete => b"\x1b[3~",
        Key::PageUp => b"\x1b[5~",
        Key::PageDown => b"\x1b[6~",
    };
    seq.to_vec()
}

/// Drives an [`Editor`] with raw terminal bytes and feeds every frame it
/// writes through a vt100 emulator
pub struct EditorTestHarness {
    editor: Editor,

    /// Keeps the file backing the document alive
    _temp_dir: Option<TempDir>,

    /// VT100 parser for testing real ANSI terminal output
    /// This simulates how a real terminal would interpret the escape sequences
    vt100_parser: vt100::Parser,

    term_width: u16,
    term_height: u16,

    quit: bool,
}

impl EditorTestHarness {
    /// Empty document
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        Self::with_document(Document::empty(), None, width, height, Config::default())
    }

    /// Document loaded from a temporary file holding `content`
    pub fn with_content(width: u16, height: u16, content: &str) -> io::Result<Self> {
        Self::with_content_and_config(width, height, content, Config::default())
    }

    pub fn with_content_and_config(
        width: u16,
        height: u16,
        content: &str,
        config: Config,
    ) -> io::Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("test.txt");
        std::fs::write(&path, content)?;
        let document = Document::open(&path).map_err(io::Error::other)?;
        Self::with_document(document, Some(temp_dir), width, height, config)
    }

    /// One row per entry of `lines`
    pub fn with_lines(width: u16, height: u16, lines: &[&str]) -> io::Result<Self> {
        let mut content = lines.join("\n");
        content.push('\n');
        Self::with_content(width, height, &content)
    }

    fn with_document(
        document: Document,
        temp_dir: Option<TempDir>,
        width: u16,
        height: u16,
        config: Config,
    ) -> io::Result<Self> {
        let size = TerminalSize {
            rows: usize::from(height),
            cols: usize::from(width),
        };
        Ok(EditorTestHarness {
            editor: Editor::new(document, size, config),
            _temp_dir: temp_dir,
            vt100_parser: vt100::Parser::new(height, width, 0),
            term_width: width,
            term_height: height,
            quit: false,
        })
    }

    /// Draw one frame
    pub fn render(&mut self) -> io::Result<()> {
        let mut out = Vec::new();
        self.editor
            .refresh_screen(&mut out)
            .map_err(io::Error::other)?;
        self.vt100_parser.process(&out);
        Ok(())
    }

    /// Feed raw input bytes. Every decoded key is dispatched and followed by
    /// a frame, like the main loop. Stops at the quit key.
    pub fn send_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut input = ScriptedInput::new(bytes);
        while !input.is_empty() && !self.quit {
            let mut out = Vec::new();
            let outcome = self
                .editor
                .process_keypress(&mut input, &mut out)
                .map_err(io::Error::other)?;
            self.vt100_parser.process(&out);
            if outcome == KeypressOutcome::Quit {
                self.quit = true;
            } else {
                self.render()?;
            }
        }
        Ok(())
    }

    pub fn send_key(&mut self, key: Key) -> io::Result<()> {
        self.send_bytes(&key_bytes(key))
    }

    pub fn send_key_repeat(&mut self, key: Key, count: usize) -> io::Result<()> {
        for _ in 0..count {
            self.send_key(key)?;
        }
        Ok(())
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn cursor(&self) -> Cursor {
        self.editor.cursor()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Text of one screen row as the emulator shows it, trailing blanks removed
    pub fn get_row_text(&self, row: u16) -> String {
        let screen = self.vt100_parser.screen();
        let mut text = String::new();
        for col in 0..self.term_width {
            match screen.cell(row, col) {
                Some(cell) if !cell.contents().is_empty() => text.push_str(&cell.contents()),
                _ => text.push(' '),
            }
        }
        text.trim_end().to_string()
    }

    pub fn screen_to_string(&self) -> String {
        (0..self.term_height)
            .map(|row| self.get_row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// (column, row) of the terminal cursor
    pub fn screen_cursor_position(&self) -> (u16, u16) {
        let (row, col) = self.vt100_parser.screen().cursor_position();
        (col, row)
    }

    pub fn cursor_hidden(&self) -> bool {
        self.vt100_parser.screen().hide_cursor()
    }

    /// Verify text appears on screen
    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{text}'\nScreen content:\n{screen}"
        );
    }

    /// Verify text does not appear on screen
    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen to not contain '{text}'\nScreen content:\n{screen}"
        );
    }
}
