use crate::model::cursor::Cursor;
use crate::services::window_size::TerminalSize;

/// The viewport - what portion of the document is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Document row shown on the first screen line
    pub rowoff: usize,

    /// Document column shown in the first screen column (horizontal scroll)
    pub coloff: usize,

    /// Terminal dimensions, detected once at startup
    pub screenrows: usize,
    pub screencols: usize,
}

impl Viewport {
    /// Create a viewport at the top-left of the document.
    /// Dimensions are clamped to at least one cell.
    pub fn new(size: TerminalSize) -> Self {
        Self {
            rowoff: 0,
            coloff: 0,
            screenrows: size.rows.max(1),
            screencols: size.cols.max(1),
        }
    }

    /// Move the offsets so the cursor cell is inside the window.
    ///
    /// Afterwards `rowoff <= cy < rowoff + screenrows` and
    /// `coloff <= cx < coloff + screencols`. The cursor is never changed.
    pub fn scroll(&mut self, cursor: Cursor) {
        if cursor.cy < self.rowoff {
            self.rowoff = cursor.cy;
        }
        if cursor.cx < self.coloff {
            self.coloff = cursor.cx;
        }
        if cursor.cy >= self.rowoff + self.screenrows {
            self.rowoff = cursor.cy + 1 - self.screenrows;
        }
        if cursor.cx >= self.coloff + self.screencols {
            self.coloff = cursor.cx + 1 - self.screencols;
        }
    }

    /// Whether the cursor cell is inside the window
    pub fn contains(&self, cursor: Cursor) -> bool {
        (self.rowoff..self.rowoff + self.screenrows).contains(&cursor.cy)
            && (self.coloff..self.coloff + self.screencols).contains(&cursor.cx)
    }

    /// Zero-based (column, row) screen cell of the cursor
    pub fn cursor_screen_position(&self, cursor: Cursor) -> (usize, usize) {
        (
            cursor.cx.saturating_sub(self.coloff),
            cursor.cy.saturating_sub(self.rowoff),
        )
    }
}
