use crate::model::document::{Document, Row};

/// Logical cursor position within the document
///
/// `cy` is a row index and `cx` a byte column in that row. Both are document
/// coordinates; the viewport maps them to screen cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
}

/// Direction of a single-cell cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Cursor {
    pub fn new(cx: usize, cy: usize) -> Self {
        Self { cx, cy }
    }

    /// Move one cell, wrapping at line boundaries and stopping at the first
    /// and last rows, then clamp `cx` to the row the cursor lands on.
    pub fn move_in(&mut self, direction: Direction, document: &Document) {
        match direction {
            Direction::Left => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = row_size(document, self.cy);
                }
            }
            Direction::Right => {
                if let Some(row) = document.row(self.cy) {
                    if self.cx < row.size() {
                        self.cx += 1;
                    } else if self.cy + 1 < document.num_rows() {
                        self.cy += 1;
                        self.cx = 0;
                    }
                }
            }
            Direction::Up => {
                self.cy = self.cy.saturating_sub(1);
            }
            Direction::Down => {
                if self.cy + 1 < document.num_rows() {
                    self.cy += 1;
                }
            }
        }
        self.clamp_to_row(document);
    }

    /// Clamp `cx` to the length of row `cy`, or to 0 past the last row
    pub fn clamp_to_row(&mut self, document: &Document) {
        self.cx = self.cx.min(row_size(document, self.cy));
    }
}

fn row_size(document: &Document, cy: usize) -> usize {
    document.row(cy).map_or(0, Row::size)
}
