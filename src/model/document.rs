//! Document store: the open file as an ordered list of byte rows
//!
//! Rows keep the raw bytes of each line with the trailing line terminator
//! removed. No encoding is assumed and the store is never written back.
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One line of the document, without its `\n`/`\r` terminator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    chars: Vec<u8>,
}

impl Row {
    pub fn new(chars: impl Into<Vec<u8>>) -> Self {
        Self {
            chars: chars.into(),
        }
    }

    /// Build a row from a raw line, dropping every trailing `\n` and `\r`
    pub fn from_line(mut line: Vec<u8>) -> Self {
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        Self { chars: line }
    }

    /// Length of the row in bytes
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// The part of the row visible in a window starting at column `coloff`
    /// and `width` columns wide. Empty when the row ends before `coloff`.
    pub fn visible(&self, coloff: usize, width: usize) -> &[u8] {
        let start = coloff.min(self.chars.len());
        let end = start.saturating_add(width).min(self.chars.len());
        &self.chars[start..end]
    }
}

/// Ordered rows of the open file
#[derive(Debug, Clone, Default)]
pub struct Document {
    rows: Vec<Row>,
    path: Option<PathBuf>,
}

impl Document {
    /// A scratch document with zero rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load `path`, one row per line in file order
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let mut document = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("read {}", path.display()))?;
        document.path = Some(path.to_path_buf());
        tracing::info!(
            "Loaded {} ({} rows)",
            path.display(),
            document.num_rows()
        );
        Ok(document)
    }

    /// Read rows from any buffered reader until EOF
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut document = Self::empty();
        loop {
            let mut line = Vec::new();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            document.append_row(Row::from_line(line));
        }
        Ok(document)
    }

    pub fn append_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Path the document was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
