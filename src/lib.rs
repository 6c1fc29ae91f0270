//! led - a minimal raw-mode terminal text editor
//!
//! The editor puts the terminal into raw mode, renders a scrollable window of a
//! text file with one write per frame, and decodes keystrokes (including
//! multi-byte escape sequences) into cursor movement.
//!
//! Module overview:
//! - [`services`]: terminal mode switching, tty adapters, window size, logging
//! - [`primitives`]: the per-frame output buffer
//! - [`model`]: document rows and the cursor
//! - [`view`]: viewport scrolling and frame rendering
//! - [`input`]: byte sources, key events and the escape sequence decoder
//! - [`app`]: the editor session and its read/render loop

pub mod app;
pub mod config;
pub mod input;
pub mod model;
pub mod primitives;
pub mod services;
pub mod view;

/// Version string shown in the welcome banner and by `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
