//! View layer
//!
//! This module maps the document onto the terminal: the viewport decides which
//! rows and columns are visible, the renderer emits the bytes that draw them.

pub mod render;
pub mod viewport;
