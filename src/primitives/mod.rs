//! Low-level primitives
//!
//! This module contains the byte accumulator every frame is rendered into.

pub mod output_buffer;
