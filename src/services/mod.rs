//! Operating system services
//!
//! Everything that talks to the controlling terminal or the process
//! environment lives here, behind small types the editor core can be tested
//! without.

pub mod terminal_modes;
pub mod tracing_setup;
pub mod tty;
pub mod window_size;
