//! Keyboard input
//!
//! Bytes arrive from a [`ByteSource`](source::ByteSource) one at a time and are
//! decoded into logical [`Key`](keys::Key) events by [`decoder::read_key`].

pub mod decoder;
pub mod keys;
pub mod source;
