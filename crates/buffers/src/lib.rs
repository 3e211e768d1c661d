//! Byte-order primitives for the rencode wire format.
//!
//! Everything multi-byte on the wire is big-endian regardless of host
//! endianness. [`Writer`] produces bytes into an owned growable buffer,
//! [`Reader`] consumes them from an immutable slice behind a bounds-checked
//! cursor.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Errors surfaced by [`Reader`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read would extend past the end of the buffer.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
}
