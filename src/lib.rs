//! # Bytewire
//!
//! Byte stream cursors with varint and length-prefixed encoding.
//!
//! This crate provides the two primitives beneath a binary serialization
//! layer: [`ByteWriter`], an append-only growable write cursor, and
//! [`ByteReader`], a bounds-checked read cursor over a borrowed slice.
//! Both agree on two wire conventions:
//!
//! - **Varint**: unsigned LEB128, 7 data bits plus a continuation bit per
//!   byte, least-significant group first, at most 10 bytes for a 64-bit
//!   value. Signed values are encoded via their unsigned bit pattern, not
//!   zigzag.
//! - **Nested byte string**: `[varint length][raw bytes]`.
//!
//! ## Example
//!
//! ```rust
//! use bytewire::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_varint(300);
//! writer.write_nested(b"hello");
//!
//! let mut reader = ByteReader::new(writer.as_bytes());
//! assert_eq!(reader.read_varint().unwrap(), 300);
//! assert_eq!(reader.read_nested().unwrap(), b"hello");
//! assert_eq!(reader.remaining(), 0);
//! ```

mod error;
mod reader;
mod varint;
mod writer;

pub use error::BytewireError;
pub use reader::ByteReader;
pub use writer::{ByteWriter, INITIAL_CAPACITY};
