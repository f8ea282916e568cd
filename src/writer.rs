//! Write cursor over a growable byte buffer

use crate::varint::{varint_size, write_varint_no_alloc, MAX_VARINT_LEN};
use bytes::{BufMut, Bytes, BytesMut};

/// Initial buffer capacity for a freshly created writer
pub const INITIAL_CAPACITY: usize = 1024;

/// Append-only write cursor
///
/// Owns a growable byte buffer and appends raw bytes, single bytes,
/// varints, and length-prefixed payloads. The buffer doubles its capacity
/// whenever a write would not fit, so repeated writes are amortized O(1)
/// per byte. Written bytes are observed through [`ByteWriter::as_bytes`],
/// which returns exactly the concatenation of all writes in call order.
pub struct ByteWriter {
    buf: BytesMut,
}

impl ByteWriter {
    /// Create a writer with the default initial capacity
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create a writer with an explicit initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Append raw bytes
    pub fn write(&mut self, data: &[u8]) {
        self.ensure(data.len());
        self.buf.put_slice(data);
    }

    /// Append a length-prefixed payload: `[varint length][raw bytes]`
    pub fn write_nested(&mut self, data: &[u8]) {
        self.write_uvarint(data.len() as u64);
        self.write(data);
    }

    /// Append a single byte
    pub fn write_byte(&mut self, value: u8) {
        self.ensure(1);
        self.buf.put_u8(value);
    }

    /// Append a signed 64-bit varint
    ///
    /// The value is reinterpreted as its unsigned 64-bit bit pattern (no
    /// zigzag transform), so negative values always occupy the full ten
    /// bytes. Callers wanting compact negatives must apply their own
    /// transform before encoding.
    pub fn write_varint(&mut self, value: i64) {
        self.write_uvarint(value as u64);
    }

    /// Append an unsigned 64-bit varint
    pub fn write_uvarint(&mut self, value: u64) {
        self.ensure(varint_size(value));
        let mut scratch = [0u8; MAX_VARINT_LEN];
        let len = write_varint_no_alloc(value, &mut scratch, 0);
        self.buf.put_slice(&scratch[..len]);
    }

    /// Get the bytes written so far
    ///
    /// Non-mutating and repeatable; the write position is unaffected.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the writer, handing the written bytes to a cheaply
    /// cloneable [`Bytes`]
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current allocated capacity
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Reset the write position to zero, keeping the allocation
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Grow the buffer until `additional` more bytes fit
    ///
    /// Doubles the current capacity until the write fits, preserving
    /// everything already written.
    fn ensure(&mut self, additional: usize) {
        let needed = self.buf.len() + additional;
        if needed <= self.buf.capacity() {
            return;
        }
        let mut cap = self.buf.capacity().max(1);
        while cap < needed {
            cap *= 2;
        }
        self.buf.reserve(cap - self.buf.len());
    }
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_bytes_concatenate() {
        let mut w = ByteWriter::new();
        w.write(b"abc");
        w.write(b"def");
        assert_eq!(w.as_bytes(), b"abcdef");
        assert_eq!(w.len(), 6);
    }

    #[test]
    fn test_write_byte() {
        let mut w = ByteWriter::new();
        w.write_byte(65);
        w.write_byte(66);
        w.write_byte(67);
        assert_eq!(w.as_bytes(), b"ABC");
    }

    #[test]
    fn test_write_nested() {
        let mut w = ByteWriter::new();
        w.write_nested(b"hello");
        assert_eq!(w.as_bytes(), b"\x05hello");
    }

    #[test]
    fn test_write_varint_negative_is_ten_bytes() {
        let mut w = ByteWriter::new();
        w.write_varint(-1);
        let expected: [u8; 10] = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
        assert_eq!(w.as_bytes(), &expected);
    }

    #[test]
    fn test_growth_preserves_contents() {
        let mut w = ByteWriter::with_capacity(8);
        for i in 0..1000u32 {
            w.write(&i.to_le_bytes());
        }
        assert_eq!(w.len(), 4000);
        assert!(w.capacity() >= 4000);
        let bytes = w.as_bytes();
        for i in 0..1000u32 {
            let at = i as usize * 4;
            assert_eq!(&bytes[at..at + 4], &i.to_le_bytes());
        }
    }

    #[test]
    fn test_snapshot_repeatable() {
        let mut w = ByteWriter::new();
        w.write(b"xyz");
        assert_eq!(w.as_bytes(), b"xyz");
        assert_eq!(w.as_bytes(), b"xyz");
        assert_eq!(w.len(), 3);
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut w = ByteWriter::new();
        w.write(b"first");
        let cap = w.capacity();
        w.clear();
        assert!(w.is_empty());
        assert_eq!(w.capacity(), cap);
        w.write(b"second");
        assert_eq!(w.as_bytes(), b"second");
    }

    #[test]
    fn test_freeze() {
        let mut w = ByteWriter::new();
        w.write_nested(b"abc");
        let frozen = w.freeze();
        assert_eq!(&frozen[..], b"\x03abc");
    }
}
