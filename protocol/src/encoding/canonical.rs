//! # Canonical Message Serialization
//!
//! A small, deterministic tag/length/varint codec. The format is
//! protobuf-compatible on the wire but hand-rolled on purpose: canonical
//! byte output is a consensus requirement, and we want the rules to live in
//! one screen of code rather than in a code generator's defaults.
//!
//! The canonical rules:
//!
//! - Fields are written in ascending field-number order, always.
//! - Default values (zero integers, empty byte strings) are omitted
//!   entirely — no tag, no payload.
//! - Varints are minimal-length base-128 little-endian.
//!
//! Any type that participates in hashing or signing implements
//! [`Canonical`] and builds its bytes through a [`FieldWriter`].

use crate::error::Result;

/// Wire type for varint-encoded scalar fields.
const WIRE_VARINT: u64 = 0;

/// Wire type for length-delimited fields (bytes, strings, sub-messages).
const WIRE_LENGTH_DELIMITED: u64 = 2;

/// Types with a single canonical byte serialization.
///
/// The contract: equal values produce identical bytes, on every platform,
/// in every client version. These bytes feed directly into SHA-256 to form
/// content identifiers, so "mostly stable" is not good enough.
pub trait Canonical {
    /// Serialize to the canonical byte form.
    fn canonical_bytes(&self) -> Result<Vec<u8>>;
}

/// Append a minimal-length unsigned varint to `buf`.
pub fn write_uvarint(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            return;
        }
        buf.push(byte | 0x80);
    }
}

/// Read an unsigned varint from the front of `data`.
///
/// Returns the value and the number of bytes consumed, or `None` if the
/// input is truncated or the varint overflows 64 bits.
pub fn read_uvarint(data: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in data.iter().enumerate() {
        if shift >= 64 {
            return None;
        }
        let payload = (byte & 0x7f) as u64;
        // Reject bits that would be shifted off the top of a u64.
        if shift == 63 && payload > 1 {
            return None;
        }
        value |= payload << shift;
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
        shift += 7;
    }

    None
}

/// Incremental canonical message builder.
///
/// Callers are responsible for emitting fields in ascending field-number
/// order; the writer enforces default omission but trusts the order, since
/// every call site in this crate is a fixed straight-line sequence.
#[derive(Debug, Default)]
pub struct FieldWriter {
    buf: Vec<u8>,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    fn tag(&mut self, field: u64, wire_type: u64) {
        write_uvarint(&mut self.buf, (field << 3) | wire_type);
    }

    /// Write a varint scalar field. Zero is omitted.
    pub fn uint64(&mut self, field: u64, value: u64) -> &mut Self {
        if value != 0 {
            self.tag(field, WIRE_VARINT);
            write_uvarint(&mut self.buf, value);
        }
        self
    }

    /// Write a 32-bit varint scalar field. Zero is omitted.
    pub fn uint32(&mut self, field: u64, value: u32) -> &mut Self {
        self.uint64(field, value as u64)
    }

    /// Write a length-delimited bytes field. Empty is omitted.
    pub fn bytes(&mut self, field: u64, value: &[u8]) -> &mut Self {
        if !value.is_empty() {
            self.tag(field, WIRE_LENGTH_DELIMITED);
            write_uvarint(&mut self.buf, value.len() as u64);
            self.buf.extend_from_slice(value);
        }
        self
    }

    /// Write a nested message field as length-delimited bytes.
    ///
    /// Unlike scalars, a present-but-empty sub-message is still written:
    /// presence of a union variant is meaningful even when its contents are
    /// all defaults.
    pub fn message(&mut self, field: u64, body: &[u8]) -> &mut Self {
        self.tag(field, WIRE_LENGTH_DELIMITED);
        write_uvarint(&mut self.buf, body.len() as u64);
        self.buf.extend_from_slice(body);
        self
    }

    /// Consume the writer and return the serialized bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uvarint_single_byte_values() {
        for v in [0u64, 1, 0x7f] {
            let mut buf = Vec::new();
            write_uvarint(&mut buf, v);
            assert_eq!(buf, vec![v as u8]);
            assert_eq!(read_uvarint(&buf), Some((v, 1)));
        }
    }

    #[test]
    fn uvarint_multi_byte_values() {
        let mut buf = Vec::new();
        write_uvarint(&mut buf, 300);
        // 300 = 0b10_0101100 -> [0xac, 0x02]
        assert_eq!(buf, vec![0xac, 0x02]);
        assert_eq!(read_uvarint(&buf), Some((300, 2)));
    }

    #[test]
    fn uvarint_max_value_roundtrip() {
        let mut buf = Vec::new();
        write_uvarint(&mut buf, u64::MAX);
        assert_eq!(buf.len(), 10);
        assert_eq!(read_uvarint(&buf), Some((u64::MAX, 10)));
    }

    #[test]
    fn uvarint_rejects_truncation_and_overflow() {
        // Continuation bit set with no following byte.
        assert_eq!(read_uvarint(&[0x80]), None);
        // Eleven continuation bytes overflow a u64.
        assert_eq!(read_uvarint(&[0xff; 11]), None);
    }

    #[test]
    fn scalar_field_encoding() {
        let mut w = FieldWriter::new();
        w.uint64(1, 150);
        // tag = (1 << 3) | 0 = 0x08, then varint(150) = [0x96, 0x01]
        assert_eq!(w.finish(), vec![0x08, 0x96, 0x01]);
    }

    #[test]
    fn zero_scalar_is_omitted() {
        let mut w = FieldWriter::new();
        w.uint64(1, 0).uint32(2, 0);
        assert!(w.finish().is_empty());
    }

    #[test]
    fn bytes_field_encoding() {
        let mut w = FieldWriter::new();
        w.bytes(2, b"abc");
        // tag = (2 << 3) | 2 = 0x12, len = 3
        assert_eq!(w.finish(), vec![0x12, 0x03, b'a', b'b', b'c']);
    }

    #[test]
    fn empty_bytes_are_omitted() {
        let mut w = FieldWriter::new();
        w.bytes(3, b"");
        assert!(w.finish().is_empty());
    }

    #[test]
    fn empty_message_is_still_written() {
        // Union-variant presence must survive even with all-default contents.
        let mut w = FieldWriter::new();
        w.message(1, &[]);
        assert_eq!(w.finish(), vec![0x0a, 0x00]);
    }

    #[test]
    fn fields_concatenate_in_call_order() {
        let mut w = FieldWriter::new();
        w.uint64(1, 1).bytes(2, b"x").uint32(3, 2);
        assert_eq!(w.finish(), vec![0x08, 0x01, 0x12, 0x01, b'x', 0x18, 0x02]);
    }
}
