//! Helpers for encoding onto the end of a growable buffer.

use crate::varint::{MAX_VARINT_LEN64, put_uvarint, put_varint};

/// Appends `x` as a varint to the end of `out`, returning the number of bytes
/// appended.
pub fn append_uvarint(out: &mut Vec<u8>, x: u64) -> usize {
    let mut buf = [0; MAX_VARINT_LEN64];
    let n = put_uvarint(&mut buf, x);
    out.extend_from_slice(&buf[..n]);
    n
}

/// Appends `x` as a zigzag mapped varint to the end of `out`, returning the
/// number of bytes appended.
pub fn append_varint(out: &mut Vec<u8>, x: i64) -> usize {
    let mut buf = [0; MAX_VARINT_LEN64];
    let n = put_varint(&mut buf, x);
    out.extend_from_slice(&buf[..n]);
    n
}
