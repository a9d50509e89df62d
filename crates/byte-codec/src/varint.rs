//! LEB128-style varints.
//!
//! Each byte carries 7 bits of payload in its low bits, least significant
//! group first.  The top bit is set on every byte except the last.
//!
//! ```txt
//! 300 = 0b1_0010_1100
//!
//! 1_0101100  0_0000010
//!   ^ 0x2c     ^ 0x02    -> [0xac, 0x02]
//! ```
//!
//! Signed values are zigzag mapped first so small magnitudes of either sign
//! stay short: 0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, ...

use crate::errors::{ReadVarintError, VarintError};
use crate::reader::ByteReader;

/// Max encoded length of a 16-bit value.
pub const MAX_VARINT_LEN16: usize = 3;

/// Max encoded length of a 32-bit value.
pub const MAX_VARINT_LEN32: usize = 5;

/// Max encoded length of a 64-bit value.
pub const MAX_VARINT_LEN64: usize = 10;

const CONTINUATION: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7f;

/// Maps a signed integer onto an unsigned one, interleaving the signs.
#[inline]
pub fn zigzag_encode(x: i64) -> u64 {
    ((x << 1) ^ (x >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
#[inline]
pub fn zigzag_decode(ux: u64) -> i64 {
    let x = (ux >> 1) as i64;
    if ux & 1 != 0 { !x } else { x }
}

/// Returns the number of bytes [`put_uvarint`] will write for `x`.
pub fn uvarint_size(mut x: u64) -> usize {
    let mut n = 1;
    while x >= CONTINUATION as u64 {
        x >>= 7;
        n += 1;
    }
    n
}

/// Returns the number of bytes [`put_varint`] will write for `x`.
pub fn varint_size(x: i64) -> usize {
    uvarint_size(zigzag_encode(x))
}

/// Encodes `x` into the start of `buf`, returning the number of bytes
/// written.
///
/// # Panics
///
/// If `buf` is shorter than [`uvarint_size`] of `x`.  A buffer of
/// [`MAX_VARINT_LEN64`] bytes always suffices.
pub fn put_uvarint(buf: &mut [u8], mut x: u64) -> usize {
    let mut i = 0;
    while x >= CONTINUATION as u64 {
        buf[i] = x as u8 | CONTINUATION;
        x >>= 7;
        i += 1;
    }
    buf[i] = x as u8;
    i + 1
}

/// Encodes `x` zigzag mapped into the start of `buf`, returning the number
/// of bytes written.
///
/// # Panics
///
/// If `buf` is shorter than [`varint_size`] of `x`.
pub fn put_varint(buf: &mut [u8], x: i64) -> usize {
    put_uvarint(buf, zigzag_encode(x))
}

/// Decodes a varint from the start of `buf`, returning the value and the
/// number of bytes it took up.
///
/// Fails with [`VarintError::Incomplete`] if `buf` ends before the final
/// byte, or [`VarintError::Overflow`] if the value can't fit in a `u64` or
/// an eleventh byte is reached.
pub fn get_uvarint(buf: &[u8]) -> Result<(u64, usize), VarintError> {
    let mut acc = Accumulator::default();
    for &b in buf {
        match acc.push(b) {
            Step::More => {}
            Step::Done(v) => return Ok((v, acc.consumed)),
            Step::Overflow => return Err(VarintError::Overflow),
        }
    }
    Err(VarintError::Incomplete)
}

/// Decodes a zigzag mapped varint from the start of `buf`.
///
/// Fails the same way as [`get_uvarint`].
pub fn get_varint(buf: &[u8]) -> Result<(i64, usize), VarintError> {
    let (ux, n) = get_uvarint(buf)?;
    Ok((zigzag_decode(ux), n))
}

/// Decodes a varint by pulling bytes from `r` one at a time.
///
/// Reads exactly as many bytes as the encoding takes up and no more.  If the
/// source fails, including running dry partway, the error comes back as
/// [`ReadVarintError::Source`] untouched.  Ten bytes without a terminator are
/// [`ReadVarintError::Overflow`], without reading an eleventh.
pub fn read_uvarint<R: ByteReader>(mut r: R) -> Result<u64, ReadVarintError<R::Error>> {
    let mut acc = Accumulator::default();
    loop {
        let b = r.read_byte().map_err(ReadVarintError::Source)?;
        match acc.push(b) {
            Step::More if acc.exhausted() => return Err(ReadVarintError::Overflow),
            Step::More => {}
            Step::Done(v) => return Ok(v),
            Step::Overflow => return Err(ReadVarintError::Overflow),
        }
    }
}

/// Decodes a zigzag mapped varint by pulling bytes from `r` one at a time.
pub fn read_varint<R: ByteReader>(r: R) -> Result<i64, ReadVarintError<R::Error>> {
    read_uvarint(r).map(zigzag_decode)
}

/// Decoding state shared by the buffer and streaming paths.
#[derive(Debug, Default)]
struct Accumulator {
    value: u64,
    shift: u32,
    consumed: usize,
}

#[derive(Debug)]
enum Step {
    More,
    Done(u64),
    Overflow,
}

impl Accumulator {
    /// Returns if every possible byte has been consumed without a terminator.
    fn exhausted(&self) -> bool {
        self.consumed >= MAX_VARINT_LEN64
    }

    fn push(&mut self, b: u8) -> Step {
        // Nothing may follow the last possible byte, and only the lowest bit
        // of its payload is still in range.
        if self.consumed >= MAX_VARINT_LEN64 {
            return Step::Overflow;
        }
        if self.consumed == MAX_VARINT_LEN64 - 1 && (b & PAYLOAD_MASK) > 1 {
            return Step::Overflow;
        }

        self.consumed += 1;
        self.value |= ((b & PAYLOAD_MASK) as u64) << self.shift;
        if b & CONTINUATION == 0 {
            return Step::Done(self.value);
        }

        self.shift += 7;
        Step::More
    }
}
