//! Byte-order markers and the fixed-width read/write functions they carry.
//!
//! Widths that line up with a native integer (16, 32, 64 bits) go through the
//! standard `from_*_bytes`/`to_*_bytes` conversions.  The odd widths (24, 40,
//! 48, 56 bits) have no native type, so they're assembled byte by byte with
//! the same shift arithmetic.  The bytes produced are identical either way.
//!
//! ```txt
//! 0x123456 as 24 bits
//!              [0]   [1]   [2]
//! little:      0x56  0x34  0x12
//! big:         0x12  0x34  0x56
//! ```

/// Reads and writes unsigned integers of a fixed width at the start of a byte
/// slice in a particular byte order.
///
/// Every function touches exactly `W / 8` bytes starting at offset 0 and
/// nothing past them.
///
/// # Panics
///
/// Every function panics if the slice is shorter than `W / 8` bytes.
///
/// Writes of a value wider than `W` bits keep only the low `W` bits.
pub trait ByteOrder {
    /// Reads a 16-bit unsigned integer.
    fn read_u16(buf: &[u8]) -> u16;

    /// Writes a 16-bit unsigned integer.
    fn write_u16(buf: &mut [u8], v: u16);

    /// Reads a 24-bit unsigned integer, zero-extended.
    fn read_u24(buf: &[u8]) -> u32;

    /// Writes the low 24 bits of `v`.
    fn write_u24(buf: &mut [u8], v: u32);

    /// Reads a 32-bit unsigned integer.
    fn read_u32(buf: &[u8]) -> u32;

    /// Writes a 32-bit unsigned integer.
    fn write_u32(buf: &mut [u8], v: u32);

    /// Reads a 40-bit unsigned integer, zero-extended.
    fn read_u40(buf: &[u8]) -> u64;

    /// Writes the low 40 bits of `v`.
    fn write_u40(buf: &mut [u8], v: u64);

    /// Reads a 48-bit unsigned integer, zero-extended.
    fn read_u48(buf: &[u8]) -> u64;

    /// Writes the low 48 bits of `v`.
    fn write_u48(buf: &mut [u8], v: u64);

    /// Reads a 56-bit unsigned integer, zero-extended.
    fn read_u56(buf: &[u8]) -> u64;

    /// Writes the low 56 bits of `v`.
    fn write_u56(buf: &mut [u8], v: u64);

    /// Reads a 64-bit unsigned integer.
    fn read_u64(buf: &[u8]) -> u64;

    /// Writes a 64-bit unsigned integer.
    fn write_u64(buf: &mut [u8], v: u64);
}

/// Least significant byte first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum LittleEndian {}

/// Most significant byte first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum BigEndian {}

/// Shorthand for [`LittleEndian`].
pub type LE = LittleEndian;

/// Shorthand for [`BigEndian`].
pub type BE = BigEndian;

/// Copies the first `N` bytes out, panicking if there aren't that many.
#[inline]
fn head<const N: usize>(buf: &[u8]) -> [u8; N] {
    let mut arr = [0; N];
    arr.copy_from_slice(&buf[..N]);
    arr
}

#[inline]
fn read_le<const N: usize>(buf: &[u8]) -> u64 {
    buf[..N]
        .iter()
        .enumerate()
        .fold(0, |acc, (i, &b)| acc | (b as u64) << (8 * i))
}

#[inline]
fn write_le<const N: usize>(buf: &mut [u8], v: u64) {
    for (i, b) in buf[..N].iter_mut().enumerate() {
        *b = (v >> (8 * i)) as u8;
    }
}

#[inline]
fn read_be<const N: usize>(buf: &[u8]) -> u64 {
    buf[..N].iter().fold(0, |acc, &b| (acc << 8) | b as u64)
}

#[inline]
fn write_be<const N: usize>(buf: &mut [u8], v: u64) {
    for (i, b) in buf[..N].iter_mut().enumerate() {
        *b = (v >> (8 * (N - 1 - i))) as u8;
    }
}

impl_byte_order!(LittleEndian, from_le_bytes, to_le_bytes, read_le, write_le);
impl_byte_order!(BigEndian, from_be_bytes, to_be_bytes, read_be, write_be);
