//! Fixed-width and variable-length integer codecs over byte slices.
//!
//! Fixed-width integers of 16, 24, 32, 40, 48, 56 and 64 bits can be read and
//! written in either byte order, through the [`ByteOrder`] impls on
//! [`LittleEndian`] and [`BigEndian`] or through the `get_uintW_*` /
//! `put_uintW_*` free functions.  Varints follow the LEB128 layout, with
//! zigzag mapping for signed values, and can be decoded from a buffer or
//! pulled from any [`ByteReader`].
//!
//! Nothing here allocates or keeps hold of a caller's buffer.

#[macro_use]
mod macros;

mod errors;
pub use errors::{EndOfInput, ReadVarintError, VarintError};

mod order;
pub use order::{BE, BigEndian, ByteOrder, LE, LittleEndian};

mod fixed;
pub use fixed::*;

mod reader;
pub use reader::{ByteReader, IoByteReader, SliceReader};

mod varint;
pub use varint::{
    MAX_VARINT_LEN16, MAX_VARINT_LEN32, MAX_VARINT_LEN64, get_uvarint, get_varint, put_uvarint,
    put_varint, read_uvarint, read_varint, uvarint_size, varint_size, zigzag_decode,
    zigzag_encode,
};

mod util;
pub use util::{append_uvarint, append_varint};

#[cfg(test)]
mod tests;
