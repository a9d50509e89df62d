use thiserror::Error;

/// Errors from decoding a varint out of a complete buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum VarintError {
    /// Every available byte had the continuation bit set, more input may
    /// complete the value.
    #[error("incomplete varint")]
    Incomplete,

    /// The encoded value does not fit in 64 bits.  The input is corrupt at
    /// this position and more input will not help.
    #[error("varint overflows a 64-bit integer")]
    Overflow,
}

/// Errors from decoding a varint out of a [`crate::ByteReader`].
#[derive(Debug, Eq, PartialEq, Error)]
pub enum ReadVarintError<E> {
    /// The encoded value does not fit in 64 bits.
    #[error("varint overflows a 64-bit integer")]
    Overflow,

    /// The byte source failed, passed through unmodified.
    #[error(transparent)]
    Source(E),
}

impl<E> ReadVarintError<E> {
    /// Returns if this is an overflow rather than a source error.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow)
    }

    /// Returns the underlying source error, if that's what this is.
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::Source(e) => Some(e),
            Self::Overflow => None,
        }
    }
}

/// Returned by [`crate::SliceReader`] when reading past the end of its buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("would overrun end of input")]
pub struct EndOfInput;
