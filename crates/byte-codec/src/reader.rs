//! Byte-at-a-time sources for the streamed varint decoders.

use std::io;

use crate::errors::EndOfInput;

/// Source that yields one byte per call.
///
/// Implementations decide what blocking and end-of-input mean; the varint
/// readers pass whatever error comes back straight through to their caller.
pub trait ByteReader {
    /// Error returned by the source, including running out of bytes.
    type Error;

    /// Reads the next byte.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

impl<R: ByteReader + ?Sized> ByteReader for &mut R {
    type Error = R::Error;

    #[inline]
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        (**self).read_byte()
    }
}

/// Reader for an arbitrary [`AsRef`] on a byte slice, advancing a cursor one
/// byte at a time.
#[derive(Debug)]
pub struct SliceReader<B> {
    buf: B,
    at: usize,
}

impl<B: AsRef<[u8]>> SliceReader<B> {
    /// Constructs a new instance by wrapping a buffer and starting at the
    /// beginning.
    pub fn new(buf: B) -> Self {
        Self { buf, at: 0 }
    }

    /// Returns the length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// Returns if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.as_ref().is_empty()
    }

    /// Returns how many bytes have been read so far.
    pub fn position(&self) -> usize {
        self.at
    }

    /// Returns the total number of remaining bytes that can be read.
    pub fn remaining(&self) -> usize {
        self.len() - self.at
    }

    /// Returns the slice of the remaining unread bytes, which might be empty.
    pub fn rest(&self) -> &[u8] {
        &self.buf.as_ref()[self.at..]
    }

    /// Unwraps the underlying buffer.
    pub fn into_inner(self) -> B {
        self.buf
    }
}

impl<B: AsRef<[u8]>> ByteReader for SliceReader<B> {
    type Error = EndOfInput;

    fn read_byte(&mut self) -> Result<u8, EndOfInput> {
        let b = *self.buf.as_ref().get(self.at).ok_or(EndOfInput)?;
        self.at += 1;
        Ok(b)
    }
}

/// Adapts a [`io::Read`] into a [`ByteReader`].
///
/// Every byte is a separate read on the inner reader, so wrap it in a
/// [`io::BufReader`] first if reads are expensive.  A clean end of stream
/// comes back as [`io::ErrorKind::UnexpectedEof`].
#[derive(Debug)]
pub struct IoByteReader<R> {
    inner: R,
}

impl<R: io::Read> IoByteReader<R> {
    /// Wraps a reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Gets a reference to the inner reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Gets a mutable reference to the inner reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: io::Read> ByteReader for IoByteReader<R> {
    type Error = io::Error;

    fn read_byte(&mut self) -> Result<u8, io::Error> {
        let mut b = [0; 1];
        self.inner.read_exact(&mut b)?;
        Ok(b[0])
    }
}
