//! End-to-end checks of the worked examples from the crate docs.

use std::io;

use crate::*;

#[test]
fn test_uint24_le_example() {
    let mut buf = [0u8; 3];
    put_uint24_le(&mut buf, 0x00abcdef & 0xffffff);
    assert_eq!(buf, [0xef, 0xcd, 0xab]);

    put_uint24_le(&mut buf, 0x123456);
    assert_eq!(buf, [0x56, 0x34, 0x12]);
    assert_eq!(get_uint24_le(&buf), 0x123456);
}

#[test]
fn test_uint24_be_example() {
    let mut buf = [0u8; 3];
    put_uint24_be(&mut buf, 0x123456);
    assert_eq!(buf, [0x12, 0x34, 0x56]);
    assert_eq!(get_uint24_be(&buf), 0x123456);
}

#[test]
fn test_uvarint_300() {
    let mut buf = [0u8; MAX_VARINT_LEN64];
    let n = put_uvarint(&mut buf, 300);
    assert_eq!(n, 2);
    assert_eq!(buf[..n], [0xac, 0x02]);
    assert_eq!(get_uvarint(&[0xac, 0x02]), Ok((300, 2)));
}

#[test]
fn test_varint_minus_one() {
    let mut buf = [0u8; MAX_VARINT_LEN64];
    let n = put_varint(&mut buf, -1);
    assert_eq!(n, 1);
    assert_eq!(buf[0], 0x01);
    assert_eq!(get_varint(&[0x01]), Ok((-1, 1)));
}

#[test]
fn test_lone_continuation_is_incomplete() {
    assert_eq!(get_uvarint(&[0x80]), Err(VarintError::Incomplete));
}

#[test]
fn test_eleven_continuations_is_overflow() {
    let buf = [0x80u8; 11];
    assert_eq!(get_uvarint(&buf), Err(VarintError::Overflow));
    assert_eq!(get_varint(&buf), Err(VarintError::Overflow));
}

#[test]
fn test_append_matches_put() {
    let mut out = Vec::new();
    assert_eq!(append_uvarint(&mut out, 300), 2);
    assert_eq!(append_varint(&mut out, -1), 1);
    assert_eq!(append_uvarint(&mut out, u64::MAX), MAX_VARINT_LEN64);
    assert_eq!(out.len(), 13);

    let mut buf = [0u8; MAX_VARINT_LEN64];
    let n = put_uvarint(&mut buf, u64::MAX);
    assert_eq!(&out[3..], &buf[..n]);
}

#[test]
fn test_stream_of_mixed_values() {
    let mut out = Vec::new();
    append_uvarint(&mut out, 0);
    append_varint(&mut out, i64::MIN);
    append_uvarint(&mut out, 1 << 63);
    append_varint(&mut out, 150);

    let mut r = IoByteReader::new(io::Cursor::new(out));
    assert_eq!(read_uvarint(&mut r).expect("test: read 0"), 0);
    assert_eq!(read_varint(&mut r).expect("test: read min"), i64::MIN);
    assert_eq!(read_uvarint(&mut r).expect("test: read 2^63"), 1 << 63);
    assert_eq!(read_varint(&mut r).expect("test: read 150"), 150);

    match read_uvarint(&mut r) {
        Err(ReadVarintError::Source(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("test: expected source error, got {other:?}"),
    }
}

/// Reader that hands out its bytes and then fails with a fixed error.
struct FailingRead {
    bytes: Vec<u8>,
}

impl io::Read for FailingRead {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bytes.is_empty() {
            return Err(io::Error::other("link dropped"));
        }
        buf[0] = self.bytes.remove(0);
        Ok(1)
    }
}

#[test]
fn test_io_error_passthrough() {
    let mut r = IoByteReader::new(FailingRead { bytes: vec![0x80] });
    let err = read_uvarint(&mut r).expect_err("test: failing stream");
    assert_eq!(err.to_string(), "link dropped");

    let inner = err.into_source().expect("test: source error");
    assert_eq!(inner.kind(), io::ErrorKind::Other);
}

#[test]
fn test_generic_over_order() {
    fn write_then_read<O: ByteOrder>(v: u64) -> ([u8; 6], u64) {
        let mut buf = [0u8; 6];
        O::write_u48(&mut buf, v);
        (buf, O::read_u48(&buf))
    }

    let (le, v_le) = write_then_read::<LE>(0x0102_0304_0506);
    let (be, v_be) = write_then_read::<BE>(0x0102_0304_0506);
    assert_eq!(v_le, 0x0102_0304_0506);
    assert_eq!(v_be, 0x0102_0304_0506);

    let mut rev = be;
    rev.reverse();
    assert_eq!(le, rev);
}
