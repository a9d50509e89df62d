//! Free functions for fixed-width integers, one set per width and byte order.
//!
//! These are thin wrappers over [`ByteOrder`](crate::ByteOrder) for callers
//! that don't want to name the order type.

/// Largest value that fits in 24 bits.
pub const MAX_UINT24: u32 = (1 << 24) - 1;

/// Largest value that fits in 40 bits.
pub const MAX_UINT40: u64 = (1 << 40) - 1;

/// Largest value that fits in 48 bits.
pub const MAX_UINT48: u64 = (1 << 48) - 1;

/// Largest value that fits in 56 bits.
pub const MAX_UINT56: u64 = (1 << 56) - 1;

impl_fixed_width_fns!(16, u16, read_u16, write_u16 =>
    get_uint16_le, put_uint16_le, get_uint16_be, put_uint16_be);
impl_fixed_width_fns!(24, u32, read_u24, write_u24 =>
    get_uint24_le, put_uint24_le, get_uint24_be, put_uint24_be);
impl_fixed_width_fns!(32, u32, read_u32, write_u32 =>
    get_uint32_le, put_uint32_le, get_uint32_be, put_uint32_be);
impl_fixed_width_fns!(40, u64, read_u40, write_u40 =>
    get_uint40_le, put_uint40_le, get_uint40_be, put_uint40_be);
impl_fixed_width_fns!(48, u64, read_u48, write_u48 =>
    get_uint48_le, put_uint48_le, get_uint48_be, put_uint48_be);
impl_fixed_width_fns!(56, u64, read_u56, write_u56 =>
    get_uint56_le, put_uint56_le, get_uint56_be, put_uint56_be);
impl_fixed_width_fns!(64, u64, read_u64, write_u64 =>
    get_uint64_le, put_uint64_le, get_uint64_be, put_uint64_be);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint16() {
        let mut buf = [0u8; 2];
        put_uint16_le(&mut buf, 0xabcd);
        assert_eq!(buf, [0xcd, 0xab]);
        assert_eq!(get_uint16_le(&buf), 0xabcd);

        put_uint16_be(&mut buf, 0xabcd);
        assert_eq!(buf, [0xab, 0xcd]);
        assert_eq!(get_uint16_be(&buf), 0xabcd);
    }

    #[test]
    fn test_uint32() {
        let mut buf = [0u8; 4];
        put_uint32_le(&mut buf, 0x1234abcd);
        assert_eq!(buf, [0xcd, 0xab, 0x34, 0x12]);
        assert_eq!(get_uint32_le(&buf), 0x1234abcd);

        put_uint32_be(&mut buf, 0x1234abcd);
        assert_eq!(buf, [0x12, 0x34, 0xab, 0xcd]);
        assert_eq!(get_uint32_be(&buf), 0x1234abcd);
    }

    #[test]
    fn test_uint64() {
        let mut buf = [0u8; 8];
        put_uint64_le(&mut buf, 0x0123_4567_89ab_cdef);
        assert_eq!(buf, [0xef, 0xcd, 0xab, 0x89, 0x67, 0x45, 0x23, 0x01]);
        assert_eq!(get_uint64_le(&buf), 0x0123_4567_89ab_cdef);

        put_uint64_be(&mut buf, 0x0123_4567_89ab_cdef);
        assert_eq!(buf, [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
        assert_eq!(get_uint64_be(&buf), 0x0123_4567_89ab_cdef);
    }

    #[test]
    fn test_odd_width_maxima() {
        let mut buf = [0u8; 7];

        put_uint24_be(&mut buf, MAX_UINT24);
        assert_eq!(get_uint24_be(&buf), MAX_UINT24);
        put_uint40_le(&mut buf, MAX_UINT40);
        assert_eq!(get_uint40_le(&buf), MAX_UINT40);
        put_uint48_be(&mut buf, MAX_UINT48);
        assert_eq!(get_uint48_be(&buf), MAX_UINT48);
        put_uint56_le(&mut buf, MAX_UINT56);
        assert_eq!(get_uint56_le(&buf), MAX_UINT56);
        assert_eq!(buf, [0xff; 7]);
    }

    #[test]
    fn test_one_past_max_wraps_to_zero() {
        let mut buf = [0xaau8; 7];
        put_uint56_be(&mut buf, MAX_UINT56 + 1);
        assert_eq!(buf, [0; 7]);
        assert_eq!(get_uint56_be(&buf), 0);
    }
}
