//! Macros generating the fixed-width codec surface.

/// Implements [`crate::ByteOrder`] for a marker type, given the native byte
/// conversions and the manual shift helpers for that order.
macro_rules! impl_byte_order {
    ($order:ident, $from_bytes:ident, $to_bytes:ident, $read:ident, $write:ident) => {
        impl $crate::ByteOrder for $order {
            #[inline]
            fn read_u16(buf: &[u8]) -> u16 {
                u16::$from_bytes(head(buf))
            }

            #[inline]
            fn write_u16(buf: &mut [u8], v: u16) {
                buf[..2].copy_from_slice(&v.$to_bytes());
            }

            #[inline]
            fn read_u24(buf: &[u8]) -> u32 {
                $read::<3>(buf) as u32
            }

            #[inline]
            fn write_u24(buf: &mut [u8], v: u32) {
                $write::<3>(buf, v as u64);
            }

            #[inline]
            fn read_u32(buf: &[u8]) -> u32 {
                u32::$from_bytes(head(buf))
            }

            #[inline]
            fn write_u32(buf: &mut [u8], v: u32) {
                buf[..4].copy_from_slice(&v.$to_bytes());
            }

            #[inline]
            fn read_u40(buf: &[u8]) -> u64 {
                $read::<5>(buf)
            }

            #[inline]
            fn write_u40(buf: &mut [u8], v: u64) {
                $write::<5>(buf, v);
            }

            #[inline]
            fn read_u48(buf: &[u8]) -> u64 {
                $read::<6>(buf)
            }

            #[inline]
            fn write_u48(buf: &mut [u8], v: u64) {
                $write::<6>(buf, v);
            }

            #[inline]
            fn read_u56(buf: &[u8]) -> u64 {
                $read::<7>(buf)
            }

            #[inline]
            fn write_u56(buf: &mut [u8], v: u64) {
                $write::<7>(buf, v);
            }

            #[inline]
            fn read_u64(buf: &[u8]) -> u64 {
                u64::$from_bytes(head(buf))
            }

            #[inline]
            fn write_u64(buf: &mut [u8], v: u64) {
                buf[..8].copy_from_slice(&v.$to_bytes());
            }
        }
    };
}

/// Generates the `get_uintW_{le,be}` / `put_uintW_{le,be}` free functions for
/// one width on top of the [`crate::ByteOrder`] impls.
macro_rules! impl_fixed_width_fns {
    (
        $bits:literal, $ity:ty, $read:ident, $write:ident =>
        $get_le:ident, $put_le:ident, $get_be:ident, $put_be:ident
    ) => {
        #[doc = concat!("Reads a little-endian ", stringify!($bits), "-bit unsigned integer from the start of `buf`.")]
        ///
        /// # Panics
        ///
        #[doc = concat!("If `buf` is shorter than ", stringify!($bits), " / 8 bytes.")]
        #[inline]
        pub fn $get_le(buf: &[u8]) -> $ity {
            <$crate::LittleEndian as $crate::ByteOrder>::$read(buf)
        }

        #[doc = concat!("Writes `v` as a little-endian ", stringify!($bits), "-bit unsigned integer to the start of `buf`.")]
        ///
        /// Bits above the width are discarded.
        ///
        /// # Panics
        ///
        #[doc = concat!("If `buf` is shorter than ", stringify!($bits), " / 8 bytes.")]
        #[inline]
        pub fn $put_le(buf: &mut [u8], v: $ity) {
            <$crate::LittleEndian as $crate::ByteOrder>::$write(buf, v)
        }

        #[doc = concat!("Reads a big-endian ", stringify!($bits), "-bit unsigned integer from the start of `buf`.")]
        ///
        /// # Panics
        ///
        #[doc = concat!("If `buf` is shorter than ", stringify!($bits), " / 8 bytes.")]
        #[inline]
        pub fn $get_be(buf: &[u8]) -> $ity {
            <$crate::BigEndian as $crate::ByteOrder>::$read(buf)
        }

        #[doc = concat!("Writes `v` as a big-endian ", stringify!($bits), "-bit unsigned integer to the start of `buf`.")]
        ///
        /// Bits above the width are discarded.
        ///
        /// # Panics
        ///
        #[doc = concat!("If `buf` is shorter than ", stringify!($bits), " / 8 bytes.")]
        #[inline]
        pub fn $put_be(buf: &mut [u8], v: $ity) {
            <$crate::BigEndian as $crate::ByteOrder>::$write(buf, v)
        }
    };
}
