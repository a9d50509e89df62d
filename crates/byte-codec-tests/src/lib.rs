//! Property testing macros for byte-codec.
//!
//! The main export is [`generate_fixed_width_tests!`], which stamps out a
//! suite of proptest checks for one fixed width in both byte orders.

// Re-export dependencies for macro usage
pub use byte_codec;
pub use paste;
pub use proptest;

/// Generates property tests for one fixed width using proptest.
///
/// This macro creates property-based tests to verify that:
/// 1. Writing then reading produces the original value, in both orders
/// 2. The little-endian and big-endian encodings are byte reversals of each other
/// 3. Values wider than the width are truncated to their low bits
/// 4. Boundary values (0, 1, the top bit, the max) survive a round trip
/// 5. Bytes past the width are never written
/// 6. A buffer one byte short panics rather than being padded
///
/// Arguments are the width in bits, the integer type the functions take and
/// return, and the `ByteOrder` read/write function names.
///
/// # Example
/// ```rust,no_run
/// use byte_codec_tests::generate_fixed_width_tests;
///
/// generate_fixed_width_tests!(24, u32, read_u24, write_u24);
/// ```
#[macro_export]
macro_rules! generate_fixed_width_tests {
    ($bits:literal, $ity:ty, $read:ident, $write:ident) => {
        $crate::paste::paste! {
            mod [<proptest_uint $bits>] {
                use $crate::byte_codec::{BigEndian, ByteOrder, LittleEndian};
                use $crate::proptest::prelude::*;

                const BYTES: usize = $bits / 8;
                const MAX: $ity = <$ity>::MAX >> (<$ity>::BITS - $bits);

                fn write_both(v: $ity) -> ([u8; BYTES], [u8; BYTES]) {
                    let mut le = [0u8; BYTES];
                    let mut be = [0u8; BYTES];
                    LittleEndian::$write(&mut le, v);
                    BigEndian::$write(&mut be, v);
                    (le, be)
                }

                #[test]
                fn test_boundaries() {
                    for v in [0, 1, MAX, MAX >> 1, (MAX >> 1) + 1] {
                        let (le, be) = write_both(v);
                        assert_eq!(LittleEndian::$read(&le), v, "test: le roundtrip {v:#x}");
                        assert_eq!(BigEndian::$read(&be), v, "test: be roundtrip {v:#x}");
                    }
                }

                #[test]
                fn test_max_is_all_ones() {
                    let (le, be) = write_both(MAX);
                    assert_eq!(le, [0xff; BYTES]);
                    assert_eq!(be, [0xff; BYTES]);
                }

                #[test]
                #[should_panic]
                fn test_short_read_le_panics() {
                    let buf = [0u8; BYTES - 1];
                    let _ = LittleEndian::$read(&buf);
                }

                #[test]
                #[should_panic]
                fn test_short_write_be_panics() {
                    let mut buf = [0u8; BYTES - 1];
                    BigEndian::$write(&mut buf, 1);
                }

                $crate::proptest::proptest! {
                    #[test]
                    fn proptest_roundtrip(v in 0..=MAX) {
                        let (le, be) = write_both(v);
                        prop_assert_eq!(LittleEndian::$read(&le), v);
                        prop_assert_eq!(BigEndian::$read(&be), v);
                    }

                    #[test]
                    fn proptest_orders_are_reversed(v in 0..=MAX) {
                        let (le, mut be) = write_both(v);
                        be.reverse();
                        prop_assert_eq!(le, be);
                    }

                    #[test]
                    fn proptest_truncates_high_bits(v in any::<$ity>()) {
                        let (le, be) = write_both(v);
                        prop_assert_eq!(LittleEndian::$read(&le), v & MAX);
                        prop_assert_eq!(BigEndian::$read(&be), v & MAX);
                    }

                    #[test]
                    fn proptest_leaves_tail(v in 0..=MAX, fill in any::<u8>()) {
                        let mut buf = [fill; BYTES + 4];
                        LittleEndian::$write(&mut buf, v);
                        prop_assert!(buf[BYTES..].iter().all(|&b| b == fill));
                        BigEndian::$write(&mut buf, v);
                        prop_assert!(buf[BYTES..].iter().all(|&b| b == fill));
                        prop_assert_eq!(BigEndian::$read(&buf), v);
                    }
                }
            }
        }
    };
}
