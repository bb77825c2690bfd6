//! Unsigned integer words that prefixes and ranges are built over.

use crate::PrefixError;
use alloc::string::ToString;
use core::{
    fmt::{Debug, Display, LowerHex},
    hash::Hash,
    num::IntErrorKind,
};

/// Any type implementing `BitWord` can be used as the value of a
/// [`BitPrefix`][crate::BitPrefix] or the bounds of a [`Range`][crate::Range].
///
/// The trait is implemented for `u8`, `u16`, `u32` and `u64`. Paths through the
/// trie are tracked in a `u64`, so wider words are not supported.
pub trait BitWord:
    Copy + Eq + Ord + Hash + Debug + Display + LowerHex + Send + Sync + 'static
{
    /// Number of bits in the word.
    const BITS: u32;

    /// The all-zeros word.
    const ZERO: Self;

    /// The all-ones word.
    const MAX: Self;

    /// Return a word with the top `len` bits set and every other bit clear.
    ///
    /// A `len` of `0` returns [`BitWord::ZERO`] and a `len` of [`BitWord::BITS`]
    /// or more returns [`BitWord::MAX`]. Neither boundary evaluates a shift by
    /// the full word width.
    fn prefix_mask(len: u32) -> Self;

    /// Test the most-significant bit.
    fn highest_bit_is_set(self) -> bool;

    /// Shift left by one bit, discarding the most-significant bit.
    fn shl1(self) -> Self;

    /// Bitwise and.
    fn and(self, other: Self) -> Self;

    /// Bitwise or.
    fn or(self, other: Self) -> Self;

    /// Bitwise complement.
    fn not(self) -> Self;

    /// Widen to a `u64`, keeping the numeric value.
    fn to_u64(self) -> u64;

    /// Take the top [`BitWord::BITS`] bits of an MSB-aligned `u64`.
    fn from_msb_aligned(bits: u64) -> Self;

    /// Widen to a `u64`, placing the word in the most-significant bits.
    fn to_msb_aligned(self) -> u64 {
        // BITS is never 0, so the shift is always below 64.
        self.to_u64() << (u64::BITS - Self::BITS)
    }

    /// Parse the given string as a base-10 word.
    ///
    /// # Errors
    ///  - Returns [`PrefixError::OutOfRange`] if the digits are well formed
    ///    but the value does not fit the word.
    ///  - Returns [`PrefixError::InvalidFormat`] for any other malformed input.
    fn parse_decimal(input: &str, what: &'static str) -> Result<Self, PrefixError> {
        Self::parse_radix(input, 10, what)
    }

    /// Parse the given string (without any `0x` marker) as a base-16 word.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BitWord::parse_decimal`].
    fn parse_hex(input: &str, what: &'static str) -> Result<Self, PrefixError> {
        Self::parse_radix(input, 16, what)
    }

    /// Parse the given string in the given radix.
    #[doc(hidden)]
    fn parse_radix(input: &str, radix: u32, what: &'static str) -> Result<Self, PrefixError>;
}

/// Map an integer parse failure onto the crate's error kinds.
fn classify_int_error(kind: &IntErrorKind, input: &str, what: &'static str) -> PrefixError {
    match kind {
        IntErrorKind::PosOverflow => PrefixError::OutOfRange {
            input: input.to_string(),
            what,
        },
        _ => PrefixError::InvalidFormat {
            input: input.to_string(),
            expected: what,
        },
    }
}

macro_rules! bit_word_for_unsigned_types {
    ($($type:ty),*) => {
        $(
            impl BitWord for $type {
                const BITS: u32 = <$type>::BITS;
                const ZERO: Self = 0;
                const MAX: Self = <$type>::MAX;

                fn prefix_mask(len: u32) -> Self {
                    if len == 0 {
                        0
                    } else if len >= Self::BITS {
                        <$type>::MAX
                    } else {
                        !(<$type>::MAX >> len)
                    }
                }

                fn highest_bit_is_set(self) -> bool {
                    self & (1 << (Self::BITS - 1)) != 0
                }

                fn shl1(self) -> Self {
                    self << 1
                }

                fn and(self, other: Self) -> Self {
                    self & other
                }

                fn or(self, other: Self) -> Self {
                    self | other
                }

                fn not(self) -> Self {
                    !self
                }

                fn to_u64(self) -> u64 {
                    u64::from(self)
                }

                fn from_msb_aligned(bits: u64) -> Self {
                    // The shifted value is at most `Self::BITS` wide.
                    (bits >> (u64::BITS - Self::BITS)) as $type
                }

                fn parse_radix(
                    input: &str,
                    radix: u32,
                    what: &'static str,
                ) -> Result<Self, PrefixError> {
                    // `from_str_radix` accepts a leading '+', the text grammars do not.
                    if input.starts_with('+') {
                        return Err(PrefixError::InvalidFormat {
                            input: input.to_string(),
                            expected: what,
                        });
                    }

                    <$type>::from_str_radix(input, radix)
                        .map_err(|err| classify_int_error(err.kind(), input, what))
                }
            }
        )*
    };
}

bit_word_for_unsigned_types!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    macro_rules! bit_word_tests {
        ($($type:ty),*) => {
            $(
                paste::paste! {
                    mod [<tests_ $type>] {
                        use super::*;

                        #[test]
                        fn mask_boundaries() {
                            assert_eq!(<$type>::prefix_mask(0), 0);
                            assert_eq!(<$type>::prefix_mask(<$type>::BITS), <$type>::MAX);
                            assert_eq!(<$type>::prefix_mask(<$type>::BITS + 1), <$type>::MAX);
                            assert_eq!(<$type>::prefix_mask(1), 1 << (<$type>::BITS - 1));
                            assert_eq!(
                                <$type>::prefix_mask(<$type>::BITS - 1),
                                <$type>::MAX - 1
                            );
                        }

                        #[test]
                        fn mask_has_len_ones() {
                            for len in 0..=<$type>::BITS {
                                let mask = <$type>::prefix_mask(len);
                                assert_eq!(mask.count_ones(), len);
                                assert_eq!(mask.leading_ones(), len);
                            }
                        }

                        #[test]
                        fn msb_aligned_conversion() {
                            let word: $type = 0b1010_0101;
                            let aligned = word.to_msb_aligned();
                            assert_eq!(aligned.leading_zeros(), <$type>::BITS - 8);
                            assert_eq!(<$type>::from_msb_aligned(aligned), word);
                        }

                        #[test]
                        fn parse_max_and_overflow() {
                            let max = <$type>::MAX.to_string();
                            assert_eq!(<$type>::parse_decimal(&max, "word").unwrap(), <$type>::MAX);

                            let over = (u128::from(<$type>::MAX) + 1).to_string();
                            assert_eq!(
                                <$type>::parse_decimal(&over, "word").unwrap_err().kind(),
                                ErrorKind::OutOfRange
                            );
                        }
                    }
                }
            )*
        };
    }

    bit_word_tests!(u8, u16, u32, u64);

    #[test]
    fn highest_bit() {
        assert!(0x80u8.highest_bit_is_set());
        assert!(!0x7fu8.highest_bit_is_set());
        assert!(0x8000_0000u32.highest_bit_is_set());
        assert!(!1u64.highest_bit_is_set());
    }

    #[test]
    fn parse_rejects_malformed_words() {
        for input in ["", "-1", "+1", "12a", " 1", "0x10"] {
            assert_eq!(
                u16::parse_decimal(input, "word").unwrap_err().kind(),
                ErrorKind::InvalidFormat,
                "{input:?}"
            );
        }
    }

    #[test]
    fn parse_hex_words() {
        assert_eq!(u16::parse_hex("1234", "word").unwrap(), 0x1234);
        assert_eq!(u16::parse_hex("FFFF", "word").unwrap(), 0xffff);
        assert_eq!(
            u16::parse_hex("10000", "word").unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }
}
