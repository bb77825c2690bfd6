//! Bit prefixes over unsigned words.

use crate::{BitWord, PrefixError, Range};
use alloc::{string::ToString, vec::Vec};
use core::{fmt, mem, str::FromStr};

/// A value together with a length, denoting every word that shares the top
/// `len` bits of `value`.
///
/// Every bit of `value` outside the top `len` bits is guaranteed to be clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitPrefix<T> {
    value: T,
    len: u32,
}

impl<T: BitWord> BitPrefix<T> {
    /// Create a new prefix.
    ///
    /// # Errors
    ///  - Returns [`PrefixError::InvalidPrefix`] if `len` is larger than
    ///    `T::BITS`, or if `value` has any bit set outside the top `len`
    ///    bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acl_trie::BitPrefix;
    ///
    /// let prefix = BitPrefix::<u16>::new(0x1200, 8).unwrap();
    /// assert_eq!(prefix.to_string(), "0x1200/8");
    ///
    /// assert!(BitPrefix::<u16>::new(0x1234, 8).is_err());
    /// assert!(BitPrefix::<u16>::new(0, 17).is_err());
    /// ```
    pub fn new(value: T, len: u32) -> Result<Self, PrefixError> {
        let mask = T::prefix_mask(len);
        if len > T::BITS || value.and(mask.not()) != T::ZERO {
            log::debug!(
                "rejecting prefix {value:#x}/{len}: bits outside a {}-bit prefix",
                T::BITS
            );
            return Err(PrefixError::InvalidPrefix {
                value: value.to_u64(),
                len,
                bits: T::BITS,
            });
        }

        Ok(BitPrefix { value, len })
    }

    /// The zero-length prefix, covering every word.
    pub fn any() -> Self {
        BitPrefix {
            value: T::ZERO,
            len: 0,
        }
    }

    /// The full-length prefix covering exactly one word.
    pub fn exact(value: T) -> Self {
        BitPrefix { value, len: T::BITS }
    }

    /// The prefix value.
    pub fn value(&self) -> T {
        self.value
    }

    /// The number of significant bits, counted from the most-significant end.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Return true for the zero-length prefix.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Word with the top `len` bits set.
    pub fn mask(&self) -> T {
        T::prefix_mask(self.len)
    }

    /// Test the most-significant bit of the prefix value.
    pub fn highest_bit_is_set(&self) -> bool {
        self.value.highest_bit_is_set()
    }

    /// Return the range of words covered by this prefix.
    pub fn to_range(&self) -> Range<T> {
        let mask = self.mask();
        Range::new(self.value.and(mask), self.value.or(mask.not()))
    }

    /// Return true if the two prefixes cover at least one common word.
    pub fn overlap(&self, other: &BitPrefix<T>) -> bool {
        self.to_range().overlap(&other.to_range())
    }

    /// Return true if every word covered by `other` is covered by this prefix.
    pub fn contains(&self, other: &BitPrefix<T>) -> bool {
        self.to_range().contains_range(&other.to_range())
    }

    /// Return true if `value` is covered by this prefix.
    pub fn matches(&self, value: T) -> bool {
        self.to_range().contains(value)
    }

    /// Parse a `value/len` string. The value is decimal, or hexadecimal when
    /// it starts with `0x` or `0X`.
    ///
    /// # Errors
    ///  - Returns [`PrefixError::InvalidFormat`] unless the input has exactly
    ///    one `/` between two well formed numbers.
    ///  - Returns [`PrefixError::OutOfRange`] if the value does not fit `T`,
    ///    or the length is larger than `T::BITS`.
    ///  - Returns [`PrefixError::InvalidPrefix`] if the value has bits set
    ///    outside the prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acl_trie::BitPrefix;
    ///
    /// let hex: BitPrefix<u16> = BitPrefix::parse("0x1234/16").unwrap();
    /// let dec: BitPrefix<u16> = BitPrefix::parse("4660/16").unwrap();
    /// assert_eq!(hex, dec);
    /// ```
    pub fn parse(input: &str) -> Result<Self, PrefixError> {
        let parts: Vec<&str> = input.split('/').collect();
        let [value, len] = parts.as_slice() else {
            log::debug!("rejecting prefix {input:?}: expected exactly one '/'");
            return Err(PrefixError::InvalidFormat {
                input: input.to_string(),
                expected: "prefix",
            });
        };

        let value = match value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
        {
            Some(hex_digits) => T::parse_hex(hex_digits, "prefix value")?,
            None => T::parse_decimal(value, "prefix value")?,
        };

        let len = u32::parse_decimal(len, "prefix length")?;
        if len > T::BITS {
            return Err(PrefixError::OutOfRange {
                input: len.to_string(),
                what: "prefix length",
            });
        }

        BitPrefix::new(value, len)
    }
}

impl<T: BitWord> fmt::Display for BitPrefix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = mem::size_of::<T>() * 2;
        write!(f, "0x{:0width$x}/{}", self.value, self.len)
    }
}

impl<T: BitWord> FromStr for BitPrefix<T> {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BitPrefix::parse(s)
    }
}

/// Types which can be viewed as a [`BitPrefix`], and so can be used as keys of
/// a [`Trie`][crate::Trie].
pub trait KeyPrefix {
    /// The word the prefix is built over.
    type Word: BitWord;

    /// View the current value as a bit prefix.
    fn bit_prefix(&self) -> BitPrefix<Self::Word>;
}

impl<T: BitWord> KeyPrefix for BitPrefix<T> {
    type Word = T;

    fn bit_prefix(&self) -> BitPrefix<T> {
        *self
    }
}

impl<K: KeyPrefix + ?Sized> KeyPrefix for &K {
    type Word = K::Word;

    fn bit_prefix(&self) -> BitPrefix<Self::Word> {
        (**self).bit_prefix()
    }
}
