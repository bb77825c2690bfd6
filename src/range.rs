//! Closed intervals over unsigned words.

use crate::{BitWord, PrefixError};
use alloc::{string::ToString, vec::Vec};
use core::{fmt, mem, str::FromStr};

/// A closed interval `low..=high` over a [`BitWord`].
///
/// The bounds are not required to be ordered. An inverted range (`low > high`)
/// is kept as-is and the interval tests compare its bounds literally: it
/// contains no single value, yet [`Range::overlap`] and [`Range::contains_range`]
/// can still report `true` against a range spanning its bounds. For inverted
/// input, `contains_range` does not imply `overlap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    /// Inclusive lower bound.
    pub low: T,
    /// Inclusive upper bound.
    pub high: T,
}

impl<T: BitWord> Range<T> {
    /// Create a range from its inclusive bounds.
    pub fn new(low: T, high: T) -> Self {
        Range { low, high }
    }

    /// The range covering every value of the word.
    pub fn full() -> Self {
        Range::new(T::ZERO, T::MAX)
    }

    /// The range holding exactly one value.
    pub fn single(value: T) -> Self {
        Range::new(value, value)
    }

    /// Return true if the two ranges share at least one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acl_trie::Range;
    ///
    /// let a = Range::<u16>::new(10, 20);
    /// assert!(a.overlap(&Range::new(20, 30)));
    /// assert!(!a.overlap(&Range::new(21, 30)));
    /// ```
    pub fn overlap(&self, other: &Range<T>) -> bool {
        self.low <= other.high && self.high >= other.low
    }

    /// Return true if `value` lies inside the range.
    pub fn contains(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }

    /// Return true if every value of `other` lies inside this range.
    pub fn contains_range(&self, other: &Range<T>) -> bool {
        self.low <= other.low && self.high >= other.high
    }

    /// Parse a `"low-high"` string of two decimal bounds.
    ///
    /// # Errors
    ///  - Returns [`PrefixError::InvalidFormat`] unless the input splits on `-`
    ///    into exactly two decimal numbers.
    ///  - Returns [`PrefixError::OutOfRange`] if either bound exceeds
    ///    `T::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acl_trie::Range;
    ///
    /// let ports: Range<u16> = Range::parse("1024-65535").unwrap();
    /// assert!(ports.contains(8080));
    /// assert!(Range::<u8>::parse("0-256").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, PrefixError> {
        let parts: Vec<&str> = input.split('-').collect();
        let [low, high] = parts.as_slice() else {
            log::debug!("rejecting range {input:?}: expected exactly one '-'");
            return Err(PrefixError::InvalidFormat {
                input: input.to_string(),
                expected: "range",
            });
        };

        let low = T::parse_decimal(low, "range bound")?;
        let high = T::parse_decimal(high, "range bound")?;

        Ok(Range::new(low, high))
    }

    /// Render the range with decimal bounds, in the same grammar accepted by
    /// [`Range::parse`].
    pub fn display_decimal(&self) -> DisplayDecimal<'_, T> {
        DisplayDecimal(self)
    }
}

/// Formats as fixed-width hexadecimal bounds, each zero-padded to two digits
/// per byte of `T`.
///
/// ```rust
/// use acl_trie::Range;
///
/// assert_eq!(Range::<u16>::full().to_string(), "0000-ffff");
/// ```
impl<T: BitWord> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = mem::size_of::<T>() * 2;
        write!(f, "{:0width$x}-{:0width$x}", self.low, self.high)
    }
}

impl<T: BitWord> FromStr for Range<T> {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s)
    }
}

/// Helper returned by [`Range::display_decimal`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayDecimal<'a, T>(&'a Range<T>);

impl<'a, T: BitWord> fmt::Display for DisplayDecimal<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0.low, self.0.high)
    }
}
