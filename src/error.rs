use alloc::string::String;
use thiserror::Error;

/// The kind of failure behind a [`PrefixError`], without any context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A prefix value had bits set outside its length, or the length was
    /// larger than the word.
    InvalidPrefix,
    /// Textual input had the wrong shape.
    InvalidFormat,
    /// A numeric component did not fit its target type.
    OutOfRange,
}

/// Error returned when constructing or parsing prefixes, ranges and rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixError {
    /// The prefix value has bits set below its declared length, or the
    /// declared length exceeds the bit width of the word.
    #[error("invalid prefix: value {value:#x} with length {len} does not fit a {bits}-bit prefix")]
    InvalidPrefix {
        /// The prefix value, widened to 64 bits.
        value: u64,
        /// The requested prefix length.
        len: u32,
        /// The bit width of the prefix word.
        bits: u32,
    },
    /// The input text does not have the expected number of separated parts.
    #[error("invalid {expected}: {input:?}")]
    InvalidFormat {
        /// The offending input.
        input: String,
        /// What the input was supposed to be.
        expected: &'static str,
    },
    /// A numeric component exceeds the bounds of its target type.
    #[error("{what} out of range: {input:?}")]
    OutOfRange {
        /// The offending numeric text.
        input: String,
        /// What the number was supposed to be.
        what: &'static str,
    },
}

impl PrefixError {
    /// Return the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PrefixError::InvalidPrefix { .. } => ErrorKind::InvalidPrefix,
            PrefixError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            PrefixError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}
