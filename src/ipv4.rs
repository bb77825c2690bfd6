//! IPv4 network prefixes in CIDR notation.

use crate::{BitPrefix, BitWord, KeyPrefix, PrefixError};
use alloc::{string::ToString, vec::Vec};
use core::{fmt, net::Ipv4Addr, str::FromStr};

/// An IPv4 network prefix, like `192.168.0.0/16`.
///
/// This is a [`BitPrefix<u32>`] with the address packed big-endian, so the
/// first octet holds the most-significant bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv4Prefix(BitPrefix<u32>);

impl Ipv4Prefix {
    /// Create a prefix from a big-endian packed address and a length.
    ///
    /// # Errors
    ///  - Returns [`PrefixError::InvalidPrefix`] if `len` is larger than 32,
    ///    or if the address has host bits set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acl_trie::Ipv4Prefix;
    ///
    /// let net = Ipv4Prefix::new(0xc0a8_0000, 16).unwrap();
    /// assert_eq!(net.to_string(), "192.168.0.0/16");
    /// ```
    pub fn new(addr: u32, len: u32) -> Result<Self, PrefixError> {
        BitPrefix::new(addr, len).map(Ipv4Prefix)
    }

    /// Create a prefix from an address and a length.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Ipv4Prefix::new`].
    pub fn from_addr(addr: Ipv4Addr, len: u32) -> Result<Self, PrefixError> {
        Ipv4Prefix::new(u32::from(addr), len)
    }

    /// The prefix covering a single host address.
    pub fn host(addr: Ipv4Addr) -> Self {
        Ipv4Prefix(BitPrefix::exact(u32::from(addr)))
    }

    /// The network address of the prefix.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.0.value())
    }

    /// The prefix length, from 0 to 32.
    pub fn len(&self) -> u32 {
        self.0.len()
    }

    /// Return true for `0.0.0.0/0`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying bit prefix.
    pub fn as_bit_prefix(&self) -> BitPrefix<u32> {
        self.0
    }

    /// Return the prefix of the given shorter length that covers this one, or
    /// `None` if `len` is longer than this prefix.
    pub fn truncate(&self, len: u32) -> Option<Ipv4Prefix> {
        if len > self.len() {
            return None;
        }

        Ipv4Prefix::new(self.0.value() & u32::prefix_mask(len), len).ok()
    }

    /// Return true if the two prefixes share at least one address.
    pub fn overlap(&self, other: &Ipv4Prefix) -> bool {
        self.0.overlap(&other.0)
    }

    /// Return true if every address of `other` is inside this prefix.
    pub fn contains(&self, other: &Ipv4Prefix) -> bool {
        self.0.contains(&other.0)
    }

    /// Return true if `addr` is inside this prefix.
    pub fn matches(&self, addr: Ipv4Addr) -> bool {
        self.0.matches(u32::from(addr))
    }

    /// Parse a dotted-quad CIDR string, like `10.0.0.0/8`.
    ///
    /// # Errors
    ///  - Returns [`PrefixError::InvalidFormat`] unless the input has exactly
    ///    one `/`, and exactly four `.`-separated decimal octets before it.
    ///  - Returns [`PrefixError::OutOfRange`] if an octet is larger than 255
    ///    or the length is larger than 32.
    ///  - Returns [`PrefixError::InvalidPrefix`] if the address has host bits
    ///    set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acl_trie::{ErrorKind, Ipv4Prefix};
    ///
    /// let net = Ipv4Prefix::parse("10.0.0.0/8").unwrap();
    /// assert_eq!(net.len(), 8);
    ///
    /// let err = Ipv4Prefix::parse("192.168.10000.0/16").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::OutOfRange);
    /// ```
    pub fn parse(input: &str) -> Result<Self, PrefixError> {
        let parts: Vec<&str> = input.split('/').collect();
        let [addr, len] = parts.as_slice() else {
            log::debug!("rejecting CIDR prefix {input:?}: expected exactly one '/'");
            return Err(PrefixError::InvalidFormat {
                input: input.to_string(),
                expected: "CIDR prefix",
            });
        };

        let octets: Vec<&str> = addr.split('.').collect();
        let [a, b, c, d] = octets.as_slice() else {
            log::debug!("rejecting CIDR prefix {input:?}: expected four octets");
            return Err(PrefixError::InvalidFormat {
                input: addr.to_string(),
                expected: "IPv4 address",
            });
        };

        let mut packed = [0u8; 4];
        for (byte, octet) in packed.iter_mut().zip([a, b, c, d]) {
            *byte = u8::parse_decimal(octet, "IPv4 octet")?;
        }

        let len = u32::parse_decimal(len, "IPv4 prefix length")?;
        if len > u32::BITS {
            return Err(PrefixError::OutOfRange {
                input: len.to_string(),
                what: "IPv4 prefix length",
            });
        }

        Ipv4Prefix::new(u32::from_be_bytes(packed), len)
    }
}

impl fmt::Display for Ipv4Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0.value().to_be_bytes();
        write!(f, "{a}.{b}.{c}.{d}/{}", self.0.len())
    }
}

impl FromStr for Ipv4Prefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Prefix::parse(s)
    }
}

impl From<Ipv4Prefix> for BitPrefix<u32> {
    fn from(prefix: Ipv4Prefix) -> Self {
        prefix.0
    }
}

impl From<BitPrefix<u32>> for Ipv4Prefix {
    fn from(prefix: BitPrefix<u32>) -> Self {
        Ipv4Prefix(prefix)
    }
}

impl KeyPrefix for Ipv4Prefix {
    type Word = u32;

    fn bit_prefix(&self) -> BitPrefix<u32> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn format_dotted_quad() {
        let net = Ipv4Prefix::new(0xc0a8_0000, 16).unwrap();
        assert_eq!(net.to_string(), "192.168.0.0/16");
        assert_eq!(Ipv4Prefix::new(0, 0).unwrap().to_string(), "0.0.0.0/0");
        assert_eq!(
            Ipv4Prefix::host(Ipv4Addr::new(10, 1, 2, 3)).to_string(),
            "10.1.2.3/32"
        );
    }

    #[test]
    fn parse_round_trips() {
        for input in ["192.168.0.0/16", "0.0.0.0/0", "255.255.255.255/32", "10.128.0.0/9"] {
            let net = Ipv4Prefix::parse(input).unwrap();
            assert_eq!(net.to_string(), input);
        }
    }

    #[test]
    fn parse_octet_out_of_range() {
        let err = Ipv4Prefix::parse("192.168.10000.0/16").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(
            Ipv4Prefix::parse("256.0.0.0/8").unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn parse_length_out_of_range() {
        assert_eq!(
            Ipv4Prefix::parse("10.0.0.0/33").unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            Ipv4Prefix::parse("10.0.0.0/99999999999").unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn parse_malformed() {
        for input in [
            "10.0.0.0",
            "10.0.0.0/8/8",
            "10.0.0/8",
            "10.0.0.0.0/8",
            "10..0.0/8",
            "a.b.c.d/8",
            "10.0.0.0/",
        ] {
            assert_eq!(
                Ipv4Prefix::parse(input).unwrap_err().kind(),
                ErrorKind::InvalidFormat,
                "{input:?}"
            );
        }
    }

    #[test]
    fn parse_host_bits_set() {
        assert_eq!(
            Ipv4Prefix::parse("192.168.1.1/16").unwrap_err().kind(),
            ErrorKind::InvalidPrefix
        );
    }

    #[test]
    fn address_operations() {
        let net: Ipv4Prefix = "172.16.0.0/12".parse().unwrap();
        let inner: Ipv4Prefix = "172.20.0.0/16".parse().unwrap();
        let outside: Ipv4Prefix = "172.32.0.0/16".parse().unwrap();

        assert_eq!(net.network(), Ipv4Addr::new(172, 16, 0, 0));
        assert!(net.contains(&inner));
        assert!(net.overlap(&inner));
        assert!(!net.overlap(&outside));
        assert!(net.matches(Ipv4Addr::new(172, 31, 255, 255)));
        assert!(!net.matches(Ipv4Addr::new(172, 32, 0, 0)));
    }

    #[test]
    fn truncate_to_shorter_length() {
        let net: Ipv4Prefix = "10.1.2.0/24".parse().unwrap();
        assert_eq!(net.truncate(8), Some("10.0.0.0/8".parse().unwrap()));
        assert_eq!(net.truncate(24), Some(net));
        assert_eq!(net.truncate(25), None);
    }
}
