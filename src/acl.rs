//! Access control rules matching traffic by address prefix and port and
//! protocol ranges.

use crate::{Ipv4Prefix, PrefixError, Range};
use alloc::{string::ToString, vec::Vec};
use core::{fmt, net::Ipv4Addr, str::FromStr};

/// A policy record matching traffic by source and destination prefix, source
/// and destination port range, and protocol number range.
///
/// # Examples
///
/// ```rust
/// use acl_trie::AclRule;
///
/// let rule = AclRule::new(
///     "192.168.0.0/16".parse().unwrap(),
///     "0.0.0.0/0".parse().unwrap(),
///     "0-65535".parse().unwrap(),
///     "0-65535".parse().unwrap(),
///     "0-255".parse().unwrap(),
/// );
///
/// assert_eq!(
///     rule.to_string(),
///     "192.168.0.0/16 0.0.0.0/0 0-65535 0-65535 0-255"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AclRule {
    /// Source address prefix.
    pub src: Ipv4Prefix,
    /// Destination address prefix.
    pub dst: Ipv4Prefix,
    /// Source port range.
    pub src_port: Range<u16>,
    /// Destination port range.
    pub dst_port: Range<u16>,
    /// IP protocol number range.
    pub proto: Range<u8>,
}

/// The 5-tuple identifying a flow of IPv4 traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowKey {
    /// Source address.
    pub src: Ipv4Addr,
    /// Destination address.
    pub dst: Ipv4Addr,
    /// Source port.
    pub src_port: u16,
    /// Destination port.
    pub dst_port: u16,
    /// IP protocol number.
    pub proto: u8,
}

impl AclRule {
    /// Create a rule from already parsed fields.
    pub fn new(
        src: Ipv4Prefix,
        dst: Ipv4Prefix,
        src_port: Range<u16>,
        dst_port: Range<u16>,
        proto: Range<u8>,
    ) -> Self {
        AclRule {
            src,
            dst,
            src_port,
            dst_port,
            proto,
        }
    }

    /// Return true if every field of the rule matches the flow.
    pub fn matches(&self, flow: &FlowKey) -> bool {
        self.src.matches(flow.src)
            && self.dst.matches(flow.dst)
            && self.src_port.contains(flow.src_port)
            && self.dst_port.contains(flow.dst_port)
            && self.proto.contains(flow.proto)
    }

    /// Return true if some flow could match both rules.
    pub fn overlap(&self, other: &AclRule) -> bool {
        self.src.overlap(&other.src)
            && self.dst.overlap(&other.dst)
            && self.src_port.overlap(&other.src_port)
            && self.dst_port.overlap(&other.dst_port)
            && self.proto.overlap(&other.proto)
    }

    /// Parse a rule from its five whitespace-separated fields, in the order
    /// `src dst src_port dst_port proto`.
    ///
    /// # Errors
    ///  - Returns [`PrefixError::InvalidFormat`] unless there are exactly five
    ///    fields.
    ///  - Returns any error produced while parsing an individual field.
    pub fn parse(input: &str) -> Result<Self, PrefixError> {
        let fields: Vec<&str> = input.split_whitespace().collect();
        let [src, dst, src_port, dst_port, proto] = fields.as_slice() else {
            log::debug!("rejecting ACL rule {input:?}: expected 5 fields, got {}", fields.len());
            return Err(PrefixError::InvalidFormat {
                input: input.to_string(),
                expected: "ACL rule",
            });
        };

        Ok(AclRule::new(
            src.parse()?,
            dst.parse()?,
            src_port.parse()?,
            dst_port.parse()?,
            proto.parse()?,
        ))
    }
}

/// Formats every field in the grammar accepted by [`AclRule::parse`].
impl fmt::Display for AclRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.src,
            self.dst,
            self.src_port.display_decimal(),
            self.dst_port.display_decimal(),
            self.proto.display_decimal()
        )
    }
}

impl FromStr for AclRule {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AclRule::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    fn web_rule() -> AclRule {
        AclRule::new(
            "10.0.0.0/8".parse().unwrap(),
            "192.168.1.0/24".parse().unwrap(),
            Range::full(),
            Range::new(80, 443),
            Range::single(6),
        )
    }

    fn flow(src: [u8; 4], dst: [u8; 4], dst_port: u16, proto: u8) -> FlowKey {
        FlowKey {
            src: Ipv4Addr::from(src),
            dst: Ipv4Addr::from(dst),
            src_port: 50123,
            dst_port,
            proto,
        }
    }

    #[test]
    fn format_permit_all_from_network() {
        let rule = AclRule::new(
            Ipv4Prefix::parse("192.168.0.0/16").unwrap(),
            Ipv4Prefix::parse("0.0.0.0/0").unwrap(),
            Range::parse("0-65535").unwrap(),
            Range::parse("0-65535").unwrap(),
            Range::parse("0-255").unwrap(),
        );

        assert_eq!(
            rule.to_string(),
            "192.168.0.0/16 0.0.0.0/0 0-65535 0-65535 0-255"
        );
    }

    #[test]
    fn parse_round_trips() {
        let rule = web_rule();
        let text = rule.to_string();
        assert_eq!(text, "10.0.0.0/8 192.168.1.0/24 0-65535 80-443 6-6");
        assert_eq!(text.parse::<AclRule>().unwrap(), rule);
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        let rule = AclRule::parse("  10.0.0.0/8\t192.168.1.0/24  0-65535 80-443 6-6\n").unwrap();
        assert_eq!(rule, web_rule());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            AclRule::parse("10.0.0.0/8 0.0.0.0/0 0-1 0-1").unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            AclRule::parse("10.0.0.0/8 0.0.0.0/0 0-1 0-1 0-1 0-1")
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            AclRule::parse("10.0.0.0/8 0.0.0.0/0 0-1 0-70000 0-1")
                .unwrap_err()
                .kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            AclRule::parse("10.0.0.1/8 0.0.0.0/0 0-1 0-1 0-1")
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidPrefix
        );
    }

    #[test]
    fn match_flows() {
        let rule = web_rule();

        assert!(rule.matches(&flow([10, 2, 3, 4], [192, 168, 1, 10], 443, 6)));
        assert!(!rule.matches(&flow([11, 2, 3, 4], [192, 168, 1, 10], 443, 6)));
        assert!(!rule.matches(&flow([10, 2, 3, 4], [192, 168, 2, 10], 443, 6)));
        assert!(!rule.matches(&flow([10, 2, 3, 4], [192, 168, 1, 10], 8080, 6)));
        assert!(!rule.matches(&flow([10, 2, 3, 4], [192, 168, 1, 10], 443, 17)));
    }

    #[test]
    fn rules_overlap_when_every_field_does() {
        let rule = web_rule();
        let mut other = rule;
        other.src = "10.20.0.0/16".parse().unwrap();
        other.dst_port = Range::new(443, 8443);
        assert!(rule.overlap(&other));
        assert!(other.overlap(&rule));

        other.proto = Range::single(17);
        assert!(!rule.overlap(&other));
    }
}
