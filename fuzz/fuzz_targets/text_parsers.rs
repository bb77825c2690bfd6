#![no_main]

use acl_trie::{AclRule, BitPrefix, Ipv4Prefix, Range};

libfuzzer_sys::fuzz_target!(|input: &str| {
    // Anything that parses must format back to text that parses to the same
    // value.
    if let Ok(prefix) = Ipv4Prefix::parse(input) {
        assert_eq!(Ipv4Prefix::parse(&prefix.to_string()), Ok(prefix));
    }

    if let Ok(prefix) = BitPrefix::<u16>::parse(input) {
        assert_eq!(BitPrefix::parse(&prefix.to_string()), Ok(prefix));
    }

    if let Ok(range) = Range::<u16>::parse(input) {
        let text = range.display_decimal().to_string();
        assert_eq!(Range::parse(&text), Ok(range));
    }

    if let Ok(rule) = AclRule::parse(input) {
        assert_eq!(AclRule::parse(&rule.to_string()), Ok(rule));
    }
});
