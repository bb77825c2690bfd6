#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    missing_docs,
    clippy::missing_safety_doc,
    unsafe_code,
    deprecated_in_future,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rustdoc::invalid_codeblock_attributes
)]
#![doc(
    html_playground_url = "https://play.rust-lang.org/",
    test(attr(deny(warnings)))
)]

//! Binary prefix trie with an interval algebra and IPv4 ACL rule types
//!
//! The building blocks, leaves first:
//!
//!  - [`Range`] is a closed interval over an unsigned word, with overlap and
//!    containment tests.
//!  - [`BitPrefix`] is a value plus a bit length over an unsigned word. It
//!    converts to the [`Range`] of words it covers.
//!  - [`Trie`] is a binary tree keyed by the bits of a [`BitPrefix`], most
//!    significant bit first. Lookups are exact-length: see [`Trie::find`].
//!  - [`Ipv4Prefix`] is a `BitPrefix<u32>` written in CIDR notation.
//!  - [`AclRule`] combines two [`Ipv4Prefix`]es with port and protocol
//!    [`Range`]s.
//!
//! # Examples
//!
//! ```rust
//! use acl_trie::{AclRule, Ipv4Prefix, Trie};
//!
//! let rule: AclRule = "10.0.0.0/8 0.0.0.0/0 0-65535 22-22 6-6".parse().unwrap();
//!
//! let mut by_source = Trie::new();
//! by_source.insert(rule.src, vec![rule]);
//!
//! let src: Ipv4Prefix = "10.0.0.0/8".parse().unwrap();
//! assert_eq!(by_source.find(src).map(Vec::len), Some(1));
//! ```
//!
//! # Features
//!
//!  - `std` (default): enables [`visitor::DotPrinter`]. Without it the crate
//!    is `no_std` and only needs `alloc`.

extern crate alloc;
#[cfg(all(test, not(feature = "std")))]
extern crate std;

mod acl;
mod bits;
mod error;
mod ipv4;
mod prefix;
mod range;
mod trie;

#[doc(hidden)]
pub mod tests_common;

pub use acl::*;
pub use bits::*;
pub use error::*;
pub use ipv4::*;
pub use prefix::*;
pub use range::*;
pub use trie::{visitor, *};
