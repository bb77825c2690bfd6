//! Binary trie keyed by bit prefixes.

use crate::{BitPrefix, BitWord, KeyPrefix};
use alloc::vec::Vec;

mod node;
pub mod visitor;

pub use node::*;
use visitor::{BitPath, PrefixCollector, Visitable, Visitor};

/// A binary trie mapping bit prefixes to values.
///
/// Each edge is labeled by one bit of the key, consumed from the
/// most-significant end. A prefix of length `n` therefore names the node `n`
/// edges below the root, and the zero-length prefix names the root itself.
///
/// # Lookup semantics
///
/// [`Trie::find`] is an exact-length lookup, not a longest-prefix match. A
/// query only succeeds if a prefix with exactly the same value and length was
/// inserted; stored prefixes that are shorter or longer than the query are
/// never consulted, even when they cover it.
///
/// ```rust
/// use acl_trie::{BitPrefix, Trie};
///
/// let mut trie = Trie::new();
/// trie.insert(BitPrefix::<u16>::new(0x1200, 8).unwrap(), "wide");
///
/// assert_eq!(trie.find(BitPrefix::<u16>::new(0x1200, 8).unwrap()), Some(&"wide"));
/// // 0x1234/16 lies inside 0x1200/8, but was never inserted itself.
/// assert_eq!(trie.find(BitPrefix::<u16>::new(0x1234, 16).unwrap()), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie<T> {
    /// The root node, present even when the trie is empty.
    root: TrieNode<T>,
    /// The number of nodes holding a value.
    num_entries: usize,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Trie::new()
    }
}

/// Iterate the bits of a prefix, most-significant first.
fn descent<P: BitWord>(prefix: BitPrefix<P>) -> impl Iterator<Item = bool> {
    let mut bits = prefix.value();
    (0..prefix.len()).map(move |_| {
        let bit = bits.highest_bit_is_set();
        bits = bits.shl1();
        bit
    })
}

impl<T> Trie<T> {
    /// Create a new, empty [`Trie`].
    ///
    /// Only the root node is allocated, inline.
    pub const fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            num_entries: 0,
        }
    }

    /// Store `value` under the given prefix.
    ///
    /// Missing nodes along the path are created. An existing value for the
    /// same prefix is overwritten.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acl_trie::{BitPrefix, Trie};
    ///
    /// let mut trie = Trie::<u32>::new();
    /// let key = BitPrefix::<u16>::new(0x1234, 16).unwrap();
    ///
    /// trie.insert(key, 1);
    /// trie.insert(key, 2);
    /// assert_eq!(trie.find(key), Some(&2));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert<K: KeyPrefix>(&mut self, key: K, value: T) {
        let prefix = key.bit_prefix();
        let mut current = &mut self.root;
        for bit in descent(prefix) {
            current = current.child_or_insert(bit);
        }

        if current.replace(value).is_none() {
            self.num_entries += 1;
            log::trace!("inserted new entry at {prefix}");
        } else {
            log::trace!("overwrote entry at {prefix}");
        }
    }

    fn find_node<P: BitWord>(&self, prefix: BitPrefix<P>) -> Option<&TrieNode<T>> {
        let mut current = &self.root;
        for bit in descent(prefix) {
            current = current.child(bit)?;
        }

        Some(current)
    }

    /// Return the value stored under exactly this prefix, if any.
    ///
    /// See the [type documentation][Trie] for why this is not a
    /// longest-prefix match.
    pub fn find<K: KeyPrefix>(&self, key: K) -> Option<&T> {
        let prefix = key.bit_prefix();
        let found = self.find_node(prefix).and_then(TrieNode::value);
        if found.is_none() {
            log::trace!("no entry at {prefix}");
        }

        found
    }

    /// Return a mutable reference to the value stored under exactly this
    /// prefix, if any.
    pub fn find_mut<K: KeyPrefix>(&mut self, key: K) -> Option<&mut T> {
        let mut current = &mut self.root;
        for bit in descent(key.bit_prefix()) {
            current = current.child_mut(bit)?;
        }

        current.value_mut()
    }

    /// Return true if a value is stored under exactly this prefix.
    pub fn contains_key<K: KeyPrefix>(&self, key: K) -> bool {
        self.find(key).is_some()
    }

    /// List the prefixes of every stored value.
    ///
    /// The order of the returned prefixes is unspecified. Nodes deeper than
    /// `P::BITS` cannot be represented by a `BitPrefix<P>` and are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acl_trie::{BitPrefix, Trie};
    ///
    /// let mut trie = Trie::new();
    /// let a = BitPrefix::<u8>::new(0b1000_0000, 1).unwrap();
    /// let b = BitPrefix::<u8>::new(0b0100_0000, 2).unwrap();
    /// trie.insert(a, 'a');
    /// trie.insert(b, 'b');
    ///
    /// let mut dumped = trie.dump::<u8>();
    /// dumped.sort();
    /// assert_eq!(dumped, [b, a]);
    /// ```
    pub fn dump<P: BitWord>(&self) -> Vec<BitPrefix<P>> {
        self.visit_with(&mut PrefixCollector::<P>::new())
    }

    /// Length of the longest path from the root, `0` for a trie with no nodes
    /// below the root.
    ///
    /// The depth is structural; it does not depend on which nodes hold values.
    pub fn max_depth(&self) -> usize {
        self.root.max_depth()
    }

    /// The number of stored values.
    pub fn len(&self) -> usize {
        self.num_entries
    }

    /// Return true if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }

    /// Drop every node and value, leaving an empty root.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.num_entries = 0;
    }

    /// The root node of the trie.
    pub fn root(&self) -> &TrieNode<T> {
        &self.root
    }

    /// Run the given [`Visitor`] over every node, starting at the root.
    pub fn visit_with<V: Visitor<T>>(&self, visitor: &mut V) -> V::Output {
        self.root.visit_with(visitor, BitPath::root())
    }
}

impl<K: KeyPrefix, T> Extend<(K, T)> for Trie<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: KeyPrefix, T> FromIterator<(K, T)> for Trie<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
