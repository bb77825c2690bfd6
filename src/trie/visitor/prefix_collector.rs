use crate::{
    visitor::{BitPath, Visitable, Visitor},
    BitPrefix, BitWord, TrieNode,
};
use alloc::vec::Vec;
use core::marker::PhantomData;

/// A visitor of the trie which rebuilds the prefix of every node holding a
/// value.
///
/// Nodes deeper than `P::BITS` are skipped along with their subtrees.
#[derive(Debug)]
pub struct PrefixCollector<P> {
    _word: PhantomData<P>,
}

impl<P: BitWord> PrefixCollector<P> {
    /// Create a new collector.
    pub fn new() -> Self {
        PrefixCollector { _word: PhantomData }
    }
}

impl<P: BitWord> Default for PrefixCollector<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: BitWord> Visitor<T> for PrefixCollector<P> {
    type Output = Vec<BitPrefix<P>>;

    fn default_output(&self) -> Self::Output {
        Vec::new()
    }

    fn combine_output(&self, mut o1: Self::Output, o2: Self::Output) -> Self::Output {
        o1.extend(o2);
        o1
    }

    fn visit_node(&mut self, node: &TrieNode<T>, path: BitPath) -> Self::Output {
        let Some(prefix) = path.to_prefix::<P>() else {
            log::trace!(
                "skipping subtree at depth {}, deeper than {} bits",
                path.depth(),
                P::BITS
            );
            return Vec::new();
        };

        let mut output = Vec::new();
        if node.has_info() {
            output.push(prefix);
        }

        output.extend(node.super_visit_with(self, path));
        output
    }
}
