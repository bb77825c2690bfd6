//! Utilities for inspecting the trie structure.

#[cfg(feature = "std")]
mod dot_printer;
mod prefix_collector;
mod tree_stats;

use crate::{BitPrefix, BitWord, TrieNode};
use core::fmt;
#[cfg(feature = "std")]
pub use dot_printer::*;
pub use prefix_collector::*;
pub use tree_stats::*;

/// The path from the root to a node, as the bits consumed so far.
///
/// The bits are kept most-significant aligned in a `u64`, so a path can be
/// turned back into a [`BitPrefix`] of any word that is at least `depth` bits
/// wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitPath {
    bits: u64,
    depth: u32,
}

impl BitPath {
    /// The empty path, naming the root node.
    pub const fn root() -> Self {
        BitPath { bits: 0, depth: 0 }
    }

    /// The number of edges between the root and the node.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The path bits, most-significant aligned.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Return the path extended by one edge.
    ///
    /// Keys are at most 64 bits wide, so no node lives below depth 64; bits
    /// past that depth are not recorded.
    pub fn push(self, bit: bool) -> Self {
        let bits = if bit && self.depth < u64::BITS {
            self.bits | (1 << (u64::BITS - 1 - self.depth))
        } else {
            self.bits
        };

        BitPath {
            bits,
            depth: self.depth + 1,
        }
    }

    /// Rebuild the prefix that leads to this node, if it fits in `P`.
    pub fn to_prefix<P: BitWord>(&self) -> Option<BitPrefix<P>> {
        if self.depth > P::BITS {
            return None;
        }

        BitPrefix::new(P::from_msb_aligned(self.bits), self.depth).ok()
    }
}

/// Formats the path as a string of `0` and `1` digits, or `*` for the root.
impl fmt::Display for BitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depth == 0 {
            return f.write_str("*");
        }

        for index in 0..self.depth.min(u64::BITS) {
            let bit = self.bits & (1 << (u64::BITS - 1 - index)) != 0;
            f.write_str(if bit { "1" } else { "0" })?;
        }

        Ok(())
    }
}

/// The `Visitable` trait allows [`Visitor`]s to traverse the structure of the
/// implementing type and produce some output.
pub trait Visitable<T> {
    /// This function provides the default traversal behavior for the
    /// implementing type.
    ///
    /// The implementation should call `visit_with(visitor, path)` for all
    /// relevant children. If there are no children, it should just produce the
    /// default output.
    fn super_visit_with<V: Visitor<T>>(&self, visitor: &mut V, path: BitPath) -> V::Output;

    /// This function will traverse the implementing type and execute any
    /// specific logic from the given [`Visitor`].
    fn visit_with<V: Visitor<T>>(&self, visitor: &mut V, path: BitPath) -> V::Output {
        self.super_visit_with(visitor, path)
    }
}

impl<T> Visitable<T> for TrieNode<T> {
    fn super_visit_with<V: Visitor<T>>(&self, visitor: &mut V, path: BitPath) -> V::Output {
        let mut children = self.children();
        if let Some((bit, first)) = children.next() {
            let mut accum = first.visit_with(visitor, path.push(bit));
            for (bit, child) in children {
                let output = child.visit_with(visitor, path.push(bit));
                accum = visitor.combine_output(accum, output);
            }

            accum
        } else {
            visitor.default_output()
        }
    }

    fn visit_with<V: Visitor<T>>(&self, visitor: &mut V, path: BitPath) -> V::Output {
        visitor.visit_node(self, path)
    }
}

/// The `Visitor` trait allows creating new operations on the trie by
/// overriding the per-node hook.
///
/// Nodes are visited in pre-order, left child before right child.
pub trait Visitor<T>: Sized {
    /// The type of value that the visitor produces.
    type Output;

    /// Produce the default value of the [`Self::Output`] type.
    fn default_output(&self) -> Self::Output;

    /// Combine two instances of the [`Self::Output`] type for this [`Visitor`].
    fn combine_output(&self, o1: Self::Output, o2: Self::Output) -> Self::Output;

    /// Visit a [`TrieNode`] reached by the given path.
    fn visit_node(&mut self, node: &TrieNode<T>, path: BitPath) -> Self::Output {
        node.super_visit_with(self, path)
    }
}
