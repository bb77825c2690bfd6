use alloc::boxed::Box;

/// A single node of a [`Trie`][crate::Trie].
///
/// The left child is reached by a `0` bit and the right child by a `1` bit.
/// Every node exclusively owns its children, so dropping a node drops the
/// whole subtree below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode<T> {
    left: Option<Box<TrieNode<T>>>,
    right: Option<Box<TrieNode<T>>>,
    value: Option<T>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        TrieNode::new()
    }
}

impl<T> TrieNode<T> {
    /// Create an empty node, with no children and no payload.
    pub const fn new() -> Self {
        TrieNode {
            left: None,
            right: None,
            value: None,
        }
    }

    /// The child reached by a `0` bit.
    pub fn left(&self) -> Option<&TrieNode<T>> {
        self.left.as_deref()
    }

    /// The child reached by a `1` bit.
    pub fn right(&self) -> Option<&TrieNode<T>> {
        self.right.as_deref()
    }

    /// The child reached by the given bit.
    pub fn child(&self, bit: bool) -> Option<&TrieNode<T>> {
        if bit {
            self.right()
        } else {
            self.left()
        }
    }

    pub(crate) fn child_mut(&mut self, bit: bool) -> Option<&mut TrieNode<T>> {
        let slot = if bit { &mut self.right } else { &mut self.left };
        slot.as_deref_mut()
    }

    /// Return the child reached by the given bit, allocating it if absent.
    pub(crate) fn child_or_insert(&mut self, bit: bool) -> &mut TrieNode<T> {
        let slot = if bit { &mut self.right } else { &mut self.left };
        slot.get_or_insert_with(|| Box::new(TrieNode::new()))
    }

    /// Iterate over the existing children, left first, with the bit labeling
    /// each edge.
    pub fn children(&self) -> impl Iterator<Item = (bool, &TrieNode<T>)> {
        self.left()
            .map(|node| (false, node))
            .into_iter()
            .chain(self.right().map(|node| (true, node)))
    }

    /// Number of existing children, from 0 to 2.
    pub fn num_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// The payload stored on this node, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Return true if a payload has been stored on this node.
    pub fn has_info(&self) -> bool {
        self.value.is_some()
    }

    /// Store a payload, returning the previous one.
    pub(crate) fn replace(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Length of the longest path from this node down to a descendant, `0` if
    /// the node has no children.
    pub fn max_depth(&self) -> usize {
        self.children()
            .map(|(_, child)| 1 + child.max_depth())
            .max()
            .unwrap_or(0)
    }
}
