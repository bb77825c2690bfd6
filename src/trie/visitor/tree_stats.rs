use crate::{
    visitor::{BitPath, Visitable, Visitor},
    Trie, TrieNode,
};
use core::fmt;

/// A visitor of the trie which collects statistics about its shape, like how
/// many nodes exist and how many of them hold a value.
#[derive(Debug)]
pub struct TreeStatsCollector {
    stats: TreeStats,
}

impl TreeStatsCollector {
    /// Run the stats collection over the given trie, then return the
    /// accumulated stats.
    pub fn collect<T>(trie: &Trie<T>) -> TreeStats {
        let mut collector = TreeStatsCollector {
            stats: TreeStats::default(),
        };

        trie.visit_with(&mut collector);

        collector.stats
    }
}

/// Collection of stats about the nodes present in a trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes, including the root.
    pub node_count: usize,
    /// Number of nodes holding a value.
    pub occupied_count: usize,
    /// Number of nodes with both children present.
    pub branch_count: usize,
    /// Number of nodes with no children.
    pub leaf_count: usize,
    /// Length of the longest path from the root.
    pub max_depth: usize,
}

impl TreeStats {
    /// Number of nodes that exist only to carry a path, without a value.
    pub fn empty_count(&self) -> usize {
        self.node_count - self.occupied_count
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entry(&"nodes", &self.node_count)
            .entry(&"occupied", &self.occupied_count)
            .entry(&"empty", &self.empty_count())
            .entry(&"branches", &self.branch_count)
            .entry(&"leaves", &self.leaf_count)
            .entry(&"max_depth", &self.max_depth)
            .finish()
    }
}

impl<T> Visitor<T> for TreeStatsCollector {
    type Output = ();

    fn default_output(&self) -> Self::Output {}

    fn combine_output(&self, _: Self::Output, _: Self::Output) -> Self::Output {}

    fn visit_node(&mut self, node: &TrieNode<T>, path: BitPath) -> Self::Output {
        let stats = &mut self.stats;
        stats.node_count += 1;
        stats.max_depth = stats.max_depth.max(path.depth() as usize);
        if node.has_info() {
            stats.occupied_count += 1;
        }
        match node.num_children() {
            0 => stats.leaf_count += 1,
            2 => stats.branch_count += 1,
            _ => {},
        }

        node.super_visit_with(self, path)
    }
}
