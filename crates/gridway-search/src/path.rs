//! The [`Path`] result type — an ordered sequence of node snapshots.

use std::collections::VecDeque;

use gridway_core::Point;

use crate::node::PathNode;

/// An ordered route from start to goal, inclusive.
///
/// Holds value copies of the visited cells, so it stays valid however the
/// grid is mutated afterwards. Built front-first during backtrace;
/// [`reverse`](Path::reverse) is available for sequences assembled end-first.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: VecDeque<PathNode>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a node.
    pub fn push_front(&mut self, node: PathNode) {
        self.nodes.push_front(node);
    }

    /// Append a node.
    pub fn push_back(&mut self, node: PathNode) {
        self.nodes.push_back(node);
    }

    /// Number of nodes, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the path holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first node (the start), or `None` on an empty path.
    pub fn first(&self) -> Option<&PathNode> {
        self.nodes.front()
    }

    /// The last node (the goal), or `None` on an empty path.
    pub fn last(&self) -> Option<&PathNode> {
        self.nodes.back()
    }

    /// The node following `current` in sequence order.
    ///
    /// Lookup is by coordinate equality, not identity, since stored nodes are
    /// value copies. Returns `None` when `current` is the last node or its
    /// coordinates are not on the path.
    pub fn next_after(&self, current: &PathNode) -> Option<&PathNode> {
        // The end check comes before the scan: degenerate routes can repeat
        // coordinates, and the last node must have no successor even when an
        // earlier node shares its position.
        if self.last().is_some_and(|n| n.pos == current.pos) {
            return None;
        }
        let at = self.position_of(current.pos)?;
        self.nodes.get(at + 1)
    }

    /// Reverse the sequence in place.
    pub fn reverse(&mut self) {
        self.nodes.make_contiguous().reverse();
    }

    /// Iterate over the nodes front to back.
    pub fn iter(&self) -> impl Iterator<Item = &PathNode> {
        self.nodes.iter()
    }

    fn position_of(&self, pos: Point) -> Option<usize> {
        self.nodes.iter().position(|n| n.pos == pos)
    }
}

impl IntoIterator for Path {
    type Item = PathNode;
    type IntoIter = std::collections::vec_deque::IntoIter<PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathNode;
    type IntoIter = std::collections::vec_deque::Iter<'a, PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
