//! Per-cell search state and the caller-facing node snapshot.

use gridway_core::Point;

/// Cost standing in for "unreached" and "blocked".
///
/// Blocked cells keep their combined priority pinned at this value, so they
/// are never selected for expansion ahead of any reachable walkable cell,
/// and no comparison needs to special-case them.
pub const SENTINEL_COST: f64 = 10_000.0;

/// One cell of the search arena.
///
/// Position is fixed for the grid's lifetime; scores and predecessor are
/// mutated by rescoring and by the search loop. The predecessor is an index
/// into the same flat arena, never a reference.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) pos: Point,
    /// Cost of the cheapest known path from start, or [`SENTINEL_COST`].
    pub(crate) g: f64,
    /// Heuristic estimate of the remaining cost to the goal.
    pub(crate) h: f64,
    /// Combined priority ordering expansion (lower first).
    pub(crate) f: f64,
    pub(crate) parent: Option<usize>,
}

impl Node {
    pub(crate) fn at(pos: Point) -> Self {
        Self {
            pos,
            g: 0.0,
            h: 0.0,
            f: 0.0,
            parent: None,
        }
    }

    pub(crate) fn snapshot(&self) -> PathNode {
        PathNode {
            pos: self.pos,
            g: self.g,
            h: self.h,
            f: self.f,
        }
    }
}

/// A value-copy snapshot of one grid cell's search state.
///
/// Returned inside a [`Path`](crate::Path); independent of any later grid
/// mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub g: f64,
    pub h: f64,
    pub f: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_copies_state() {
        let mut node = Node::at(Point::new(2, 3));
        node.g = 4.0;
        node.h = 1.5;
        node.f = 5.5;
        let snap = node.snapshot();
        node.g = 9.0;
        assert_eq!(snap.pos, Point::new(2, 3));
        assert_eq!(snap.g, 4.0);
        assert_eq!(snap.f, 5.5);
    }
}
