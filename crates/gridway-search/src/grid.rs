//! The [`SearchGrid`] — node arena, walkability mask and endpoints.

use gridway_core::{Point, WalkMask};

use crate::error::{Endpoint, InitError};
use crate::node::{Node, PathNode};

/// Neighbor offsets in the fixed expansion order: left, right, up, down.
///
/// The order is load-bearing: equal-priority nodes are expanded in the order
/// they were discovered, so discovery order decides tie-breaks.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A fixed-size search grid: a flat arena of per-cell search state plus a
/// walkability mask of identical dimensions.
///
/// Created empty (uninitialized); [`initialize`](SearchGrid::initialize)
/// validates input strictly and allocates the arena.
/// [`set_start`](SearchGrid::set_start) and [`set_goal`](SearchGrid::set_goal)
/// are permissive by contrast: out-of-range positions are silently ignored.
#[derive(Debug, Clone, Default)]
pub struct SearchGrid {
    pub(crate) nodes: Vec<Node>,
    pub(crate) mask: WalkMask,
    width: i32,
    height: i32,
    pub(crate) start: usize,
    pub(crate) goal: usize,
    initialized: bool,
}

impl SearchGrid {
    /// Create an empty, uninitialized grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the grid for searching.
    ///
    /// Allocates a `width * height` node arena with each node's position set
    /// to its grid coordinates, stores `mask` by value, and computes the
    /// initial scores. Fails without touching prior state if the dimensions
    /// are non-positive, the mask does not match them, either endpoint is out
    /// of bounds, or `start == goal`.
    pub fn initialize(
        &mut self,
        width: i32,
        height: i32,
        start: Point,
        goal: Point,
        mask: WalkMask,
    ) -> Result<(), InitError> {
        if width <= 0 || height <= 0 {
            return Err(InitError::NonPositiveDimensions { width, height });
        }
        if mask.width() != width || mask.height() != height {
            return Err(InitError::MaskSizeMismatch {
                expected: (width, height),
                actual: (mask.width(), mask.height()),
            });
        }
        let in_bounds = |p: Point| p.x >= 0 && p.x < width && p.y >= 0 && p.y < height;
        if !in_bounds(start) {
            return Err(InitError::OutOfBounds {
                endpoint: Endpoint::Start,
                pos: start,
            });
        }
        if !in_bounds(goal) {
            return Err(InitError::OutOfBounds {
                endpoint: Endpoint::Goal,
                pos: goal,
            });
        }
        if start == goal {
            return Err(InitError::StartEqualsGoal { pos: start });
        }

        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.nodes.clear();
        self.nodes.reserve(len);
        for i in 0..len {
            self.nodes.push(Node::at(point_at(i, width)));
        }
        self.mask = mask;
        // Bounds were checked above.
        self.start = flat_index(start, width);
        self.goal = flat_index(goal, width);
        self.initialized = true;

        self.rescore();
        log::debug!("grid initialized: {width}x{height}, start {start}, goal {goal}");
        Ok(())
    }

    /// Clear the grid back to its uninitialized state.
    ///
    /// Searches fail with an initialization error until
    /// [`initialize`](SearchGrid::initialize) succeeds again.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.mask = WalkMask::default();
        self.width = 0;
        self.height = 0;
        self.start = 0;
        self.goal = 0;
        self.initialized = false;
        log::debug!("grid reset");
    }

    /// Move the start cell. Out-of-range positions are silently ignored;
    /// on success all scores are recomputed.
    pub fn set_start(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.start = i;
            self.rescore();
        }
    }

    /// Move the goal cell. Out-of-range positions are silently ignored;
    /// on success all scores are recomputed.
    pub fn set_goal(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.goal = i;
            self.rescore();
        }
    }

    /// Append the walkable 4-neighbors of `p` to `buf`, in the fixed
    /// left/right/up/down order. The caller clears `buf` beforehand.
    pub fn walkable_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let n = p.shift(dx, dy);
            // Mask dimensions equal grid dimensions, so walkable implies
            // in bounds.
            if self.mask.is_walkable(n) {
                buf.push(n);
            }
        }
    }

    /// Width of the grid (0 when uninitialized).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid (0 when uninitialized).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether a successful [`initialize`](SearchGrid::initialize) has run
    /// since creation or the last [`reset`](SearchGrid::reset).
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The current start cell, or `None` when uninitialized.
    pub fn start(&self) -> Option<Point> {
        self.initialized.then(|| self.nodes[self.start].pos)
    }

    /// The current goal cell, or `None` when uninitialized.
    pub fn goal(&self) -> Option<Point> {
        self.initialized.then(|| self.nodes[self.goal].pos)
    }

    /// The walkability mask in use.
    pub fn mask(&self) -> &WalkMask {
        &self.mask
    }

    /// Snapshot of the search state at `p`, or `None` if out of bounds.
    pub fn node_at(&self, p: Point) -> Option<PathNode> {
        self.idx(p).map(|i| self.nodes[i].snapshot())
    }

    /// Convert a point to a flat arena index. Returns `None` out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height {
            Some(flat_index(p, self.width))
        } else {
            None
        }
    }
}

#[inline]
fn flat_index(p: Point, width: i32) -> usize {
    (p.y as usize) * (width as usize) + (p.x as usize)
}

#[inline]
fn point_at(idx: usize, width: i32) -> Point {
    let w = width as usize;
    Point::new((idx % w) as i32, (idx / w) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Endpoint, InitError};

    fn open_grid(width: i32, height: i32) -> SearchGrid {
        let mut grid = SearchGrid::new();
        grid.initialize(
            width,
            height,
            Point::new(0, 0),
            Point::new(width - 1, height - 1),
            WalkMask::new(width, height),
        )
        .unwrap();
        grid
    }

    #[test]
    fn initialize_rejects_bad_dimensions() {
        let mut grid = SearchGrid::new();
        let err = grid
            .initialize(0, 5, Point::ZERO, Point::new(1, 1), WalkMask::new(0, 5))
            .unwrap_err();
        assert_eq!(
            err,
            InitError::NonPositiveDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(!grid.is_initialized());
    }

    #[test]
    fn initialize_rejects_mismatched_mask() {
        let mut grid = SearchGrid::new();
        let err = grid
            .initialize(3, 3, Point::ZERO, Point::new(2, 2), WalkMask::new(3, 4))
            .unwrap_err();
        assert_eq!(
            err,
            InitError::MaskSizeMismatch {
                expected: (3, 3),
                actual: (3, 4)
            }
        );
    }

    #[test]
    fn initialize_rejects_out_of_bounds_endpoints() {
        let mut grid = SearchGrid::new();
        let err = grid
            .initialize(3, 3, Point::new(-1, 0), Point::new(2, 2), WalkMask::new(3, 3))
            .unwrap_err();
        assert_eq!(
            err,
            InitError::OutOfBounds {
                endpoint: Endpoint::Start,
                pos: Point::new(-1, 0)
            }
        );

        let err = grid
            .initialize(3, 3, Point::ZERO, Point::new(3, 0), WalkMask::new(3, 3))
            .unwrap_err();
        assert_eq!(
            err,
            InitError::OutOfBounds {
                endpoint: Endpoint::Goal,
                pos: Point::new(3, 0)
            }
        );
    }

    #[test]
    fn initialize_rejects_identical_endpoints() {
        let mut grid = SearchGrid::new();
        let err = grid
            .initialize(3, 3, Point::new(1, 1), Point::new(1, 1), WalkMask::new(3, 3))
            .unwrap_err();
        assert_eq!(
            err,
            InitError::StartEqualsGoal {
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn initialize_sets_positions_and_endpoints() {
        let grid = open_grid(3, 2);
        assert!(grid.is_initialized());
        assert_eq!(grid.start(), Some(Point::new(0, 0)));
        assert_eq!(grid.goal(), Some(Point::new(2, 1)));
        assert_eq!(grid.node_at(Point::new(2, 0)).unwrap().pos, Point::new(2, 0));
        assert_eq!(grid.node_at(Point::new(3, 0)), None);
    }

    #[test]
    fn neighbors_follow_left_right_up_down_order() {
        let grid = open_grid(3, 3);
        let mut buf = Vec::new();
        grid.walkable_neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2)
            ]
        );
    }

    #[test]
    fn neighbors_clip_at_borders() {
        let grid = open_grid(3, 3);
        let mut buf = Vec::new();
        grid.walkable_neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn neighbors_skip_blocked_cells() {
        let mut grid = SearchGrid::new();
        let mask = WalkMask::from_fn(3, 3, |p| p != Point::new(1, 0));
        grid.initialize(3, 3, Point::ZERO, Point::new(2, 2), mask)
            .unwrap();
        let mut buf = Vec::new();
        grid.walkable_neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![Point::new(0, 1), Point::new(2, 1), Point::new(1, 2)]
        );
    }

    #[test]
    fn set_start_out_of_range_is_a_no_op() {
        let mut grid = open_grid(3, 3);
        grid.set_start(Point::new(9, 9));
        assert_eq!(grid.start(), Some(Point::new(0, 0)));
        grid.set_start(Point::new(1, 0));
        assert_eq!(grid.start(), Some(Point::new(1, 0)));
    }

    #[test]
    fn set_goal_rescores_heuristic() {
        let mut grid = open_grid(4, 4);
        grid.set_goal(Point::new(0, 3));
        let node = grid.node_at(Point::new(0, 0)).unwrap();
        assert_eq!(node.h, 3.0);
        assert_eq!(grid.goal(), Some(Point::new(0, 3)));
    }

    #[test]
    fn reset_clears_everything() {
        let mut grid = open_grid(3, 3);
        grid.reset();
        assert!(!grid.is_initialized());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.start(), None);
        assert_eq!(grid.node_at(Point::ZERO), None);
    }
}
