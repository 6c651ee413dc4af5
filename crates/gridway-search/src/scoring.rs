//! Score maintenance: the full-sweep rescore run on initialization and
//! whenever an endpoint moves.
//!
//! The sweep establishes, for every cell, the heuristic `h` (Euclidean
//! distance to the goal), the "unreached" cost-so-far sentinel `g`, and the
//! combined priority `f`. It never runs during a search; the search loop
//! lowers `g` and rewires predecessors incrementally as cells are actually
//! reached.

use crate::distance::euclidean;
use crate::grid::SearchGrid;
use crate::node::SENTINEL_COST;

impl SearchGrid {
    /// Recompute `h`, `g` and `f` for every cell against the current goal
    /// and mask, clearing predecessors.
    pub(crate) fn rescore(&mut self) {
        self.rescore_h();
        self.rescore_g();
        self.rescore_f();
    }

    /// `h` = straight-line distance from each cell to the goal.
    fn rescore_h(&mut self) {
        let goal = self.nodes[self.goal].pos;
        for node in &mut self.nodes {
            node.h = euclidean(node.pos, goal);
        }
    }

    /// Every cell starts the next search unreached; only the search loop
    /// lowers `g` as cells are discovered. No cost propagation happens here.
    fn rescore_g(&mut self) {
        for node in &mut self.nodes {
            node.g = SENTINEL_COST;
            node.parent = None;
        }
    }

    /// `f = g + h` for walkable cells; blocked cells are pinned at the
    /// sentinel so they never win an expansion over a reachable cell.
    fn rescore_f(&mut self) {
        for i in 0..self.nodes.len() {
            let walkable = self.mask.is_walkable(self.nodes[i].pos);
            let node = &mut self.nodes[i];
            node.f = if walkable { node.g + node.h } else { SENTINEL_COST };
        }
    }
}

#[cfg(test)]
mod tests {
    use gridway_core::{Point, WalkMask};

    use crate::SearchGrid;
    use crate::node::SENTINEL_COST;

    fn scored_grid() -> SearchGrid {
        let mut grid = SearchGrid::new();
        let mask = WalkMask::from_fn(4, 3, |p| p != Point::new(2, 1));
        grid.initialize(4, 3, Point::new(0, 0), Point::new(3, 0), mask)
            .unwrap();
        grid
    }

    #[test]
    fn heuristic_is_euclidean_to_goal() {
        let grid = scored_grid();
        assert_eq!(grid.node_at(Point::new(3, 0)).unwrap().h, 0.0);
        assert_eq!(grid.node_at(Point::new(0, 0)).unwrap().h, 3.0);
        let diag = grid.node_at(Point::new(0, 2)).unwrap().h;
        assert!((diag - (9.0f64 + 4.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn cost_so_far_starts_at_sentinel_everywhere() {
        let grid = scored_grid();
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.node_at(Point::new(x, y)).unwrap().g, SENTINEL_COST);
            }
        }
    }

    #[test]
    fn priority_is_g_plus_h_for_walkable_cells() {
        let grid = scored_grid();
        let node = grid.node_at(Point::new(1, 0)).unwrap();
        assert_eq!(node.f, node.g + node.h);
        assert_eq!(node.f, SENTINEL_COST + 2.0);
    }

    #[test]
    fn blocked_cells_are_pinned_at_the_sentinel() {
        let grid = scored_grid();
        let blocked = grid.node_at(Point::new(2, 1)).unwrap();
        assert_eq!(blocked.f, SENTINEL_COST);
        // Strictly below every walkable cell except the goal itself.
        let goal = grid.node_at(Point::new(3, 0)).unwrap();
        assert_eq!(goal.f, SENTINEL_COST);
        // And blocked cells are never offered for expansion at all.
        let mut buf = Vec::new();
        grid.walkable_neighbors(Point::new(2, 0), &mut buf);
        assert!(!buf.contains(&Point::new(2, 1)));
        buf.clear();
        grid.walkable_neighbors(Point::new(2, 2), &mut buf);
        assert!(!buf.contains(&Point::new(2, 1)));
    }

    #[test]
    fn moving_the_goal_recomputes_scores() {
        let mut grid = scored_grid();
        grid.set_goal(Point::new(0, 2));
        let corner = grid.node_at(Point::new(0, 2)).unwrap();
        assert_eq!(corner.h, 0.0);
        assert_eq!(corner.g, SENTINEL_COST);
    }
}
