//! The search loop: open/closed-set expansion, termination and backtrace.

use std::collections::BinaryHeap;

use gridway_core::Point;

use crate::error::{InitError, SearchError};
use crate::grid::SearchGrid;
use crate::path::Path;

/// Open-set entry ordered by lowest `f`, then earliest insertion.
///
/// An entry's `f` is fixed when it is queued and each cell is queued at most
/// once per search (cells leave the open set only by expansion), so the heap
/// never holds stale priorities. The insertion sequence number makes the
/// tie-break stable: among equal-`f` entries the first-discovered cell wins.
#[derive(Clone, Copy, PartialEq)]
struct OpenEntry {
    f: f64,
    seq: u64,
    idx: usize,
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse both keys so the max-heap pops lowest f, earliest seq.
        // f is a sum of finite non-negative terms, never NaN.
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl SearchGrid {
    /// Run the search and return the route from start to goal, inclusive.
    ///
    /// The grid moves through `Ready → Searching → PathFound | NoPathFound`:
    /// the open set starts with the start cell; each step expands the
    /// lowest-priority open cell into the closed set and discovers its
    /// walkable neighbors (left, right, up, down). Closing the goal yields
    /// the route; exhausting the open set first yields
    /// [`SearchError::NoPath`]. An uninitialized grid fails with
    /// [`SearchError::Initialization`] without searching. No partial route
    /// is ever returned.
    pub fn calculate_path(&mut self) -> Result<Path, SearchError> {
        if !self.is_initialized() {
            return Err(InitError::NotInitialized.into());
        }
        let start = self.start;
        let goal = self.goal;
        log::debug!(
            "searching {} -> {}",
            self.nodes[start].pos,
            self.nodes[goal].pos
        );

        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut in_open = vec![false; self.nodes.len()];
        let mut closed = vec![false; self.nodes.len()];
        let mut seq: u64 = 0;

        open.push(OpenEntry {
            f: self.nodes[start].f,
            seq,
            idx: start,
        });
        in_open[start] = true;

        let mut nbuf: Vec<Point> = Vec::with_capacity(4);
        let mut found = false;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            in_open[ci] = false;
            closed[ci] = true;

            if ci == goal {
                found = true;
                break;
            }

            let current_pos = self.nodes[ci].pos;
            let current_g = self.nodes[ci].g;
            log::trace!("expanding {current_pos} (f = {})", current.f);

            nbuf.clear();
            self.walkable_neighbors(current_pos, &mut nbuf);

            for &np in &nbuf {
                let Some(ni) = self.idx(np) else { continue };
                if closed[ni] {
                    continue;
                }
                if !in_open[ni] {
                    // First discovery: record the predecessor and queue the
                    // cell at its rescored priority. g stays at the sentinel
                    // until a relaxation lowers it.
                    self.nodes[ni].parent = Some(ci);
                    seq += 1;
                    open.push(OpenEntry {
                        f: self.nodes[ni].f,
                        seq,
                        idx: ni,
                    });
                    in_open[ni] = true;
                } else {
                    // Already queued: adopt the cheaper route if one opened
                    // up. The queued priority is left untouched.
                    let candidate = current_g + 1.0;
                    if candidate < self.nodes[ni].g {
                        self.nodes[ni].g = candidate;
                        self.nodes[ni].parent = Some(ci);
                    }
                }
            }
        }

        if !found {
            log::debug!("open set exhausted, no path");
            return Err(SearchError::NoPath);
        }

        // Backtrace predecessor indices from the goal, prepending as we go,
        // so the result is already ordered start-first.
        let mut route = Path::new();
        let mut ci = goal;
        loop {
            route.push_front(self.nodes[ci].snapshot());
            let Some(pi) = self.nodes[ci].parent else {
                break;
            };
            ci = pi;
            if ci == start {
                break;
            }
        }
        // The start anchors the sequence even if the chain stopped short.
        route.push_front(self.nodes[start].snapshot());

        log::debug!("path found with {} nodes", route.len());
        Ok(route)
    }
}
