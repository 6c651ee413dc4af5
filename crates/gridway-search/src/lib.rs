//! **gridway-search** — heuristic-guided shortest-path search over 2D
//! walkability grids.
//!
//! The engine computes a shortest 4-connected, unit-cost path between two
//! cells of a [`WalkMask`](gridway_core::WalkMask). A host configures a
//! [`SearchGrid`] with dimensions, mask and endpoints, then calls
//! [`SearchGrid::calculate_path`] and consumes the returned [`Path`]:
//!
//! ```
//! use gridway_core::{Point, WalkMask};
//! use gridway_search::SearchGrid;
//!
//! let mut grid = SearchGrid::new();
//! grid.initialize(4, 4, Point::new(0, 0), Point::new(3, 3), WalkMask::new(4, 4))?;
//! let path = grid.calculate_path()?;
//! assert_eq!(path.first().map(|n| n.pos), Some(Point::new(0, 0)));
//! assert_eq!(path.last().map(|n| n.pos), Some(Point::new(3, 3)));
//! # Ok::<(), gridway_search::SearchError>(())
//! ```
//!
//! Failures are typed: [`SearchError::Initialization`] when the grid is not
//! (validly) configured, [`SearchError::NoPath`] when start and goal are
//! disconnected. A failed search never yields a partial path.
//!
//! Note that [`SearchGrid::set_start`] and [`SearchGrid::set_goal`] are
//! deliberately permissive: out-of-range positions are silently ignored,
//! unlike the strict validation performed by [`SearchGrid::initialize`].

mod astar;
mod distance;
mod error;
mod grid;
mod node;
mod path;
mod scoring;

pub use distance::{euclidean, manhattan};
pub use error::{Endpoint, InitError, SearchError};
pub use grid::SearchGrid;
pub use node::{PathNode, SENTINEL_COST};
pub use path::Path;
