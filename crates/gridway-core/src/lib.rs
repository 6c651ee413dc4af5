//! **gridway-core** — geometry and walkability primitives for the gridway
//! pathfinding toolkit.
//!
//! This crate provides the types shared between the search engine and its
//! hosts: the integer [`Point`] and the by-value walkability mask
//! [`WalkMask`].

pub mod geom;
pub mod mask;

pub use geom::Point;
pub use mask::WalkMask;
