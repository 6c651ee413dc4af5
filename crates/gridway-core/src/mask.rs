//! The [`WalkMask`] type — a rectangular boolean walkability mask.
//!
//! A `WalkMask` is stored by value, row-major. The search grid keeps its own
//! copy, so a host can mutate or drop its mask freely after initialization.

use crate::geom::Point;

/// A rectangular boolean walkability mask.
///
/// `true` marks a walkable cell. All accessors are bounds-checked; queries
/// outside the mask report "not walkable" rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkMask {
    cells: Vec<bool>,
    width: i32,
    height: i32,
}

impl WalkMask {
    /// Create a mask of the given dimensions with every cell walkable.
    ///
    /// Negative dimensions are clamped to zero, yielding an empty mask.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![true; (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }

    /// Build a mask from row-major rows of booleans.
    ///
    /// Returns `None` if `rows` is empty, the first row is empty, or the rows
    /// have inconsistent widths.
    pub fn from_rows(rows: &[Vec<bool>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            cells.extend_from_slice(row);
        }
        Some(Self {
            cells,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Build a mask of the given dimensions from a per-cell predicate.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn from_fn(width: i32, height: i32, walkable: impl Fn(Point) -> bool) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let mut cells = Vec::with_capacity((w as usize) * (h as usize));
        for y in 0..h {
            for x in 0..w {
                cells.push(walkable(Point::new(x, y)));
            }
        }
        Self {
            cells,
            width: w,
            height: h,
        }
    }

    /// Width of the mask.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the mask.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the mask covers no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies within the mask.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Walkability at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<bool> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.get(p).unwrap_or(false)
    }

    /// Set walkability at `p`. Out-of-bounds positions are ignored.
    pub fn set(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i] = walkable;
        }
    }
}
