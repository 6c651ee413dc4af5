use gridway_core::Point;

/// Euclidean (L2) distance between two points.
///
/// This is the search heuristic: straight-line distance never overestimates
/// the true cost of a unit-cost 4-connected walk (admissible).
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan (L1) distance between two points.
///
/// Equals the step count of a shortest unobstructed 4-connected walk.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_axis_aligned() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(6, 0)), 6.0);
        assert_eq!(euclidean(Point::new(2, 5), Point::new(2, 1)), 4.0);
    }

    #[test]
    fn euclidean_diagonal() {
        let d = euclidean(Point::new(0, 0), Point::new(3, 4));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn manhattan_sums_axes() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(-1, 2), Point::new(1, -2)), 6);
    }

    #[test]
    fn euclidean_lower_bounds_manhattan() {
        let a = Point::new(1, 1);
        let b = Point::new(5, 4);
        assert!(euclidean(a, b) <= manhattan(a, b) as f64);
    }
}
