//! Line shape geometry.

use kurbo::{Line, Point};

/// The segment from anchor to release, verbatim.
pub fn line_geometry(start: Point, end: Point) -> Line {
    Line::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_verbatim() {
        let line = line_geometry(Point::new(3.0, -4.0), Point::new(-7.5, 12.0));
        assert_eq!(line.p0, Point::new(3.0, -4.0));
        assert_eq!(line.p1, Point::new(-7.5, 12.0));
    }

    #[test]
    fn test_degenerate_line() {
        let p = Point::new(5.0, 5.0);
        let line = line_geometry(p, p);
        assert!((line.p1 - line.p0).hypot() < f64::EPSILON);
    }
}
