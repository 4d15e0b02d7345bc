//! Circle shape geometry.

use kurbo::{Circle, Point};

/// Circle dragged out from its center: the anchor is the center and the
/// release point lies on the circumference.
pub fn circle_geometry(start: Point, end: Point) -> Circle {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    Circle::new(start, (dx * dx + dy * dy).sqrt())
}
