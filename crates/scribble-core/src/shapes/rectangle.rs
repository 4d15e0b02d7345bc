//! Rectangle shape geometry.

use kurbo::{Point, Rect};

/// Normalized rectangle spanned by anchor and release.
///
/// The origin is always the top-left corner and width/height are never
/// negative, whichever direction the drag went.
pub fn rectangle_geometry(start: Point, end: Point) -> Rect {
    Rect::new(
        start.x.min(end.x),
        start.y.min(end.y),
        start.x.max(end.x),
        start.y.max(end.y),
    )
}
