//! Arrow shape geometry.

use kurbo::{BezPath, Line, Point, Rect, Shape as KurboShape};

/// Length of each arrowhead wing, in canvas units. Not scaled by zoom.
pub const ARROW_WING_LENGTH: f64 = 15.0;

/// Angle between each wing and the reversed shaft direction.
pub const ARROW_WING_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Shaft plus the two arrowhead wings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    /// Main segment from anchor to tip.
    pub shaft: Line,
    /// Wing segments, each starting at the tip.
    pub wings: [Line; 2],
}

impl ArrowGeometry {
    /// Tip of the arrow (the release point).
    pub fn tip(&self) -> Point {
        self.shaft.p1
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.shaft.p0);
        path.line_to(self.shaft.p1);
        for wing in &self.wings {
            path.move_to(wing.p0);
            path.line_to(wing.p1);
        }
        path
    }

    /// Bounding box including both wings.
    pub fn bounds(&self) -> Rect {
        self.wings
            .iter()
            .fold(self.shaft.bounding_box(), |acc, wing| {
                acc.union(wing.bounding_box())
            })
    }
}

/// Compute the arrow for a drag from `start` to `end`.
///
/// Wings hang off the tip at `atan2(end - start) ± 30°` measured from the
/// reverse direction. A zero-length arrow keeps the `atan2(0, 0) = 0`
/// orientation so the record stays well-formed.
pub fn arrow_geometry(start: Point, end: Point) -> ArrowGeometry {
    let angle = (end.y - start.y).atan2(end.x - start.x);
    let wing = |offset: f64| {
        let theta = angle + offset;
        let tail = Point::new(
            end.x - ARROW_WING_LENGTH * theta.cos(),
            end.y - ARROW_WING_LENGTH * theta.sin(),
        );
        Line::new(end, tail)
    };

    ArrowGeometry {
        shaft: Line::new(start, end),
        wings: [wing(-ARROW_WING_ANGLE), wing(ARROW_WING_ANGLE)],
    }
}
