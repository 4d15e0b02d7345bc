//! Drag-to-shape construction.

use super::{SerializableColor, Shape, ShapeKind};
use crate::id::{generate_id, now_millis};
use crate::path::PREVIEW_ID;
use crate::tools::ToolProfile;
use kurbo::Point;

/// Style captured when a shape gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub kind: ShapeKind,
    pub stroke_color: SerializableColor,
    pub stroke_width: f64,
    pub fill: Option<SerializableColor>,
}

impl ShapeStyle {
    /// Style for a shape drawn with the active color and fill.
    /// Fill only applies to closed outlines.
    pub fn new(
        kind: ShapeKind,
        profile: &ToolProfile,
        color: SerializableColor,
        fill: Option<SerializableColor>,
    ) -> Self {
        Self {
            kind,
            stroke_color: color,
            stroke_width: profile.stroke_width,
            fill: fill.filter(|_| kind.is_closed()),
        }
    }
}

#[derive(Debug, Clone)]
struct ShapeDraft {
    anchor: Point,
    current: Point,
    style: ShapeStyle,
}

impl ShapeDraft {
    fn to_shape(&self, id: String, end: Point, created_at: u64) -> Shape {
        Shape {
            id,
            kind: self.style.kind,
            start: self.anchor,
            end,
            stroke_color: self.style.stroke_color,
            stroke_width: self.style.stroke_width,
            fill: self.style.fill,
            created_at,
        }
    }
}

/// Builds one [`Shape`] from a drag's anchor and release points.
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder {
    draft: Option<ShapeDraft>,
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the anchor. Any unfinished draft is dropped.
    pub fn begin(&mut self, point: Point, style: ShapeStyle) {
        self.draft = Some(ShapeDraft {
            anchor: point,
            current: point,
            style,
        });
    }

    /// Move the candidate release point and return the new preview.
    pub fn update(&mut self, point: Point) -> Option<Shape> {
        let draft = self.draft.as_mut()?;
        draft.current = point;
        self.preview()
    }

    /// Produce the committed shape released at `point` and return to idle.
    pub fn finish(&mut self, point: Point) -> Option<Shape> {
        let draft = self.draft.take()?;
        let created_at = now_millis();
        Some(draft.to_shape(generate_id("shape", created_at), point, created_at))
    }

    /// Drop the draft without producing a shape.
    /// Returns true if there was one.
    pub fn abandon(&mut self) -> bool {
        self.draft.take().is_some()
    }

    /// Check if a shape is being dragged.
    pub fn is_active(&self) -> bool {
        self.draft.is_some()
    }

    /// Last point passed to `begin` or `update`.
    pub fn current(&self) -> Option<Point> {
        self.draft.as_ref().map(|d| d.current)
    }

    /// The shape as it would be committed at the current point.
    pub fn preview(&self) -> Option<Shape> {
        let draft = self.draft.as_ref()?;
        Some(draft.to_shape(PREVIEW_ID.to_string(), draft.current, 0))
    }
}
