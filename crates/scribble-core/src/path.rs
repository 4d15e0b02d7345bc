//! Freehand stroke records and the builder that accumulates them.

use crate::id::{generate_id, now_millis};
use crate::shapes::SerializableColor;
use crate::tools::{Ink, ToolKind, ToolProfile};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// Id carried by in-progress preview records.
pub const PREVIEW_ID: &str = "preview";

/// A committed freehand stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokePath {
    /// Unique identifier.
    pub id: String,
    /// Samples in input order. Never empty.
    pub points: Vec<Point>,
    /// Resolved stroke color.
    pub color: SerializableColor,
    /// Stroke width.
    pub width: f64,
    /// Stroke opacity.
    pub opacity: f64,
    /// Tool that drew the stroke.
    pub tool: ToolKind,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: u64,
}

impl StrokePath {
    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A tap: one sample, no segments. Renderers usually draw it as a dot.
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    /// Get the path representation for rendering.
    ///
    /// A single-point stroke becomes a zero-length segment so that round
    /// caps still paint a dot.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.points.first() else {
            return path;
        };
        path.move_to(*first);
        if self.is_dot() {
            path.line_to(*first);
        }
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }
        path
    }

    /// SVG path-command encoding (`M x y L x y ...`).
    pub fn path_data(&self) -> String {
        self.to_path().to_svg()
    }

    /// Get the bounding box of the samples.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }
}

/// Style captured when a freehand gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub tool: ToolKind,
    pub ink: Ink,
    pub width: f64,
    pub opacity: f64,
}

impl StrokeStyle {
    /// Style for `tool` drawing with the active color.
    pub fn new(tool: ToolKind, profile: &ToolProfile, color: SerializableColor) -> Self {
        Self {
            tool,
            ink: tool.ink(color),
            width: profile.stroke_width,
            opacity: profile.opacity,
        }
    }
}

#[derive(Debug, Clone)]
struct PathDraft {
    points: Vec<Point>,
    style: StrokeStyle,
}

/// Accumulates pointer samples into a [`StrokePath`].
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    draft: Option<PathDraft>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a path anchored at `point`. Any unfinished draft is dropped.
    pub fn begin(&mut self, point: Point, style: StrokeStyle) {
        self.draft = Some(PathDraft {
            points: vec![point],
            style,
        });
    }

    /// Extend the path with a segment to `point`.
    /// Returns false if no path is open.
    pub fn append(&mut self, point: Point) -> bool {
        match &mut self.draft {
            Some(draft) => {
                draft.points.push(point);
                true
            }
            None => false,
        }
    }

    /// Seal the open path into a stroke with a fresh id and return to idle.
    ///
    /// Background-dependent ink is resolved against `background` here, not
    /// at [`PathBuilder::begin`].
    pub fn finish(&mut self, background: SerializableColor) -> Option<StrokePath> {
        let draft = self.draft.take()?;
        let created_at = now_millis();
        Some(StrokePath {
            id: generate_id("path", created_at),
            points: draft.points,
            color: draft.style.ink.resolve(background),
            width: draft.style.width,
            opacity: draft.style.opacity,
            tool: draft.style.tool,
            created_at,
        })
    }

    /// Drop the open path without producing a stroke.
    /// Returns true if there was one.
    pub fn abandon(&mut self) -> bool {
        self.draft.take().is_some()
    }

    /// Check if a path is open.
    pub fn is_active(&self) -> bool {
        self.draft.is_some()
    }

    /// Samples accumulated so far.
    pub fn points(&self) -> &[Point] {
        self.draft.as_ref().map(|d| d.points.as_slice()).unwrap_or(&[])
    }

    /// Style of the open path.
    pub fn style(&self) -> Option<&StrokeStyle> {
        self.draft.as_ref().map(|d| &d.style)
    }

    /// Snapshot of the open path for live rendering.
    pub fn preview(&self, background: SerializableColor) -> Option<StrokePath> {
        let draft = self.draft.as_ref()?;
        Some(StrokePath {
            id: PREVIEW_ID.to_string(),
            points: draft.points.clone(),
            color: draft.style.ink.resolve(background),
            width: draft.style.width,
            opacity: draft.style.opacity,
            tool: draft.style.tool,
            created_at: 0,
        })
    }
}
