//! The aggregate a renderer draws from.

use crate::history::CanvasSnapshot;
use crate::path::StrokePath;
use crate::shapes::Shape;
use kurbo::{Point, Rect};

/// The record currently being drawn, not yet committed.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewItem {
    Path(StrokePath),
    Shape(Shape),
}

impl PreviewItem {
    /// Get the bounding box of the preview.
    pub fn bounds(&self) -> Rect {
        match self {
            PreviewItem::Path(path) => path.bounds(),
            PreviewItem::Shape(shape) => shape.bounds(),
        }
    }
}

/// One entry of the draw list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawItem<'a> {
    Path(&'a StrokePath),
    Shape(&'a Shape),
    Preview(&'a PreviewItem),
}

/// Committed paths and shapes plus at most one preview item.
///
/// Draw order is fixed: all paths (oldest first), then all shapes (oldest
/// first), then the preview. Mutation is crate-private so every change goes
/// through the gesture controller or the history manager.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderModel {
    paths: Vec<StrokePath>,
    shapes: Vec<Shape>,
    preview: Option<PreviewItem>,
}

impl RenderModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model holding existing content.
    pub fn from_snapshot(snapshot: CanvasSnapshot) -> Self {
        Self {
            paths: snapshot.paths,
            shapes: snapshot.shapes,
            preview: None,
        }
    }

    /// Committed paths in insertion order.
    pub fn paths(&self) -> &[StrokePath] {
        &self.paths
    }

    /// Committed shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The in-progress item, if a gesture is active.
    pub fn preview(&self) -> Option<&PreviewItem> {
        self.preview.as_ref()
    }

    /// Everything to draw, back to front.
    pub fn draw_items(&self) -> impl Iterator<Item = DrawItem<'_>> {
        self.paths
            .iter()
            .map(DrawItem::Path)
            .chain(self.shapes.iter().map(DrawItem::Shape))
            .chain(self.preview.iter().map(DrawItem::Preview))
    }

    /// Deep copy of the committed content.
    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            paths: self.paths.clone(),
            shapes: self.shapes.clone(),
        }
    }

    /// Check if nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.shapes.is_empty()
    }

    /// Number of committed records.
    pub fn len(&self) -> usize {
        self.paths.len() + self.shapes.len()
    }

    /// Get the bounding box of all committed content.
    pub fn bounds(&self) -> Option<Rect> {
        self.paths
            .iter()
            .map(StrokePath::bounds)
            .chain(self.shapes.iter().map(Shape::bounds))
            .reduce(|acc, r| acc.union(r))
    }

    pub(crate) fn push_path(&mut self, path: StrokePath) {
        self.paths.push(path);
    }

    pub(crate) fn push_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub(crate) fn set_preview(&mut self, preview: Option<PreviewItem>) {
        self.preview = preview;
    }

    /// Append a sample to a path preview without re-cloning it.
    pub(crate) fn extend_preview_path(&mut self, point: Point) {
        if let Some(PreviewItem::Path(path)) = &mut self.preview {
            path.points.push(point);
        }
    }

    /// Replace the committed content, keeping any preview.
    pub(crate) fn restore(&mut self, snapshot: CanvasSnapshot) {
        self.paths = snapshot.paths;
        self.shapes = snapshot.shapes;
    }

    pub(crate) fn clear_content(&mut self) {
        self.paths.clear();
        self.shapes.clear();
    }
}
