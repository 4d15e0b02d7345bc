//! Gesture state machine: pointer events in, builder calls and commits out.

use crate::history::{CanvasSnapshot, HistoryManager};
use crate::path::{PathBuilder, StrokeStyle};
use crate::render::{PreviewItem, RenderModel};
use crate::shapes::{SerializableColor, ShapeBuilder, ShapeStyle};
use crate::tools::{ToolKind, ToolProfiles};
use kurbo::Point;

/// Which builder a gesture drives. Chosen at gesture start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderKind {
    /// Freehand point path.
    Path,
    /// Drag-out shape.
    Shape,
}

/// State of the gesture controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// Waiting for a gesture.
    #[default]
    Idle,
    /// A gesture is in progress.
    Drawing(BuilderKind),
}

/// Host selections read when a gesture starts or ends.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext<'a> {
    pub tool: ToolKind,
    pub color: SerializableColor,
    pub fill: Option<SerializableColor>,
    pub background: SerializableColor,
    pub profiles: &'a ToolProfiles,
    pub read_only: bool,
}

/// A record moved into the render model by a finished gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    Path(String),
    Shape(String),
}

/// Translates pointer events into builder calls and commits.
///
/// Freehand gestures capture the canvas at start and shape gestures at
/// commit. Either way history is only written when a record is committed,
/// so a gesture that never finishes leaves undo and redo untouched.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    state: GestureState,
    paths: PathBuilder,
    shapes: ShapeBuilder,
    /// Canvas as it was when the current path gesture started.
    pending_snapshot: Option<CanvasSnapshot>,
}

fn is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Check if a gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing(_))
    }

    /// Last point fed to the active builder.
    pub fn last_point(&self) -> Option<Point> {
        match self.state {
            GestureState::Drawing(BuilderKind::Path) => self.paths.points().last().copied(),
            GestureState::Drawing(BuilderKind::Shape) => self.shapes.current(),
            GestureState::Idle => None,
        }
    }

    /// Start a gesture at `point`.
    /// Returns false if the gesture was rejected.
    pub fn start(
        &mut self,
        point: Point,
        ctx: &GestureContext<'_>,
        model: &mut RenderModel,
    ) -> bool {
        if ctx.read_only {
            return false;
        }
        if !is_finite(point) {
            log::warn!("Ignoring gesture start at non-finite point {:?}", point);
            return false;
        }
        if self.is_drawing() {
            log::warn!("Gesture started without ending the previous one; discarding it");
            self.interrupt(model);
        }

        let profile = ctx.profiles.get(ctx.tool);
        match ctx.tool.shape_kind() {
            None => {
                self.pending_snapshot = Some(model.snapshot());
                self.paths
                    .begin(point, StrokeStyle::new(ctx.tool, profile, ctx.color));
                model.set_preview(self.paths.preview(ctx.background).map(PreviewItem::Path));
                self.state = GestureState::Drawing(BuilderKind::Path);
            }
            Some(kind) => {
                self.shapes
                    .begin(point, ShapeStyle::new(kind, profile, ctx.color, ctx.fill));
                model.set_preview(self.shapes.preview().map(PreviewItem::Shape));
                self.state = GestureState::Drawing(BuilderKind::Shape);
            }
        }
        log::debug!("Gesture start: {} at ({}, {})", ctx.tool, point.x, point.y);
        true
    }

    /// Feed a pointer move.
    /// Returns false if no gesture is active or the point was rejected.
    pub fn move_to(&mut self, point: Point, model: &mut RenderModel) -> bool {
        if !is_finite(point) {
            log::warn!("Ignoring non-finite gesture sample {:?}", point);
            return false;
        }
        match self.state {
            GestureState::Idle => false,
            GestureState::Drawing(BuilderKind::Path) => {
                log::trace!("Path sample ({}, {})", point.x, point.y);
                if self.paths.append(point) {
                    model.extend_preview_path(point);
                    true
                } else {
                    false
                }
            }
            GestureState::Drawing(BuilderKind::Shape) => match self.shapes.update(point) {
                Some(preview) => {
                    model.set_preview(Some(PreviewItem::Shape(preview)));
                    true
                }
                None => false,
            },
        }
    }

    /// Finish the gesture and commit its record.
    pub fn end(
        &mut self,
        background: SerializableColor,
        model: &mut RenderModel,
        history: &mut HistoryManager,
    ) -> Option<Commit> {
        let state = std::mem::take(&mut self.state);
        model.set_preview(None);
        match state {
            GestureState::Idle => None,
            GestureState::Drawing(BuilderKind::Path) => {
                let before = self.pending_snapshot.take();
                let stroke = self.paths.finish(background)?;
                let id = stroke.id.clone();
                match before {
                    Some(snapshot) => history.push(snapshot),
                    None => history.snapshot(model),
                }
                log::debug!("Committed path {} ({} points)", id, stroke.len());
                model.push_path(stroke);
                Some(Commit::Path(id))
            }
            GestureState::Drawing(BuilderKind::Shape) => {
                let release = self.shapes.current()?;
                let shape = self.shapes.finish(release)?;
                let id = shape.id.clone();
                history.snapshot(model);
                log::debug!("Committed {:?} shape {}", shape.kind, id);
                model.push_shape(shape);
                Some(Commit::Shape(id))
            }
        }
    }

    /// Discard an unfinished gesture. History is left as it was.
    /// Returns true if a gesture was discarded.
    pub fn interrupt(&mut self, model: &mut RenderModel) -> bool {
        let state = std::mem::take(&mut self.state);
        model.set_preview(None);
        match state {
            GestureState::Idle => false,
            GestureState::Drawing(BuilderKind::Path) => {
                self.paths.abandon();
                self.pending_snapshot = None;
                log::debug!("Discarded unfinished path gesture");
                true
            }
            GestureState::Drawing(BuilderKind::Shape) => {
                self.shapes.abandon();
                log::debug!("Discarded unfinished shape gesture");
                true
            }
        }
    }

    /// Re-resolve the path preview against a new background color.
    pub fn refresh_preview(&self, background: SerializableColor, model: &mut RenderModel) {
        if self.state == GestureState::Drawing(BuilderKind::Path) {
            model.set_preview(self.paths.preview(background).map(PreviewItem::Path));
        }
    }
}
