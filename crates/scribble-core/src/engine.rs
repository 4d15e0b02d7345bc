//! The drawing engine aggregate and its host-facing API.

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::gesture::{Commit, GestureContext, GestureController, GestureState};
use crate::history::{CanvasSnapshot, HistoryManager};
use crate::input::{PointerButton, PointerEvent};
use crate::path::StrokePath;
use crate::render::RenderModel;
use crate::shapes::{SerializableColor, Shape};
use crate::tools::{ToolKind, ToolProfile, ToolProfiles};
use kurbo::Point;
use std::fmt;

/// Handle returned by [`DrawingEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback fired with the committed `(paths, shapes)` after every edit.
pub type ChangeListener = Box<dyn FnMut(&[StrokePath], &[Shape])>;

/// Owns the render model, the gesture session and the undo history.
///
/// Every public mutation goes through exactly one method here, and every
/// edit to committed content goes through the gesture controller or the
/// history manager.
pub struct DrawingEngine {
    model: RenderModel,
    history: HistoryManager,
    gesture: GestureController,
    profiles: ToolProfiles,
    tool: ToolKind,
    color: SerializableColor,
    fill: Option<SerializableColor>,
    background: SerializableColor,
    read_only: bool,
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_listener: u64,
}

impl fmt::Debug for DrawingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawingEngine")
            .field("model", &self.model)
            .field("history", &self.history)
            .field("gesture", &self.gesture)
            .field("tool", &self.tool)
            .field("color", &self.color)
            .field("fill", &self.fill)
            .field("background", &self.background)
            .field("read_only", &self.read_only)
            .field("listeners", &format!("<{} listeners>", self.listeners.len()))
            .finish()
    }
}

impl Default for DrawingEngine {
    fn default() -> Self {
        Self::build(
            &EngineConfig::default(),
            ToolProfiles::default(),
            RenderModel::new(),
        )
    }
}

impl DrawingEngine {
    /// Create an engine with an empty canvas.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        let profiles = config.tool_profiles()?;
        Ok(Self::build(&config, profiles, RenderModel::new()))
    }

    /// Create an engine resuming a previously saved drawing.
    pub fn with_content(config: EngineConfig, content: CanvasSnapshot) -> EngineResult<Self> {
        content.validate()?;
        let profiles = config.tool_profiles()?;
        log::debug!(
            "Resuming drawing with {} paths and {} shapes",
            content.paths.len(),
            content.shapes.len()
        );
        Ok(Self::build(&config, profiles, RenderModel::from_snapshot(content)))
    }

    /// Create an engine from a JSON `{paths, shapes}` document.
    pub fn from_json(config: EngineConfig, json: &str) -> EngineResult<Self> {
        Self::with_content(config, CanvasSnapshot::from_json(json)?)
    }

    fn build(config: &EngineConfig, profiles: ToolProfiles, model: RenderModel) -> Self {
        let tool = config.initial_tool;
        let color = profiles.get(tool).default_color;
        Self {
            model,
            history: HistoryManager::new(config.history_limit),
            gesture: GestureController::new(),
            profiles,
            tool,
            color,
            fill: None,
            background: config.background_color,
            read_only: config.read_only,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    // --- change notification ---

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&[StrokePath], &[Shape]) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a change listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let paths = self.model.paths();
        let shapes = self.model.shapes();
        for (_, listener) in self.listeners.iter_mut() {
            listener(paths, shapes);
        }
    }

    // --- host selections ---

    /// Enable or disable gesture handling. The flag is checked when a
    /// gesture starts; a gesture already in progress runs to completion.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Select a tool and reset the active color to its default.
    /// A gesture already in progress keeps the tool it started with.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.color = self.profiles.get(tool).default_color;
        log::debug!("Tool selected: {}", tool);
    }

    /// Select a tool by its string id.
    pub fn set_tool_by_id(&mut self, id: &str) -> EngineResult<()> {
        let tool = id.parse()?;
        self.set_tool(tool);
        Ok(())
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Profile of the selected tool.
    pub fn tool_profile(&self) -> &ToolProfile {
        self.profiles.get(self.tool)
    }

    pub fn tool_profiles(&self) -> &ToolProfiles {
        &self.profiles
    }

    /// Set the stroke color for the next gesture.
    pub fn set_color(&mut self, color: SerializableColor) {
        self.color = color;
    }

    /// Set the stroke color from a `#rrggbb`-style code.
    pub fn set_color_hex(&mut self, code: &str) -> EngineResult<()> {
        self.color = SerializableColor::from_hex(code)?;
        Ok(())
    }

    pub fn color(&self) -> SerializableColor {
        self.color
    }

    /// Set the fill applied to the next rectangle or circle.
    pub fn set_fill(&mut self, fill: Option<SerializableColor>) {
        self.fill = fill;
    }

    pub fn fill(&self) -> Option<SerializableColor> {
        self.fill
    }

    /// Change the canvas background. Eraser strokes still in progress pick
    /// up the new color.
    pub fn set_background_color(&mut self, color: SerializableColor) {
        self.background = color;
        self.gesture.refresh_preview(color, &mut self.model);
    }

    pub fn background_color(&self) -> SerializableColor {
        self.background
    }

    // --- gestures ---

    /// Pointer pressed.
    /// Returns true if a gesture started.
    pub fn on_gesture_start(&mut self, point: Point) -> bool {
        let ctx = GestureContext {
            tool: self.tool,
            color: self.color,
            fill: self.fill,
            background: self.background,
            profiles: &self.profiles,
            read_only: self.read_only,
        };
        self.gesture.start(point, &ctx, &mut self.model)
    }

    /// Pointer moved while pressed.
    pub fn on_gesture_move(&mut self, point: Point) -> bool {
        self.gesture.move_to(point, &mut self.model)
    }

    /// Pointer released. Commits the gesture's record and notifies
    /// listeners.
    pub fn on_gesture_end(&mut self) -> Option<Commit> {
        let commit = self
            .gesture
            .end(self.background, &mut self.model, &mut self.history)?;
        self.notify();
        Some(commit)
    }

    /// The host lost input focus; drop any unfinished gesture.
    pub fn on_focus_lost(&mut self) -> bool {
        self.gesture.interrupt(&mut self.model)
    }

    /// Adapt a unified pointer event to the gesture callbacks.
    ///
    /// A release at a new position is first delivered as a move so the
    /// final sample is not lost. Non-primary buttons are ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<Commit> {
        match event {
            PointerEvent::Down { position, button } => {
                if button == PointerButton::Primary {
                    self.on_gesture_start(position);
                }
                None
            }
            PointerEvent::Move { position } => {
                self.on_gesture_move(position);
                None
            }
            PointerEvent::Up { position, button } => {
                if button != PointerButton::Primary {
                    return None;
                }
                if self.gesture.is_drawing() && self.gesture.last_point() != Some(position) {
                    self.on_gesture_move(position);
                }
                self.on_gesture_end()
            }
            PointerEvent::Cancel => {
                self.on_focus_lost();
                None
            }
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_drawing()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture.state()
    }

    // --- history ---

    /// Undo the last edit. Returns false (and does nothing) if there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.gesture.interrupt(&mut self.model);
        if !self.history.undo(&mut self.model) {
            return false;
        }
        self.notify();
        true
    }

    /// Redo the last undone edit. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.gesture.interrupt(&mut self.model);
        if !self.history.redo(&mut self.model) {
            return false;
        }
        self.notify();
        true
    }

    /// Erase everything as a single undoable edit.
    pub fn clear(&mut self) {
        self.gesture.interrupt(&mut self.model);
        self.history.clear(&mut self.model);
        log::debug!("Canvas cleared");
        self.notify();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    // --- content ---

    pub fn render_model(&self) -> &RenderModel {
        &self.model
    }

    pub fn paths(&self) -> &[StrokePath] {
        self.model.paths()
    }

    pub fn shapes(&self) -> &[Shape] {
        self.model.shapes()
    }

    /// Deep copy of the committed `{paths, shapes}`.
    pub fn content(&self) -> CanvasSnapshot {
        self.model.snapshot()
    }

    /// Serialize the committed content to JSON.
    pub fn to_json(&self) -> EngineResult<String> {
        self.content().to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::gesture::BuilderKind;
    use crate::render::{DrawItem, PreviewItem};
    use crate::shapes::ShapeKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn draw_path(engine: &mut DrawingEngine, points: &[Point]) {
        engine.set_tool(ToolKind::Pen);
        engine.on_gesture_start(points[0]);
        for point in &points[1..] {
            engine.on_gesture_move(*point);
        }
        engine.on_gesture_end();
    }

    fn draw_shape(engine: &mut DrawingEngine, tool: ToolKind, from: Point, to: Point) {
        engine.set_tool(tool);
        engine.on_gesture_start(from);
        engine.on_gesture_move(to);
        engine.on_gesture_end();
    }

    fn counter(engine: &mut DrawingEngine) -> Rc<RefCell<Vec<(usize, usize)>>> {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        engine.subscribe(move |paths, shapes| sink.borrow_mut().push((paths.len(), shapes.len())));
        calls
    }

    #[test]
    fn test_end_to_end_undo_redo() {
        init_logger();
        let mut engine = DrawingEngine::default();
        draw_path(&mut engine, &[p(0.0, 0.0), p(5.0, 5.0), p(10.0, 0.0)]);
        draw_shape(&mut engine, ToolKind::Rectangle, p(0.0, 0.0), p(20.0, 10.0));
        let p1 = engine.paths()[0].clone();
        let s1 = engine.shapes()[0].clone();
        assert_eq!(p1.len(), 3);

        assert!(engine.undo());
        assert_eq!(engine.paths(), &[p1.clone()]);
        assert!(engine.shapes().is_empty());

        assert!(engine.undo());
        assert!(engine.render_model().is_empty());

        assert!(engine.redo());
        assert!(engine.redo());
        let order: Vec<String> = engine
            .render_model()
            .draw_items()
            .map(|item| match item {
                DrawItem::Path(path) => path.id.clone(),
                DrawItem::Shape(shape) => shape.id.clone(),
                DrawItem::Preview(_) => unreachable!("no gesture in progress"),
            })
            .collect();
        assert_eq!(order, vec![p1.id, s1.id.clone()]);
        assert_eq!(engine.shapes()[0], s1);
    }

    #[test]
    fn test_history_capped_after_25_commits() {
        let mut engine = DrawingEngine::default();
        for i in 0..25 {
            let x = i as f64;
            draw_path(&mut engine, &[p(x, 0.0), p(x, 10.0)]);
        }
        assert_eq!(engine.history().undo_len(), 20);
        while engine.undo() {}
        assert_eq!(engine.paths().len(), 5);
    }

    #[test]
    fn test_undo_redo_cycles_identical() {
        let mut engine = DrawingEngine::default();
        draw_path(&mut engine, &[p(0.0, 0.0), p(1.0, 1.0)]);
        draw_shape(&mut engine, ToolKind::Circle, p(5.0, 5.0), p(8.0, 9.0));
        let before = engine.content();
        for _ in 0..10 {
            assert!(engine.undo());
            assert!(engine.redo());
            assert_eq!(engine.content(), before);
        }
    }

    #[test]
    fn test_commit_after_undo_flushes_redo() {
        let mut engine = DrawingEngine::default();
        draw_path(&mut engine, &[p(0.0, 0.0)]);
        draw_path(&mut engine, &[p(1.0, 1.0)]);
        assert!(engine.undo());
        draw_path(&mut engine, &[p(2.0, 2.0)]);
        let before = engine.content();
        assert!(!engine.can_redo());
        assert!(!engine.redo());
        assert_eq!(engine.content(), before);
    }

    #[test]
    fn test_read_only_blocks_gestures() {
        let mut engine = DrawingEngine::default();
        let calls = counter(&mut engine);
        engine.set_read_only(true);
        for tool in [ToolKind::Pen, ToolKind::Arrow] {
            engine.set_tool(tool);
            assert!(!engine.on_gesture_start(p(0.0, 0.0)));
            assert!(!engine.on_gesture_move(p(10.0, 10.0)));
            assert!(engine.on_gesture_end().is_none());
            assert_eq!(engine.gesture_state(), GestureState::Idle);
        }
        assert!(engine.render_model().is_empty());
        assert!(!engine.can_undo());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_read_only_set_mid_gesture_lets_it_finish() {
        let mut engine = DrawingEngine::default();
        engine.on_gesture_start(p(0.0, 0.0));
        engine.on_gesture_move(p(3.0, 3.0));
        engine.set_read_only(true);
        assert!(engine.is_drawing());
        assert!(engine.on_gesture_move(p(6.0, 0.0)));
        assert!(matches!(engine.on_gesture_end(), Some(Commit::Path(_))));
        assert_eq!(engine.paths()[0].len(), 3);
        assert_eq!(engine.history().undo_len(), 1);

        // The next gesture is refused.
        assert!(!engine.on_gesture_start(p(1.0, 1.0)));
        assert_eq!(engine.paths().len(), 1);
    }

    #[test]
    fn test_notifications() {
        let mut engine = DrawingEngine::default();
        let calls = counter(&mut engine);

        draw_path(&mut engine, &[p(0.0, 0.0), p(1.0, 0.0)]);
        draw_shape(&mut engine, ToolKind::Line, p(0.0, 0.0), p(1.0, 1.0));
        engine.undo();
        engine.redo();
        engine.clear();
        // No-op undo/redo stay silent.
        engine.redo();

        assert_eq!(
            *calls.borrow(),
            vec![(1, 0), (1, 1), (1, 0), (1, 1), (0, 0)]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut engine = DrawingEngine::default();
        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);
        let id = engine.subscribe(move |_, _| *sink.borrow_mut() += 1);
        draw_path(&mut engine, &[p(0.0, 0.0)]);
        assert!(engine.unsubscribe(id));
        assert!(!engine.unsubscribe(id));
        draw_path(&mut engine, &[p(1.0, 0.0)]);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut engine = DrawingEngine::default();
        draw_path(&mut engine, &[p(0.0, 0.0), p(4.0, 4.0)]);
        draw_shape(&mut engine, ToolKind::Arrow, p(0.0, 0.0), p(50.0, 0.0));
        engine.clear();
        assert!(engine.render_model().is_empty());
        assert!(engine.undo());
        assert_eq!(engine.render_model().len(), 2);
    }

    #[test]
    fn test_tool_fixed_for_gesture() {
        let mut engine = DrawingEngine::default();
        engine.set_tool(ToolKind::Rectangle);
        engine.on_gesture_start(p(0.0, 0.0));
        engine.set_tool(ToolKind::Pen);
        engine.on_gesture_move(p(10.0, 10.0));
        assert_eq!(engine.gesture_state(), GestureState::Drawing(BuilderKind::Shape));
        engine.on_gesture_end();
        assert_eq!(engine.shapes().len(), 1);
        assert!(engine.paths().is_empty());
    }

    #[test]
    fn test_set_tool_resets_color() {
        let mut engine = DrawingEngine::default();
        engine.set_color_hex("#ff0000").unwrap();
        assert_eq!(engine.color(), SerializableColor::rgb(255, 0, 0));
        engine.set_tool(ToolKind::Highlighter);
        assert_eq!(engine.color(), engine.tool_profile().default_color);
        assert!(matches!(
            engine.set_color_hex("crimson"),
            Err(EngineError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_set_tool_by_unknown_id_fails() {
        let mut engine = DrawingEngine::default();
        engine.set_tool_by_id("circle").unwrap();
        assert_eq!(engine.tool(), ToolKind::Circle);
        let err = engine.set_tool_by_id("polygon").unwrap_err();
        assert!(matches!(err, EngineError::UnknownTool(_)));
        assert_eq!(engine.tool(), ToolKind::Circle);
    }

    #[test]
    fn test_eraser_uses_background_at_commit() {
        let mut engine = DrawingEngine::default();
        engine.set_tool(ToolKind::Eraser);
        engine.on_gesture_start(p(0.0, 0.0));
        engine.on_gesture_move(p(10.0, 0.0));
        let cream = SerializableColor::rgb(250, 245, 230);
        engine.set_background_color(cream);
        match engine.render_model().preview() {
            Some(PreviewItem::Path(path)) => {
                assert_eq!(path.color, cream);
                assert_eq!(path.len(), 2);
            }
            other => panic!("unexpected preview {other:?}"),
        }
        engine.on_gesture_end();
        let stroke = &engine.paths()[0];
        assert_eq!(stroke.tool, ToolKind::Eraser);
        assert_eq!(stroke.color, cream);
        assert_eq!(stroke.width, 20.0);
    }

    #[test]
    fn test_fill_applied_to_closed_shapes() {
        let mut engine = DrawingEngine::default();
        let blue = SerializableColor::rgb(0, 0, 255);
        engine.set_fill(Some(blue));
        draw_shape(&mut engine, ToolKind::Circle, p(0.0, 0.0), p(3.0, 4.0));
        draw_shape(&mut engine, ToolKind::Line, p(0.0, 0.0), p(3.0, 4.0));
        assert_eq!(engine.shapes()[0].fill, Some(blue));
        assert_eq!(engine.shapes()[1].fill, None);
    }

    #[test]
    fn test_focus_lost_discards_orphan() {
        let mut engine = DrawingEngine::default();
        draw_path(&mut engine, &[p(0.0, 0.0)]);
        engine.on_gesture_start(p(5.0, 5.0));
        engine.on_gesture_move(p(6.0, 6.0));
        assert!(engine.on_focus_lost());
        assert!(engine.render_model().preview().is_none());
        assert_eq!(engine.paths().len(), 1);
        assert_eq!(engine.history().undo_len(), 1);
        assert!(engine.undo());
        assert!(engine.render_model().is_empty());
    }

    #[test]
    fn test_abandoned_stroke_keeps_redo() {
        let mut engine = DrawingEngine::default();
        draw_path(&mut engine, &[p(0.0, 0.0)]);
        draw_path(&mut engine, &[p(1.0, 1.0)]);
        assert!(engine.undo());

        engine.on_gesture_start(p(5.0, 5.0));
        engine.on_gesture_move(p(6.0, 6.0));
        assert!(engine.on_focus_lost());

        assert!(engine.can_redo());
        assert_eq!(engine.history().undo_len(), 1);
        assert!(engine.redo());
        assert_eq!(engine.paths().len(), 2);
    }

    #[test]
    fn test_abandoned_stroke_at_capacity_keeps_oldest() {
        let mut engine = DrawingEngine::default();
        for i in 0..20 {
            draw_path(&mut engine, &[p(i as f64, 0.0)]);
        }
        engine.handle_pointer(PointerEvent::down(50.0, 50.0));
        engine.handle_pointer(PointerEvent::moved(60.0, 60.0));
        engine.handle_pointer(PointerEvent::Cancel);

        assert_eq!(engine.history().undo_len(), 20);
        while engine.undo() {}
        assert!(engine.render_model().is_empty());
    }

    #[test]
    fn test_undo_during_gesture_discards_it() {
        let mut engine = DrawingEngine::default();
        draw_path(&mut engine, &[p(0.0, 0.0)]);
        engine.on_gesture_start(p(5.0, 5.0));
        assert!(engine.undo());
        assert!(!engine.is_drawing());
        assert!(engine.render_model().is_empty());
        assert!(engine.redo());
        assert_eq!(engine.paths().len(), 1);
    }

    #[test]
    fn test_pointer_adapter() {
        let mut engine = DrawingEngine::default();
        assert!(engine.handle_pointer(PointerEvent::down(0.0, 0.0)).is_none());
        engine.handle_pointer(PointerEvent::moved(5.0, 5.0));
        let commit = engine.handle_pointer(PointerEvent::up(9.0, 9.0));
        assert!(matches!(commit, Some(Commit::Path(_))));
        assert_eq!(engine.paths()[0].points, vec![p(0.0, 0.0), p(5.0, 5.0), p(9.0, 9.0)]);

        // Release at the last sample adds nothing.
        engine.handle_pointer(PointerEvent::down(1.0, 1.0));
        engine.handle_pointer(PointerEvent::up(1.0, 1.0));
        assert!(engine.paths()[1].is_dot());

        // Secondary button never draws.
        engine.handle_pointer(PointerEvent::Down {
            position: p(0.0, 0.0),
            button: PointerButton::Secondary,
        });
        assert!(!engine.is_drawing());

        engine.handle_pointer(PointerEvent::down(2.0, 2.0));
        engine.handle_pointer(PointerEvent::Cancel);
        assert!(!engine.is_drawing());
        assert_eq!(engine.paths().len(), 2);
    }

    #[test]
    fn test_shape_released_via_pointer_adapter() {
        let mut engine = DrawingEngine::default();
        engine.set_tool(ToolKind::Rectangle);
        engine.handle_pointer(PointerEvent::down(50.0, 50.0));
        engine.handle_pointer(PointerEvent::up(10.0, 10.0));
        let shape = &engine.shapes()[0];
        assert_eq!(shape.kind, ShapeKind::Rectangle);
        assert_eq!(shape.end, p(10.0, 10.0));
    }

    #[test]
    fn test_resume_and_persist() {
        let mut engine = DrawingEngine::default();
        draw_path(&mut engine, &[p(0.0, 0.0), p(1.0, 2.0)]);
        draw_shape(&mut engine, ToolKind::Arrow, p(0.0, 0.0), p(100.0, 0.0));
        let json = engine.to_json().unwrap();

        let mut resumed = DrawingEngine::from_json(EngineConfig::default(), &json).unwrap();
        assert_eq!(resumed.content(), engine.content());
        assert!(!resumed.can_undo());

        draw_path(&mut resumed, &[p(7.0, 7.0)]);
        assert_eq!(resumed.paths().len(), 2);
        assert!(resumed.undo());
        assert_eq!(resumed.content(), engine.content());
    }

    #[test]
    fn test_with_content_rejects_invalid() {
        let mut content = CanvasSnapshot::default();
        let mut engine = DrawingEngine::default();
        draw_path(&mut engine, &[p(0.0, 0.0)]);
        content.paths = engine.paths().to_vec();
        content.paths[0].points.clear();
        assert!(matches!(
            DrawingEngine::with_content(EngineConfig::default(), content),
            Err(EngineError::InvalidContent(_))
        ));
    }

    #[test]
    fn test_config_applied() {
        let config = EngineConfig::from_json(
            r##"{ "history_limit": 2, "initial_tool": "marker", "background_color": "#000000" }"##,
        )
        .unwrap();
        let mut engine = DrawingEngine::new(config).unwrap();
        assert_eq!(engine.tool(), ToolKind::Marker);
        assert_eq!(engine.background_color(), SerializableColor::black());
        for i in 0..4 {
            draw_path(&mut engine, &[p(i as f64, 0.0)]);
        }
        assert_eq!(engine.history().undo_len(), 2);
    }
}
