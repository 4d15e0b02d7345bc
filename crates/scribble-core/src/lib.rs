//! Scribble Core Library
//!
//! Platform-agnostic drawing engine for the scribble canvas: freehand strokes,
//! drag-out shapes, bounded undo/redo and a render model for the host view.

pub mod config;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod history;
pub mod id;
pub mod input;
pub mod path;
pub mod render;
pub mod shapes;
pub mod tools;

pub use config::EngineConfig;
pub use engine::{ChangeListener, DrawingEngine, ListenerId};
pub use error::{EngineError, EngineResult};
pub use gesture::{BuilderKind, Commit, GestureContext, GestureController, GestureState};
pub use history::{CanvasSnapshot, DEFAULT_HISTORY_LIMIT, HistoryManager};
pub use input::{PointerButton, PointerEvent};
pub use path::{PREVIEW_ID, PathBuilder, StrokePath, StrokeStyle};
pub use render::{DrawItem, PreviewItem, RenderModel};
pub use shapes::{SerializableColor, Shape, ShapeBuilder, ShapeGeometry, ShapeKind, ShapeStyle};
pub use tools::{Ink, ToolKind, ToolProfile, ToolProfiles};
