//! Tool system: tool ids and their stroke profiles.

mod profile;

pub use profile::{ToolProfile, ToolProfiles};

use crate::error::EngineError;
use crate::shapes::{SerializableColor, ShapeKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pen,
    Pencil,
    Marker,
    Highlighter,
    Eraser,
    Line,
    Rectangle,
    Circle,
    Arrow,
}

impl ToolKind {
    /// Number of tools.
    pub const COUNT: usize = 9;

    /// All tools, in registry order.
    pub const ALL: [ToolKind; Self::COUNT] = [
        ToolKind::Pen,
        ToolKind::Pencil,
        ToolKind::Marker,
        ToolKind::Highlighter,
        ToolKind::Eraser,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Arrow,
    ];

    /// Stable string id used by hosts and persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Pencil => "pencil",
            ToolKind::Marker => "marker",
            ToolKind::Highlighter => "highlighter",
            ToolKind::Eraser => "eraser",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Arrow => "arrow",
        }
    }

    /// The shape this tool drags out, or None for freehand tools.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Circle => Some(ShapeKind::Circle),
            ToolKind::Arrow => Some(ShapeKind::Arrow),
            ToolKind::Pen
            | ToolKind::Pencil
            | ToolKind::Marker
            | ToolKind::Highlighter
            | ToolKind::Eraser => None,
        }
    }

    /// Whether this tool records freehand point paths.
    pub fn is_freehand(&self) -> bool {
        self.shape_kind().is_none()
    }

    /// Ink this tool lays down when the active color is `color`.
    ///
    /// The eraser paints with the canvas background, looked up only when its
    /// stroke is committed.
    pub fn ink(&self, color: SerializableColor) -> Ink {
        match self {
            ToolKind::Eraser => Ink::Background,
            _ => Ink::Color(color),
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// Stroke color that may depend on the canvas background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// A fixed color.
    Color(SerializableColor),
    /// Whatever the canvas background is at resolution time.
    Background,
}

impl Ink {
    /// Resolve against the current background color.
    pub fn resolve(&self, background: SerializableColor) -> SerializableColor {
        match self {
            Ink::Color(color) => *color,
            Ink::Background => background,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = EngineError;

    /// Unknown ids are an integration bug upstream and are never mapped to a
    /// fallback tool.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| EngineError::UnknownTool(s.to_string()))
    }
}
