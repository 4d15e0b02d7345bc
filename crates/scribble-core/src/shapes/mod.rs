//! Shape primitives and their derived geometry.

mod arrow;
mod builder;
mod circle;
mod line;
mod rectangle;

pub use arrow::{ARROW_WING_ANGLE, ARROW_WING_LENGTH, ArrowGeometry, arrow_geometry};
pub use builder::{ShapeBuilder, ShapeStyle};
pub use circle::circle_geometry;
pub use line::line_geometry;
pub use rectangle::rectangle_geometry;

use crate::error::{EngineError, EngineResult};
use kurbo::{BezPath, Circle, Line, Point, Rect, Shape as KurboShape};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when flattening curved geometry into path commands.
const PATH_TOLERANCE: f64 = 0.1;

/// Serializable color representation (RGBA8).
///
/// Persisted as a `#RRGGBB` (opaque) or `#RRGGBBAA` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` color code.
    pub fn from_hex(code: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidColor(code.to_string());
        let hex = code.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = byte(&hex[0..1])? * 17;
                let g = byte(&hex[1..2])? * 17;
                let b = byte(&hex[2..3])? * 17;
                Ok(Self::rgb(r, g, b))
            }
            6 => Ok(Self::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            8 => Ok(Self::new(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Format as a color code; the alpha byte is omitted when opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Get as a peniko Color with an extra opacity factor applied to alpha.
    pub fn with_opacity(&self, opacity: f64) -> Color {
        let alpha = (self.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
        Color::from_rgba8(self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for SerializableColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for SerializableColor {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for SerializableColor {
    type Error = EngineError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_hex(&code)
    }
}

impl From<SerializableColor> for String {
    fn from(color: SerializableColor) -> Self {
        color.to_hex()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Primitive shape kinds produced by drag gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
    Arrow,
}

impl ShapeKind {
    /// Whether the outline encloses an area that can take a fill.
    pub fn is_closed(&self) -> bool {
        matches!(self, ShapeKind::Rectangle | ShapeKind::Circle)
    }
}

/// Geometry derived from a shape's anchor and release points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    Line(Line),
    Rectangle(Rect),
    Circle(Circle),
    Arrow(ArrowGeometry),
}

impl ShapeGeometry {
    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self {
            ShapeGeometry::Line(line) => line.to_path(PATH_TOLERANCE),
            ShapeGeometry::Rectangle(rect) => rect.to_path(PATH_TOLERANCE),
            ShapeGeometry::Circle(circle) => circle.to_path(PATH_TOLERANCE),
            ShapeGeometry::Arrow(arrow) => arrow.to_path(),
        }
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            ShapeGeometry::Line(line) => line.bounding_box(),
            ShapeGeometry::Rectangle(rect) => *rect,
            ShapeGeometry::Circle(circle) => circle.bounding_box(),
            ShapeGeometry::Arrow(arrow) => arrow.bounds(),
        }
    }
}

/// A committed (or previewed) primitive shape.
///
/// Only the anchor (`start`) and release (`end`) points are stored; corners,
/// radius and arrow wings come from [`Shape::geometry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier.
    pub id: String,
    /// Primitive kind.
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// Anchor point (gesture start).
    pub start: Point,
    /// Release point (gesture end).
    pub end: Point,
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    #[serde(default)]
    pub fill: Option<SerializableColor>,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: u64,
}

impl Shape {
    /// Compute the canonical geometry for this shape.
    pub fn geometry(&self) -> ShapeGeometry {
        match self.kind {
            ShapeKind::Line => ShapeGeometry::Line(line_geometry(self.start, self.end)),
            ShapeKind::Rectangle => {
                ShapeGeometry::Rectangle(rectangle_geometry(self.start, self.end))
            }
            ShapeKind::Circle => ShapeGeometry::Circle(circle_geometry(self.start, self.end)),
            ShapeKind::Arrow => ShapeGeometry::Arrow(arrow_geometry(self.start, self.end)),
        }
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        self.geometry().to_path()
    }

    /// Get the bounding box of the derived geometry.
    pub fn bounds(&self) -> Rect {
        self.geometry().bounds()
    }

    /// Whether anchor and release coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}
