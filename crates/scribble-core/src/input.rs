//! Unified pointer events for hosts that deliver raw mouse/touch/pen input.
//!
//! Hosts with their own gesture recognizer can call the engine's
//! `on_gesture_*` callbacks directly instead.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer button identifiers. Touch and pen contacts report `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        #[serde(default)]
        button: PointerButton,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
        #[serde(default)]
        button: PointerButton,
    },
    /// The platform took the pointer away (focus loss, system gesture).
    Cancel,
}

impl PointerEvent {
    /// Primary-button press.
    pub fn down(x: f64, y: f64) -> Self {
        PointerEvent::Down {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    /// Primary-button release.
    pub fn up(x: f64, y: f64) -> Self {
        PointerEvent::Up {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }

    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position, .. } => Some(*position),
            PointerEvent::Cancel => None,
        }
    }
}
