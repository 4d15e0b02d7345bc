//! Per-tool stroke defaults.

use super::ToolKind;
use crate::error::{EngineError, EngineResult};
use crate::shapes::SerializableColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stroke defaults for one tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolProfile {
    /// Stroke width in canvas units.
    pub stroke_width: f64,
    /// Stroke opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub opacity: f64,
    /// Color selected when the tool is picked.
    pub default_color: SerializableColor,
}

impl ToolProfile {
    pub const fn new(stroke_width: f64, opacity: f64, default_color: SerializableColor) -> Self {
        Self {
            stroke_width,
            opacity,
            default_color,
        }
    }

    fn validate(&self, tool: ToolKind) -> EngineResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "{tool}: stroke width must be positive, got {}",
                self.stroke_width
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(EngineError::InvalidConfig(format!(
                "{tool}: opacity must be within 0..=1, got {}",
                self.opacity
            )));
        }
        Ok(())
    }
}

/// Immutable registry mapping every tool to its profile.
///
/// The table is total over [`ToolKind`], so a lookup can never miss.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolProfiles {
    profiles: [ToolProfile; ToolKind::COUNT],
}

impl Default for ToolProfiles {
    fn default() -> Self {
        let black = SerializableColor::black();
        let shape = ToolProfile::new(2.0, 1.0, black);
        let mut profiles = [shape; ToolKind::COUNT];
        profiles[ToolKind::Pen.index()] = ToolProfile::new(2.0, 1.0, black);
        profiles[ToolKind::Pencil.index()] =
            ToolProfile::new(1.0, 0.8, SerializableColor::rgb(0x4A, 0x4A, 0x4A));
        profiles[ToolKind::Marker.index()] = ToolProfile::new(6.0, 0.9, black);
        profiles[ToolKind::Highlighter.index()] =
            ToolProfile::new(16.0, 0.35, SerializableColor::rgb(0xFF, 0xEB, 0x3B));
        profiles[ToolKind::Eraser.index()] = ToolProfile::new(20.0, 1.0, SerializableColor::white());
        Self { profiles }
    }
}

impl ToolProfiles {
    /// Get the profile for a tool.
    pub fn get(&self, tool: ToolKind) -> &ToolProfile {
        &self.profiles[tool.index()]
    }

    /// Build a registry from the defaults with per-tool overrides keyed by
    /// tool id. Unknown ids are rejected.
    pub fn with_overrides(overrides: &BTreeMap<String, ToolProfile>) -> EngineResult<Self> {
        let mut registry = Self::default();
        for (id, profile) in overrides {
            let tool: ToolKind = id.parse()?;
            profile.validate(tool)?;
            registry.profiles[tool.index()] = *profile;
        }
        Ok(registry)
    }

    /// Iterate over all `(tool, profile)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (ToolKind, &ToolProfile)> {
        ToolKind::ALL.into_iter().zip(self.profiles.iter())
    }
}
