//! Engine configuration.

use crate::error::{EngineError, EngineResult};
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::shapes::SerializableColor;
use crate::tools::{ToolKind, ToolProfile, ToolProfiles};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_background() -> SerializableColor {
    SerializableColor::white()
}

/// Settings a host supplies when creating an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of undo entries kept.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Canvas background; also the ink of eraser strokes.
    #[serde(default = "default_background")]
    pub background_color: SerializableColor,
    /// Tool selected on creation.
    #[serde(default)]
    pub initial_tool: ToolKind,
    /// Start with gesture handling disabled.
    #[serde(default)]
    pub read_only: bool,
    /// Per-tool profile overrides keyed by tool id.
    #[serde(default)]
    pub profiles: BTreeMap<String, ToolProfile>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            background_color: default_background(),
            initial_tool: ToolKind::default(),
            read_only: false,
            profiles: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check limits and profile overrides.
    pub fn validate(&self) -> EngineResult<()> {
        self.tool_profiles().map(|_| ())
    }

    /// Build the tool registry: defaults with this config's overrides.
    pub fn tool_profiles(&self) -> EngineResult<ToolProfiles> {
        if self.history_limit == 0 {
            return Err(EngineError::InvalidConfig(
                "history_limit must be at least 1".to_string(),
            ));
        }
        ToolProfiles::with_overrides(&self.profiles)
    }
}
