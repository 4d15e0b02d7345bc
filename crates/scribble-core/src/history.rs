//! Bounded undo/redo of whole-canvas snapshots.

use crate::error::{EngineError, EngineResult};
use crate::path::StrokePath;
use crate::render::RenderModel;
use crate::shapes::Shape;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of undo states to keep.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Committed canvas content. Used for undo/redo and as the persisted form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    #[serde(default)]
    pub paths: Vec<StrokePath>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl CanvasSnapshot {
    /// Check if the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.shapes.is_empty()
    }

    /// Check the record invariants: paths are non-empty and every
    /// coordinate is finite.
    pub fn validate(&self) -> EngineResult<()> {
        let finite = |p: &Point| p.x.is_finite() && p.y.is_finite();
        for path in &self.paths {
            if path.points.is_empty() {
                return Err(EngineError::InvalidContent(format!("path {} has no points", path.id)));
            }
            if !path.points.iter().all(finite) {
                return Err(EngineError::InvalidContent(format!(
                    "path {} has a non-finite point",
                    path.id
                )));
            }
        }
        for shape in &self.shapes {
            if !finite(&shape.start) || !finite(&shape.end) {
                return Err(EngineError::InvalidContent(format!(
                    "shape {} has a non-finite point",
                    shape.id
                )));
            }
        }
        Ok(())
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Undo and redo stacks.
///
/// Every edit pushes exactly one undo entry and flushes redo. The undo stack
/// keeps at most `limit` entries and drops the oldest on overflow.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    undo_stack: VecDeque<CanvasSnapshot>,
    redo_stack: Vec<CanvasSnapshot>,
    limit: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryManager {
    /// Create an empty history keeping at most `limit` undo entries.
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Push the current state to the undo stack (call before making changes).
    pub fn snapshot(&mut self, model: &RenderModel) {
        self.push(model.snapshot());
    }

    /// Push a state captured earlier, e.g. the canvas as it was when a
    /// stroke began.
    pub(crate) fn push(&mut self, snapshot: CanvasSnapshot) {
        self.undo_stack.push_back(snapshot);
        if self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
        log::debug!(
            "History snapshot: {} undo, redo flushed",
            self.undo_stack.len()
        );
    }

    /// Undo the last change.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self, model: &mut RenderModel) -> bool {
        let Some(snapshot) = self.undo_stack.pop_back() else {
            return false;
        };
        self.redo_stack.push(model.snapshot());
        model.restore(snapshot);
        log::debug!(
            "Undo: {} undo, {} redo",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Redo the last undone change.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self, model: &mut RenderModel) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push_back(model.snapshot());
        if self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
        model.restore(snapshot);
        log::debug!(
            "Redo: {} undo, {} redo",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Empty the canvas as an undoable edit.
    pub fn clear(&mut self, model: &mut RenderModel) {
        self.snapshot(model);
        model.clear_content();
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Maximum number of undo entries kept.
    pub fn limit(&self) -> usize {
        self.limit
    }
}
