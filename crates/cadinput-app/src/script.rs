//! Replay scripts: the geometry to snap against plus a recorded stream of
//! input events.

use crate::error::AppResult;
use cadinput_core::{Axis, GeometrySnapper, Modifiers, PointerEvent, SnapResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub start: Point,
    pub end: Point,
}

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// A pointer event. `snap` overrides what the script geometry would snap to.
    Pointer {
        event: PointerEvent,
        #[serde(default)]
        snap: Option<SnapResult>,
    },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Text typed into an axis field and confirmed.
    Field { axis: Axis, text: String },
    Cancel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub vertices: Vec<Point>,
    pub segments: Vec<ScriptSegment>,
    pub polylines: Vec<Vec<Point>>,
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Build a snapper over the script geometry.
    pub fn snapper(&self, tolerance: f64) -> GeometrySnapper {
        let mut snapper = GeometrySnapper::new(tolerance);
        for vertex in &self.vertices {
            snapper.add_vertex(*vertex);
        }
        for segment in &self.segments {
            snapper.add_segment(segment.start, segment.end);
        }
        for polyline in &self.polylines {
            snapper.add_polyline(polyline);
        }
        snapper
    }
}
