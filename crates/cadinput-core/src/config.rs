//! Session configuration.

use crate::snap::DEFAULT_SNAP_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Angle (degrees) within which a locked ray and a snapped segment count as
/// parallel and are not intersected.
pub const DEFAULT_ANGLE_EPSILON_DEG: f64 = 1e-4;

/// Tunables for a digitizing session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Release every lock once a vertex is committed.
    pub unlock_after_commit: bool,
    /// Near-parallel rejection threshold for angle magnetization.
    pub angle_epsilon_deg: f64,
    /// Snapping radius used by the built-in snapper.
    pub snap_tolerance: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            unlock_after_commit: true,
            angle_epsilon_deg: DEFAULT_ANGLE_EPSILON_DEG,
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
        }
    }
}
