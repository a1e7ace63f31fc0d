//! Which constraint axes the current history can support.

use serde::{Deserialize, Serialize};

/// Constraint axes that are legal for a given number of points.
///
/// A point count includes the current point, so `2` means one committed
/// vertex to measure from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintCapabilities {
    /// Angle measured from the horizontal.
    pub absolute_angle: bool,
    /// Distance from the previous vertex.
    pub distance: bool,
    /// X/Y measured from the previous vertex.
    pub relative_pos: bool,
    /// Angle measured from the previous segment.
    pub relative_angle: bool,
}

impl ConstraintCapabilities {
    /// Capabilities for a history holding `point_count` points.
    pub fn for_point_count(point_count: usize) -> Self {
        let has_previous = point_count > 1;
        Self {
            absolute_angle: has_previous,
            distance: has_previous,
            relative_pos: has_previous,
            relative_angle: point_count > 2,
        }
    }

    /// Recompute from `point_count`. Returns whether anything changed.
    pub fn update(&mut self, point_count: usize) -> bool {
        let next = Self::for_point_count(point_count);
        let changed = next != *self;
        *self = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        for n in 0..=1 {
            assert_eq!(
                ConstraintCapabilities::for_point_count(n),
                ConstraintCapabilities::default()
            );
        }

        let two = ConstraintCapabilities::for_point_count(2);
        assert!(two.absolute_angle && two.distance && two.relative_pos);
        assert!(!two.relative_angle);

        let many = ConstraintCapabilities::for_point_count(7);
        assert!(many.absolute_angle && many.distance && many.relative_pos && many.relative_angle);
    }

    #[test]
    fn test_changed_only_on_threshold_crossings() {
        let mut caps = ConstraintCapabilities::default();

        // First move, then three commits, then a cancel.
        assert!(!caps.update(1));
        assert!(caps.update(2));
        assert!(!caps.relative_angle);
        assert!(caps.update(3));
        assert!(caps.relative_angle);
        assert!(!caps.update(4));
        assert!(caps.relative_angle);

        assert!(caps.update(0));
        assert!(!caps.relative_angle);
        assert!(!caps.update(0));
    }
}
