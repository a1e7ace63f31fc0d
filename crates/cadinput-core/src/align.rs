//! Lock the angle parallel or perpendicular to a snapped segment.

use crate::constraints::{AlignMode, Axis, ConstraintState};
use crate::history::PointHistory;
use crate::snap::SnapSegment;

/// Set and lock the angle so the next segment runs parallel (or
/// perpendicular, per `constraints.align`) to `segment`.
///
/// The segment's direction is taken from `end` back to `start`.
///
/// In relative angle mode the result is measured from the last committed
/// segment when there is one. Returns `false` and leaves `constraints`
/// untouched when there is no previous vertex or no snapped segment.
pub fn align_to_segment(
    history: &PointHistory,
    constraints: &mut ConstraintState,
    segment: Option<&SnapSegment>,
) -> bool {
    let (Some(previous), Some(segment)) = (history.previous(), segment) else {
        log::warn!("Ignoring alignment request: needs a previous vertex and a snapped segment");
        return false;
    };

    let mut angle = (segment.start - segment.end).atan2();
    if constraints.angle.relative {
        if let Some(penultimate) = history.penultimate() {
            angle -= (previous - penultimate).atan2();
        }
    }
    if constraints.align == AlignMode::Perpendicular {
        angle += std::f64::consts::FRAC_PI_2;
    }

    constraints.angle.value = Some(angle.to_degrees());
    constraints.set_lock(Axis::Angle, true);
    log::debug!("Aligned angle to segment: {:.4}°", angle.to_degrees());
    true
}
