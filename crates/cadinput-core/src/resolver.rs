//! Constraint resolution: turn a raw cursor position into the one point
//! that honors every active lock.
//!
//! Axes are applied in a fixed order, each consuming the output of the
//! previous stage:
//!
//! 1. X, magnetized along a snapped segment when Y is free
//! 2. Y, magnetized along a snapped segment when X is free
//! 3. Angle, projected onto the locked ray from the previous vertex and
//!    magnetized to its crossing with a snapped segment when distance is free
//! 4. Distance, scaled from the previous vertex and magnetized to the nearer
//!    circle crossing with a snapped segment when the angle is free
//! 5. Display back-fill of the cartesian fields
//!
//! When locks conflict, later stages win. Unlocked axes get their value
//! overwritten with the live measurement so a UI can show it.

use crate::capabilities::ConstraintCapabilities;
use crate::config::DEFAULT_ANGLE_EPSILON_DEG;
use crate::constraints::{AxisConstraint, ConstraintState};
use crate::history::PointHistory;
use crate::intersection::{
    circle_line_intersection, line_intersection_at_x, line_intersection_at_y,
    line_line_intersection, nearest_of,
};
use crate::snap::SnapSegment;
use kurbo::{Point, Vec2};

/// Resolves cursor positions against a [`ConstraintState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolver {
    /// Near-parallel rejection threshold for angle magnetization, in degrees.
    pub angle_epsilon_deg: f64,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            angle_epsilon_deg: DEFAULT_ANGLE_EPSILON_DEG,
        }
    }
}

impl Resolver {
    pub fn new(angle_epsilon_deg: f64) -> Self {
        Self { angle_epsilon_deg }
    }

    /// Compute the constrained point for `raw`.
    ///
    /// `history` is read as it stands before the current point is replaced.
    /// `segment` is the edge the host snapped to, if any. Only the value
    /// fields of unlocked axes in `constraints` are written, plus locked X/Y
    /// values a later stage overrode, and relative X/Y being switched off
    /// when there is no vertex to be relative to.
    pub fn resolve(
        &self,
        raw: Point,
        history: &PointHistory,
        constraints: &mut ConstraintState,
        segment: Option<&SnapSegment>,
    ) -> Point {
        let caps = ConstraintCapabilities::for_point_count(history.len());
        let previous = history.previous();
        let mut point = raw;

        self.apply_x(&mut point, previous, constraints, segment);
        self.apply_y(&mut point, previous, constraints, segment);

        match previous {
            Some(previous) if caps.absolute_angle => {
                let last_angle = match history.penultimate() {
                    Some(penultimate) if constraints.angle.relative && caps.relative_angle => {
                        (previous - penultimate).atan2()
                    }
                    _ => 0.0,
                };
                self.apply_angle(&mut point, previous, last_angle, constraints, segment);
                self.apply_distance(&mut point, previous, constraints, segment);
            }
            _ => {
                if !constraints.angle.locked {
                    constraints.angle.value = None;
                }
                if !constraints.distance.locked {
                    constraints.distance.value = None;
                }
            }
        }

        Self::backfill_cartesian(point, previous, constraints);

        log::trace!("Resolved {:?} -> {:?}", raw, point);
        point
    }

    fn apply_x(
        &self,
        point: &mut Point,
        previous: Option<Point>,
        constraints: &mut ConstraintState,
        segment: Option<&SnapSegment>,
    ) {
        let origin = match previous {
            Some(previous) if constraints.x.relative => previous.x,
            _ => 0.0,
        };

        if constraints.x.locked {
            point.x = origin + constraints.x.value_or_zero();
            if let Some(segment) = segment {
                if !constraints.y.locked {
                    point.y = line_intersection_at_x(segment.start, segment.end, point.x);
                }
            }
        } else {
            constraints.x.value = Some(point.x - origin);
        }
    }

    fn apply_y(
        &self,
        point: &mut Point,
        previous: Option<Point>,
        constraints: &mut ConstraintState,
        segment: Option<&SnapSegment>,
    ) {
        let origin = match previous {
            Some(previous) if constraints.y.relative => previous.y,
            _ => 0.0,
        };

        if constraints.y.locked {
            point.y = origin + constraints.y.value_or_zero();
            if let Some(segment) = segment {
                if !constraints.x.locked {
                    point.x = line_intersection_at_y(segment.start, segment.end, point.y);
                }
            }
        } else {
            constraints.y.value = Some(point.y - origin);
        }
    }

    fn apply_angle(
        &self,
        point: &mut Point,
        previous: Point,
        last_angle: f64,
        constraints: &mut ConstraintState,
        segment: Option<&SnapSegment>,
    ) {
        let delta = *point - previous;

        if !constraints.angle.locked {
            constraints.angle.value = Some((delta.atan2() - last_angle).to_degrees());
            return;
        }

        let angle = constraints.angle.value_or_zero().to_radians() + last_angle;
        let direction = Vec2::from_angle(angle);
        *point = previous + direction * direction.dot(delta);

        if let Some(segment) = segment {
            if !constraints.distance.locked {
                if let Some(crossing) = line_line_intersection(
                    previous,
                    previous + direction,
                    segment.start,
                    segment.end,
                    self.angle_epsilon_deg,
                ) {
                    *point = crossing;
                }
            }
        }
    }

    fn apply_distance(
        &self,
        point: &mut Point,
        previous: Point,
        constraints: &mut ConstraintState,
        segment: Option<&SnapSegment>,
    ) {
        let delta = *point - previous;
        let dist = delta.hypot();

        if !constraints.distance.locked {
            constraints.distance.value = Some(dist);
            return;
        }

        let radius = constraints.distance.value_or_zero();
        *point = if dist == 0.0 {
            // Cursor sits on the previous vertex: go along +X.
            previous + Vec2::new(radius, 0.0)
        } else {
            previous + delta * (radius / dist)
        };

        if let Some(segment) = segment {
            if !constraints.angle.locked {
                if let Some((first, second)) =
                    circle_line_intersection(segment.start, segment.end, previous, radius)
                {
                    *point = nearest_of(*point, first, second);
                }
            }
        }
    }

    fn backfill_cartesian(
        point: Point,
        previous: Option<Point>,
        constraints: &mut ConstraintState,
    ) {
        if previous.is_none() {
            constraints.x.relative = false;
            constraints.y.relative = false;
        }

        let (origin_x, origin_y) = match previous {
            Some(previous) => (
                if constraints.x.relative { previous.x } else { 0.0 },
                if constraints.y.relative { previous.y } else { 0.0 },
            ),
            None => (0.0, 0.0),
        };

        backfill_axis(&mut constraints.x, point.x - origin_x);
        backfill_axis(&mut constraints.y, point.y - origin_y);
    }
}

/// Show `live` in an unlocked field, or in a locked one a later stage
/// moved the point off.
fn backfill_axis(axis: &mut AxisConstraint, live: f64) {
    let drifted = (axis.value_or_zero() - live).abs() > 1e-9 * live.abs().max(1.0);
    if !axis.locked || drifted {
        axis.value = Some(live);
    }
}

/// Resolve with the default angle epsilon.
pub fn resolve(
    raw: Point,
    history: &PointHistory,
    constraints: &mut ConstraintState,
    segment: Option<&SnapSegment>,
) -> Point {
    Resolver::default().resolve(raw, history, constraints, segment)
}
