//! Lock flags, relative-mode flags and values for each constraint axis.

use crate::expr::{self, ExprError};
use serde::{Deserialize, Serialize};

/// A constraint axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Distance,
    Angle,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::X, Axis::Y, Axis::Distance, Axis::Angle];

    /// Whether this is one of the cartesian axes.
    pub fn is_cartesian(self) -> bool {
        matches!(self, Axis::X | Axis::Y)
    }
}

/// State of a single axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisConstraint {
    /// Pin the axis to `value` instead of following the cursor.
    pub locked: bool,
    /// Measure from the previous vertex (or segment, for the angle).
    pub relative: bool,
    /// Locked value, or the live value shown for an unlocked axis.
    /// `None` when there is nothing to show.
    pub value: Option<f64>,
}

impl AxisConstraint {
    /// The value as a number, with a blank field reading as zero.
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

/// Parallel/perpendicular request for the next segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignMode {
    #[default]
    None,
    Parallel,
    Perpendicular,
}

impl AlignMode {
    /// Cycle none -> parallel -> perpendicular -> none.
    pub fn next(self) -> Self {
        match self {
            AlignMode::None => AlignMode::Parallel,
            AlignMode::Parallel => AlignMode::Perpendicular,
            AlignMode::Perpendicular => AlignMode::None,
        }
    }

    pub fn is_active(self) -> bool {
        self != AlignMode::None
    }
}

/// Everything the user has set for the next point.
///
/// Values of unlocked axes are written back by the resolver so they always
/// mirror the live cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintState {
    pub x: AxisConstraint,
    pub y: AxisConstraint,
    /// Always measured from the previous vertex; `relative` is ignored.
    pub distance: AxisConstraint,
    /// Degrees, counter-clockwise, zero pointing along +X.
    pub angle: AxisConstraint,
    /// Parallel/perpendicular request.
    pub align: AlignMode,
    /// Points are drawing aids only and are not sent to the host.
    pub construction: bool,
}

impl ConstraintState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(&self, axis: Axis) -> &AxisConstraint {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Distance => &self.distance,
            Axis::Angle => &self.angle,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisConstraint {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Distance => &mut self.distance,
            Axis::Angle => &mut self.angle,
        }
    }

    pub fn is_locked(&self, axis: Axis) -> bool {
        self.axis(axis).locked
    }

    pub fn is_relative(&self, axis: Axis) -> bool {
        match axis {
            Axis::Distance => true,
            _ => self.axis(axis).relative,
        }
    }

    /// Lock or unlock an axis.
    ///
    /// Locking a cartesian axis unlocks distance and angle, and locking
    /// distance or angle unlocks both cartesian axes.
    pub fn set_lock(&mut self, axis: Axis, locked: bool) {
        self.axis_mut(axis).locked = locked;
        if locked {
            for other in Axis::ALL {
                if other.is_cartesian() != axis.is_cartesian() {
                    self.axis_mut(other).locked = false;
                }
            }
        }
        log::debug!("{:?} lock set to {}", axis, locked);
    }

    pub fn toggle_lock(&mut self, axis: Axis) {
        let locked = !self.is_locked(axis);
        self.set_lock(axis, locked);
    }

    /// Distance is always relative, so setting it is ignored.
    pub fn set_relative(&mut self, axis: Axis, relative: bool) {
        if axis != Axis::Distance {
            self.axis_mut(axis).relative = relative;
        }
    }

    pub fn toggle_relative(&mut self, axis: Axis) {
        let relative = !self.is_relative(axis);
        self.set_relative(axis, relative);
    }

    pub fn unlock_all(&mut self) {
        for axis in Axis::ALL {
            self.axis_mut(axis).locked = false;
        }
    }

    /// Parallel and perpendicular are exclusive, so this replaces any
    /// previous request.
    pub fn set_align(&mut self, align: AlignMode) {
        self.align = align;
        log::debug!("Alignment mode: {:?}", align);
    }

    pub fn cycle_align(&mut self) {
        self.set_align(self.align.next());
    }

    /// Apply text typed into a field and confirmed.
    ///
    /// Blank text unlocks the axis. A valid expression stores the value and
    /// locks the axis. An invalid one unlocks the axis, clears the value and
    /// returns the error.
    pub fn validate_field(&mut self, axis: Axis, text: &str) -> Result<(), ExprError> {
        if text.trim().is_empty() {
            self.set_lock(axis, false);
            return Ok(());
        }

        match expr::evaluate(text) {
            Ok(value) => {
                self.axis_mut(axis).value = Some(value);
                self.set_lock(axis, true);
                Ok(())
            }
            Err(err) => {
                log::debug!("Rejected {:?} input {:?}: {}", axis, text, err);
                self.set_lock(axis, false);
                self.axis_mut(axis).value = None;
                Err(err)
            }
        }
    }
}
