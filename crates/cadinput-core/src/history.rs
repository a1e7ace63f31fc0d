//! Point history for the geometry being digitized.

use crate::snap::{SnapResult, SnapSegment};
use kurbo::Point;

/// The points placed so far in the current digitizing session.
///
/// The last entry is the `current` point that follows the cursor; entries
/// before it are committed vertices. The solver only ever looks at the
/// current point, the previous vertex and the one before that, but older
/// vertices are kept so that removing the last vertex restores the right
/// context.
#[derive(Debug, Clone, Default)]
pub struct PointHistory {
    points: Vec<Point>,
    /// What the host snapped the cursor to on the last event.
    snap: Option<SnapResult>,
}

impl PointHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points, including the current one.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point being positioned.
    pub fn current(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// The last committed vertex.
    pub fn previous(&self) -> Option<Point> {
        self.nth_back(1)
    }

    /// The vertex committed before [`previous`](Self::previous).
    pub fn penultimate(&self) -> Option<Point> {
        self.nth_back(2)
    }

    fn nth_back(&self, n: usize) -> Option<Point> {
        self.points.len().checked_sub(n + 1).map(|i| self.points[i])
    }

    /// Committed vertices, oldest first.
    pub fn committed(&self) -> &[Point] {
        match self.points.len() {
            0 => &[],
            n => &self.points[..n - 1],
        }
    }

    /// Replace the current point, creating it on the first move.
    pub fn update_current(&mut self, point: Point) {
        match self.points.last_mut() {
            Some(current) => *current = point,
            None => self.points.push(point),
        }
    }

    /// Commit the current point as a vertex. A new current point starts at
    /// the same location.
    ///
    /// Does nothing before the first move.
    pub fn commit(&mut self) {
        if let Some(current) = self.current() {
            self.points.push(current);
        }
    }

    /// Drop the most recently committed vertex, keeping the current point.
    ///
    /// Returns `false` when there is no committed vertex to remove.
    pub fn remove_last_point(&mut self) -> bool {
        if self.points.len() > 1 {
            let index = self.points.len() - 2;
            self.points.remove(index);
            true
        } else {
            false
        }
    }

    /// Forget every point and the snap state.
    pub fn clear(&mut self) {
        self.points.clear();
        self.snap = None;
    }

    pub fn set_snap(&mut self, snap: Option<SnapResult>) {
        self.snap = snap;
    }

    /// The snapped segment, if the current snap is a segment snap.
    pub fn snap_segment(&self) -> Option<&SnapSegment> {
        self.snap.as_ref().and_then(SnapResult::segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let history = PointHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);
        assert_eq!(history.previous(), None);
        assert_eq!(history.penultimate(), None);
        assert!(history.committed().is_empty());
    }

    #[test]
    fn test_update_and_commit_roles() {
        let mut history = PointHistory::new();

        history.update_current(Point::new(1.0, 1.0));
        assert_eq!(history.len(), 1);
        history.update_current(Point::new(2.0, 2.0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(Point::new(2.0, 2.0)));

        history.commit();
        assert_eq!(history.len(), 2);
        assert_eq!(history.previous(), Some(Point::new(2.0, 2.0)));

        history.update_current(Point::new(5.0, 0.0));
        history.commit();
        history.update_current(Point::new(9.0, 9.0));

        assert_eq!(history.current(), Some(Point::new(9.0, 9.0)));
        assert_eq!(history.previous(), Some(Point::new(5.0, 0.0)));
        assert_eq!(history.penultimate(), Some(Point::new(2.0, 2.0)));
        assert_eq!(history.committed(), &[Point::new(2.0, 2.0), Point::new(5.0, 0.0)]);
    }

    #[test]
    fn test_commit_before_move_is_noop() {
        let mut history = PointHistory::new();
        history.commit();
        assert!(history.is_empty());
    }

    #[test]
    fn test_remove_last_point() {
        let mut history = PointHistory::new();
        history.update_current(Point::new(0.0, 0.0));
        history.commit();
        history.update_current(Point::new(10.0, 0.0));
        history.commit();
        history.update_current(Point::new(10.0, 10.0));

        assert!(history.remove_last_point());
        assert_eq!(history.len(), 2);
        assert_eq!(history.previous(), Some(Point::new(0.0, 0.0)));
        assert_eq!(history.current(), Some(Point::new(10.0, 10.0)));

        assert!(history.remove_last_point());
        assert_eq!(history.len(), 1);
        assert!(!history.remove_last_point());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_clear_resets_snap() {
        let mut history = PointHistory::new();
        history.update_current(Point::new(3.0, 4.0));
        history.set_snap(Some(SnapResult::Segment(SnapSegment::new(
            Point::new(0.0, 0.0),
            Point::new(-1.0, 0.0),
            Point::new(1.0, 0.0),
        ))));
        assert!(history.snap_segment().is_some());

        history.clear();
        assert!(history.is_empty());
        assert!(history.snap_segment().is_none());
    }
}
