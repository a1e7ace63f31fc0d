//! Snap results and the seam to the host's snapping service.

use kurbo::{Line, ParamCurve, ParamCurveNearest, Point};
use serde::{Deserialize, Serialize};

/// Default snapping radius in world units.
pub const DEFAULT_SNAP_TOLERANCE: f64 = 10.0;

/// The nearest edge found under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapSegment {
    /// Where the cursor lands on the edge.
    pub point: Point,
    /// First endpoint of the edge.
    pub start: Point,
    /// Second endpoint of the edge.
    pub end: Point,
}

impl SnapSegment {
    pub fn new(point: Point, start: Point, end: Point) -> Self {
        Self { point, start, end }
    }
}

/// What the host snapped the cursor to, if anything.
///
/// A vertex always wins over a segment at the same location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnapResult {
    /// An existing vertex.
    Vertex { point: Point },
    /// A location on an existing edge.
    Segment(SnapSegment),
}

impl SnapResult {
    /// The point the cursor should jump to before constraints apply.
    pub fn point(&self) -> Point {
        match self {
            SnapResult::Vertex { point } => *point,
            SnapResult::Segment(segment) => segment.point,
        }
    }

    /// The snapped edge, when the snap is a segment snap.
    pub fn segment(&self) -> Option<&SnapSegment> {
        match self {
            SnapResult::Vertex { .. } => None,
            SnapResult::Segment(segment) => Some(segment),
        }
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self, SnapResult::Vertex { .. })
    }
}

/// A snapping service queried with the raw cursor position.
///
/// Hosts implement this over their own spatial index; [`GeometrySnapper`]
/// is a simple in-memory implementation.
pub trait SnapSource {
    fn snap(&self, point: Point) -> Option<SnapResult>;
}

/// In-memory snapper over a list of vertices and edges.
#[derive(Debug, Clone, Default)]
pub struct GeometrySnapper {
    /// Standalone vertices plus the endpoints of every edge.
    vertices: Vec<Point>,
    /// Edges that can be snapped to.
    segments: Vec<Line>,
    /// Snapping radius in world units.
    tolerance: f64,
}

impl GeometrySnapper {
    pub fn new(tolerance: f64) -> Self {
        Self {
            vertices: Vec::new(),
            segments: Vec::new(),
            tolerance,
        }
    }

    /// Register a standalone vertex.
    pub fn add_vertex(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Register an edge. Its endpoints become snappable vertices too.
    pub fn add_segment(&mut self, start: Point, end: Point) {
        self.vertices.push(start);
        self.vertices.push(end);
        self.segments.push(Line::new(start, end));
    }

    /// Register every edge of an open polyline.
    pub fn add_polyline(&mut self, points: &[Point]) {
        for pair in points.windows(2) {
            self.add_segment(pair[0], pair[1]);
        }
        if points.len() == 1 {
            self.add_vertex(points[0]);
        }
    }

    fn nearest_vertex(&self, point: Point) -> Option<Point> {
        let mut best: Option<Point> = None;
        let mut best_dist_sq = self.tolerance * self.tolerance;

        for vertex in &self.vertices {
            let dist_sq = point.distance_squared(*vertex);
            if dist_sq <= best_dist_sq {
                best_dist_sq = dist_sq;
                best = Some(*vertex);
            }
        }

        best
    }

    fn nearest_segment(&self, point: Point) -> Option<SnapSegment> {
        let mut best: Option<SnapSegment> = None;
        let mut best_dist_sq = self.tolerance * self.tolerance;

        for line in &self.segments {
            let nearest = line.nearest(point, 1e-9);
            if nearest.distance_sq <= best_dist_sq {
                best_dist_sq = nearest.distance_sq;
                best = Some(SnapSegment::new(line.eval(nearest.t), line.p0, line.p1));
            }
        }

        best
    }
}

impl SnapSource for GeometrySnapper {
    fn snap(&self, point: Point) -> Option<SnapResult> {
        if let Some(vertex) = self.nearest_vertex(point) {
            return Some(SnapResult::Vertex { point: vertex });
        }
        self.nearest_segment(point).map(SnapResult::Segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> GeometrySnapper {
        let mut snapper = GeometrySnapper::new(2.0);
        snapper.add_polyline(&[
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ]);
        snapper
    }

    #[test]
    fn test_snap_vertex() {
        let result = square().snap(Point::new(99.0, 1.0)).unwrap();
        assert_eq!(result, SnapResult::Vertex { point: Point::new(100.0, 0.0) });
        assert!(result.segment().is_none());
    }

    #[test]
    fn test_snap_segment() {
        let result = square().snap(Point::new(50.0, 1.5)).unwrap();
        let segment = result.segment().expect("segment snap");
        assert!((segment.point.x - 50.0).abs() < 1e-9);
        assert!(segment.point.y.abs() < 1e-9);
        assert_eq!(segment.start, Point::new(0.0, 0.0));
        assert_eq!(segment.end, Point::new(100.0, 0.0));
        assert_eq!(result.point(), segment.point);
    }

    #[test]
    fn test_vertex_has_priority_over_segment() {
        // Closer to the edge than to the corner, but the corner is in range.
        let result = square().snap(Point::new(98.5, 0.1)).unwrap();
        assert!(result.is_vertex());
    }

    #[test]
    fn test_snap_out_of_range() {
        assert!(square().snap(Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_snap_result_serde() {
        let result = SnapResult::Vertex { point: Point::new(1.0, 2.0) };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"kind\":\"vertex\""));
        let back: SnapResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
