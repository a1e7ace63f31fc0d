//! Stateless intersection primitives used to magnetize locked constraints
//! onto a snapped segment.
//!
//! All lines here are infinite lines through two points. Degenerate inputs
//! never divide by zero: the axis intersections fall back to the first
//! point, and the other primitives report `None`.

use kurbo::Point;

/// Y coordinate of the line through `p1` and `p2` at the given `x`.
///
/// A vertical line has no single answer, so `p1.y` is returned.
pub fn line_intersection_at_x(p1: Point, p2: Point, x: f64) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx == 0.0 {
        p1.y
    } else {
        p1.y + dy * (x - p1.x) / dx
    }
}

/// X coordinate of the line through `p1` and `p2` at the given `y`.
///
/// A horizontal line has no single answer, so `p1.x` is returned.
pub fn line_intersection_at_y(p1: Point, p2: Point, y: f64) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dy == 0.0 {
        p1.x
    } else {
        p1.x + dx * (y - p1.y) / dy
    }
}

/// Intersect the line through `p1` and `p2` with a circle.
///
/// Returns both crossing points, or `None` when the line misses the circle
/// or only touches it (a tangent gives nothing to choose between).
pub fn circle_line_intersection(
    p1: Point,
    p2: Point,
    center: Point,
    radius: f64,
) -> Option<(Point, Point)> {
    // Work with the circle centered on the origin.
    let a = p1 - center;
    let b = p2 - center;

    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dr_sq = dx * dx + dy * dy;
    let d = a.x * b.y - b.x * a.y;

    let disc = radius * radius * dr_sq - d * d;
    if disc <= 0.0 {
        return None;
    }

    let root = disc.sqrt();
    let sgn = if dy < 0.0 { -1.0 } else { 1.0 };

    let first = Point::new(
        center.x + (d * dy + sgn * dx * root) / dr_sq,
        center.y + (-d * dx + dy.abs() * root) / dr_sq,
    );
    let second = Point::new(
        center.x + (d * dy - sgn * dx * root) / dr_sq,
        center.y + (-d * dx - dy.abs() * root) / dr_sq,
    );

    Some((first, second))
}

/// Pick whichever of two candidates lies nearer to `target`.
///
/// Ties go to `first`.
pub fn nearest_of(target: Point, first: Point, second: Point) -> Point {
    if target.distance_squared(first) <= target.distance_squared(second) {
        first
    } else {
        second
    }
}

/// Counter-clockwise angle in degrees, in `[0, 360)`, from line `a` to line `b`.
pub fn angle_between(a0: Point, a1: Point, b0: Point, b1: Point) -> f64 {
    let u = a1 - a0;
    let v = b1 - b0;
    let angle = u.cross(v).atan2(u.dot(v)).to_degrees();
    if angle < 0.0 { angle + 360.0 } else { angle }
}

/// Intersect two infinite lines, each given by two points.
///
/// Returns `None` for parallel or collinear lines, and for lines whose
/// crossing angle is within `epsilon_deg` of 0° or 180°, where the
/// intersection is too unstable to be useful.
pub fn line_line_intersection(
    a0: Point,
    a1: Point,
    b0: Point,
    b1: Point,
    epsilon_deg: f64,
) -> Option<Point> {
    let u = a1 - a0;
    let v = b1 - b0;
    let denom = u.cross(v);
    if denom == 0.0 {
        return None;
    }

    let angle = angle_between(a0, a1, b0, b1);
    let near_parallel = angle < epsilon_deg
        || angle > 360.0 - epsilon_deg
        || (angle - 180.0).abs() < epsilon_deg;
    if near_parallel {
        return None;
    }

    let t = (b0 - a0).cross(v) / denom;
    Some(a0 + u * t)
}
