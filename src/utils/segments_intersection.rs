//! Line and segment intersection based on Cramer's rule.

use crate::math::{Point, Real};

/// Computes the intersection of the two infinite lines through `(p1, p2)` and
/// `(q1, q2)`.
///
/// Returns `None` when the lines are parallel or nearly so, i.e. the
/// determinant of the underlying 2x2 system is within `epsilon` of zero.
pub fn line_intersection(
    p1: &Point<Real>,
    p2: &Point<Real>,
    q1: &Point<Real>,
    q2: &Point<Real>,
    epsilon: Real,
) -> Option<Point<Real>> {
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = a1 * p1.x + b1 * p1.y;
    let a2 = q2.y - q1.y;
    let b2 = q1.x - q2.x;
    let c2 = a2 * q1.x + b2 * q1.y;

    let det = a1 * b2 - a2 * b1;
    if det.abs() <= epsilon {
        return None;
    }

    Some(Point::new(
        (b2 * c1 - b1 * c2) / det,
        (a1 * c2 - a2 * c1) / det,
    ))
}

/// Computes the intersection point of the segments `[p1, p2]` and `[q1, q2]`.
///
/// Returns `None` when the segments are parallel or nearly so (determinant
/// within `epsilon` of zero), when the supporting lines cross outside either
/// segment, or when the segments merely touch at their shared start points
/// (`p1 == q1`), which is not reported as a crossing.
pub fn segment_intersection(
    p1: &Point<Real>,
    p2: &Point<Real>,
    q1: &Point<Real>,
    q2: &Point<Real>,
    epsilon: Real,
) -> Option<Point<Real>> {
    let dp = *p2 - *p1;
    let dq = *q2 - *q1;

    let denom = dq.y * dp.x - dq.x * dp.y;
    if denom.abs() <= epsilon {
        return None;
    }

    let diff = *p1 - *q1;

    let s = (dq.x * diff.y - dq.y * diff.x) / denom;
    if s < 0.0 || s > 1.0 {
        return None;
    }

    let t = (dp.x * diff.y - dp.y * diff.x) / denom;
    if t < 0.0 || t > 1.0 {
        return None;
    }

    // Coincident start points count as touching, not crossing.
    if s == 0.0 && t == 0.0 {
        return None;
    }

    Some(*p1 + dp * s)
}
