//! Turn-direction predicates over triplets of 2D points.
//!
//! All predicates in this module compare the raw sign of the signed triangle
//! area without any epsilon. Reflex detection depends on this exactness;
//! tolerance-based tests live in
//! [`segments_intersection`](crate::utils::segment_intersection) instead, and
//! the two must not be harmonized.

use crate::math::{Point, Real};

/// The winding direction of a triplet of points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Counter-clockwise turn.
    Ccw,
    /// Clockwise turn.
    Cw,
    /// The three points are collinear.
    Degenerate,
}

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// The result is positive when the triplet turns counter-clockwise, negative
/// when it turns clockwise, and zero when the points are collinear.
pub fn triangle_area(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Real {
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

/// Tests if `c` lies strictly to the left of the oriented line through `a, b`.
pub fn is_left(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    triangle_area(a, b, c) > 0.0
}

/// Tests if `c` lies to the left of, or on, the oriented line through `a, b`.
pub fn is_left_on(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    triangle_area(a, b, c) >= 0.0
}

/// Tests if `c` lies strictly to the right of the oriented line through `a, b`.
pub fn is_right(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    triangle_area(a, b, c) < 0.0
}

/// Tests if `c` lies to the right of, or on, the oriented line through `a, b`.
pub fn is_right_on(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    triangle_area(a, b, c) <= 0.0
}

/// Classifies the turn direction of the triplet `(a, b, c)`.
pub fn corner_direction(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Orientation {
    let area = triangle_area(a, b, c);
    if area > 0.0 {
        Orientation::Ccw
    } else if area < 0.0 {
        Orientation::Cw
    } else {
        Orientation::Degenerate
    }
}

/// Tests if `p` lies inside the triangle `(a, b, c)`, border included.
///
/// Returns `None` if the triangle itself is degenerate, i.e. its three
/// corners are collinear.
pub fn point_in_triangle(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<bool> {
    let d1 = corner_direction(p, a, b);
    let d2 = corner_direction(p, b, c);
    let d3 = corner_direction(p, c, a);

    if d1 == Orientation::Degenerate
        && d2 == Orientation::Degenerate
        && d3 == Orientation::Degenerate
    {
        return None;
    }

    let has_cw = [d1, d2, d3].contains(&Orientation::Cw);
    let has_ccw = [d1, d2, d3].contains(&Orientation::Ccw);
    Some(!(has_cw && has_ccw))
}
