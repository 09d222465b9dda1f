//! Signed area and winding of an implicitly closed polygon.

use crate::math::{Point, Real};

/// The signed area of the polygon `vertices`, implicitly closed.
///
/// The area is positive when the vertices wind counter-clockwise. Polygons
/// with fewer than three vertices have zero area.
pub fn signed_area(vertices: &[Point<Real>]) -> Real {
    if vertices.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % vertices.len()];
        sum += p1.x * p2.y - p1.y * p2.x;
    }
    sum * 0.5
}

/// Tests if `vertices` winds counter-clockwise.
///
/// Polygons with fewer than three vertices are vacuously counter-clockwise.
pub fn is_ccw(vertices: &[Point<Real>]) -> bool {
    vertices.len() < 3 || signed_area(vertices) > 0.0
}
