//! Removal of collinear polygon vertices.

use crate::math::{Point, Real};
use crate::utils::triangle_area;

/// Returns `vertices` without every vertex that is collinear with its two
/// neighbors.
///
/// A vertex is dropped when the absolute signed area of the triangle it forms
/// with its original neighbors is within `tolerance`; a zero tolerance drops
/// exactly collinear vertices only. Polygons with fewer than three vertices
/// are returned unchanged.
pub fn remove_collinear_points(vertices: &[Point<Real>], tolerance: Real) -> Vec<Point<Real>> {
    if vertices.len() < 3 {
        return vertices.to_vec();
    }

    let mut simplified = Vec::with_capacity(vertices.len());
    for i in 0..vertices.len() {
        let prev = vertices[if i == 0 { vertices.len() - 1 } else { i - 1 }];
        let next = vertices[(i + 1) % vertices.len()];

        if triangle_area(&prev, &vertices[i], &next).abs() <= tolerance {
            continue;
        }
        simplified.push(vertices[i]);
    }
    simplified
}
