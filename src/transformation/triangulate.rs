//! Flat triangle-list generation from a closed contour.

use thiserror::Error;

use crate::math::{Point, Real};
use crate::transformation::ear_clipping::triangulate_ear_clipping;
use crate::utils;

/// Parameters for the [`triangulate`] function.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangulationParams {
    /// The maximum number of contour points accepted, counted after
    /// duplicate removal.
    ///
    /// Larger contours are rejected with
    /// [`TriangulationError::TooManyPoints`].
    pub max_points: usize,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self { max_points: 3000 }
    }
}

/// The reason a contour could not be triangulated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// The contour holds more distinct points than
    /// [`TriangulationParams::max_points`].
    #[error("the contour has {given} points but at most {max} are supported")]
    TooManyPoints {
        /// Number of distinct points in the contour.
        given: usize,
        /// The configured point bound.
        max: usize,
    },
    /// The contour is degenerate or crosses itself in a way ear clipping
    /// cannot resolve.
    #[error("the contour could not be triangulated")]
    InvalidContour,
}

/// Triangulates the closed contour formed by `points` and returns the
/// cleaned-up contour together with the triangle index triples into it.
///
/// This is the index-level twin of [`triangulate`]: duplicate points are
/// dropped (first occurrence kept) and the winding is normalized to
/// counter-clockwise before clipping, so the indices refer to the returned
/// contour, not to `points`. Contours with fewer than four distinct points
/// yield no triangles.
pub fn triangulate_with_indices(
    points: &[Point<Real>],
    params: &TriangulationParams,
) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), TriangulationError> {
    // Repeated points, e.g. the closing point of an explicitly closed
    // polyline, would produce zero-length edges.
    let mut contour: Vec<Point<Real>> = Vec::with_capacity(points.len());
    for point in points {
        if !contour.contains(point) {
            contour.push(*point);
        }
    }

    // Contours this small produce no triangles rather than an error.
    if contour.len() < 4 {
        return Ok((contour, Vec::new()));
    }

    if contour.len() > params.max_points {
        return Err(TriangulationError::TooManyPoints {
            given: contour.len(),
            max: params.max_points,
        });
    }

    // Ear clipping requires counter-clockwise winding.
    if !utils::is_ccw(&contour) {
        contour.reverse();
    }

    let triangles =
        triangulate_ear_clipping(&contour).ok_or(TriangulationError::InvalidContour)?;
    Ok((contour, triangles))
}

/// Triangulates the closed contour formed by `points`.
///
/// Returns a flat list of triangle corners, three per triangle, each triangle
/// wound clockwise for mesh consumers that treat clockwise faces as
/// front-facing. Duplicate input points are dropped first; a contour with
/// fewer than four distinct points yields an empty list. The output covers
/// the contour's interior exactly, making it suitable for ground or
/// navigation surfaces, not for physics shapes.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use nalgebra::Point2;
/// use polypart2d::transformation::{triangulate, TriangulationParams};
///
/// let square = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let vertices = triangulate(&square, &TriangulationParams::default()).unwrap();
/// assert_eq!(vertices.len(), 6); // Two triangles.
/// # }
/// ```
pub fn triangulate(
    points: &[Point<Real>],
    params: &TriangulationParams,
) -> Result<Vec<Point<Real>>, TriangulationError> {
    let (contour, triangles) = triangulate_with_indices(points, params)?;

    let mut vertices = Vec::with_capacity(triangles.len() * 3);
    for [a, b, c] in triangles {
        // The clipper emits counter-clockwise triangles; swapping the second
        // and third corners flips them clockwise.
        vertices.push(contour[a as usize]);
        vertices.push(contour[c as usize]);
        vertices.push(contour[b as usize]);
    }

    Ok(vertices)
}
