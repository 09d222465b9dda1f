//! Convex decomposition of a simple polygon.
//! Based on the algorithm by Mark Bayazit <https://mnbayazit.com/406/bayazit>.

use log::trace;
use na;

use crate::math::{Point, Real};
use crate::utils::{
    self, is_left, is_left_on, is_right, is_right_on, line_intersection, segment_intersection,
    wrap_index,
};

/// Tolerance below which an intersection determinant is considered degenerate.
///
/// This applies to the edge-crossing tests only; the turn predicates remain
/// exact-sign comparisons.
const EPSILON: Real = 1.0e-4;

/// Parameters for the [`convex_partition`] function.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConvexPartitionParams {
    /// The maximum number of vertices allowed per convex piece.
    ///
    /// Convex pieces exceeding this count are bisected until they fit. The
    /// default of 8 matches the vertex cap of Box2D polygon shapes
    /// (`b2_maxPolygonVertices`).
    pub max_polygon_vertices: usize,
    /// Emit a `trace`-level log entry for every edge obstruction test
    /// performed while searching for a split diagonal. Diagnostic only.
    pub trace: bool,
}

impl Default for ConvexPartitionParams {
    fn default() -> Self {
        Self {
            max_polygon_vertices: 8,
            trace: false,
        }
    }
}

/// Decomposes a simple polygon into convex pieces.
///
/// The input is an ordered vertex sequence, implicitly closed. Clockwise
/// inputs are reversed before decomposition; every returned piece winds
/// counter-clockwise, contains no reflex vertex, has at most
/// [`ConvexPartitionParams::max_polygon_vertices`] vertices, and carries no
/// collinear vertices.
///
/// Inputs with fewer than three vertices produce an empty result rather than
/// an error. Self-intersecting inputs are not detected and may produce
/// overlapping pieces; callers should treat an empty result as
/// "decomposition unavailable" and keep the original polygon.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use nalgebra::Point2;
/// use polypart2d::transformation::{convex_partition, ConvexPartitionParams};
///
/// // A dart with a reflex vertex at (2.0, 2.0).
/// let dart = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 4.0),
/// ];
///
/// let pieces = convex_partition(&dart, &ConvexPartitionParams::default());
/// assert!(pieces.len() >= 2);
/// # }
/// ```
pub fn convex_partition(
    vertices: &[Point<Real>],
    params: &ConvexPartitionParams,
) -> Vec<Vec<Point<Real>>> {
    let mut pieces = Vec::new();
    partition_recursive(vertices.to_vec(), params, &mut pieces);

    // The pieces are not guaranteed to be free of collinear vertices; pieces
    // reduced to nothing by the cleanup are dropped.
    pieces
        .into_iter()
        .map(|piece| utils::remove_collinear_points(&piece, 0.0))
        .filter(|piece| !piece.is_empty())
        .collect()
}

// Reads a vertex with circular indexing.
fn at(vertices: &[Point<Real>], i: isize) -> Point<Real> {
    vertices[wrap_index(i, vertices.len())]
}

// A vertex is reflex when it turns clockwise relative to its neighbors.
// Precondition: counter-clockwise winding.
fn is_reflex(vertices: &[Point<Real>], i: isize) -> bool {
    is_right(&at(vertices, i - 1), &at(vertices, i), &at(vertices, i + 1))
}

// Copies the vertex range `[first, last]`, both ends included, walking
// forward with wraparound.
fn copy_range(vertices: &[Point<Real>], first: isize, mut last: isize) -> Vec<Point<Real>> {
    while last < first {
        last += vertices.len() as isize;
    }

    (first..=last).map(|k| at(vertices, k)).collect()
}

// One step of the Bayazit algorithm: find the first reflex vertex, split the
// polygon along the best diagonal resolving it, and recurse on both halves.
// Convex polygons are bisected until they respect the vertex cap.
fn partition_recursive(
    mut vertices: Vec<Point<Real>>,
    params: &ConvexPartitionParams,
    out: &mut Vec<Vec<Point<Real>>>,
) {
    if vertices.len() < 3 {
        return;
    }

    // The reflex test assumes counter-clockwise winding.
    if !utils::is_ccw(&vertices) {
        vertices.reverse();
    }

    let len = vertices.len() as isize;

    for i in 0..len {
        if !is_reflex(&vertices, i) {
            continue;
        }

        let mut lower_dist = Real::MAX;
        let mut upper_dist = Real::MAX;
        let mut lower_int = None;
        let mut upper_int = None;
        let mut lower_index = 0;
        let mut upper_index = 0;

        for j in 0..len {
            // Extending the edge (i - 1, i) past i: if it crosses the edge
            // (j - 1, j), the crossing bounds the range of usable diagonals
            // from below. Only the closest crossing inside the polygon
            // counts.
            if is_left(&at(&vertices, i - 1), &at(&vertices, i), &at(&vertices, j))
                && is_right_on(&at(&vertices, i - 1), &at(&vertices, i), &at(&vertices, j - 1))
            {
                if let Some(p) = line_intersection(
                    &at(&vertices, i - 1),
                    &at(&vertices, i),
                    &at(&vertices, j),
                    &at(&vertices, j - 1),
                    EPSILON,
                ) {
                    if is_right(&at(&vertices, i + 1), &at(&vertices, i), &p) {
                        let d = na::distance_squared(&at(&vertices, i), &p);
                        if d < lower_dist {
                            lower_dist = d;
                            lower_int = Some(p);
                            lower_index = j;
                        }
                    }
                }
            }

            // Same on the other side: extend (i + 1, i) and track the
            // closest crossing with the edge (j, j + 1).
            if is_left(&at(&vertices, i + 1), &at(&vertices, i), &at(&vertices, j + 1))
                && is_right_on(&at(&vertices, i + 1), &at(&vertices, i), &at(&vertices, j))
            {
                if let Some(p) = line_intersection(
                    &at(&vertices, i + 1),
                    &at(&vertices, i),
                    &at(&vertices, j),
                    &at(&vertices, j + 1),
                    EPSILON,
                ) {
                    if is_left(&at(&vertices, i - 1), &at(&vertices, i), &p) {
                        let d = na::distance_squared(&at(&vertices, i), &p);
                        if d < upper_dist {
                            upper_dist = d;
                            upper_int = Some(p);
                            upper_index = j;
                        }
                    }
                }
            }
        }

        let (lower_poly, upper_poly) = split_at_reflex(
            &vertices,
            i,
            lower_index,
            upper_index,
            lower_int,
            upper_int,
            params,
        );

        // Solve the smaller half first to keep the recursion shallow.
        if lower_poly.len() < upper_poly.len() {
            partition_recursive(lower_poly, params, out);
            partition_recursive(upper_poly, params, out);
        } else {
            partition_recursive(upper_poly, params, out);
            partition_recursive(lower_poly, params, out);
        }
        return;
    }

    // No reflex vertex: the polygon is convex. Bisect it when it exceeds the
    // vertex cap, otherwise emit it as-is.
    if vertices.len() > params.max_polygon_vertices {
        let half = (vertices.len() / 2) as isize;
        let lower_poly = copy_range(&vertices, 0, half);
        let upper_poly = copy_range(&vertices, half, 0);
        partition_recursive(lower_poly, params, out);
        partition_recursive(upper_poly, params, out);
    } else {
        out.push(vertices);
    }
}

// Splits the polygon along the diagonal resolving the reflex vertex `i`.
// `lower_index`/`upper_index` bound the candidate range found by the
// edge-extension scan; `lower_int`/`upper_int` are the crossing points.
fn split_at_reflex(
    vertices: &[Point<Real>],
    i: isize,
    lower_index: isize,
    mut upper_index: isize,
    lower_int: Option<Point<Real>>,
    upper_int: Option<Point<Real>>,
    params: &ConvexPartitionParams,
) -> (Vec<Point<Real>>, Vec<Point<Real>>) {
    let len = vertices.len() as isize;

    if lower_index == (upper_index + 1) % len {
        // No vertex lies between the two crossings: close both halves
        // through a new point midway between them.
        let steiner = match (lower_int, upper_int) {
            (Some(lower), Some(upper)) => na::center(&lower, &upper),
            // A near-parallel crossing was rejected; the remaining point is
            // the only usable anchor.
            (Some(lower), None) => lower,
            (None, Some(upper)) => upper,
            (None, None) => at(vertices, i),
        };

        let mut lower_poly = copy_range(vertices, i, upper_index);
        lower_poly.push(steiner);
        let mut upper_poly = copy_range(vertices, lower_index, i);
        upper_poly.push(steiner);

        (lower_poly, upper_poly)
    } else {
        // Connect `i` to the visible vertex in [lower_index, upper_index]
        // with the highest score.
        let mut highest_score = 0.0;
        let mut best_index = lower_index;

        while upper_index < lower_index {
            upper_index += len;
        }

        for j in lower_index..=upper_index {
            if !can_see(vertices, i, j, params.trace) {
                continue;
            }

            let mut score = 1.0 / (na::distance_squared(&at(vertices, i), &at(vertices, j)) + 1.0);
            if is_reflex(vertices, j) {
                // A reflex target can absorb two reflex corners in one cut.
                if is_right_on(&at(vertices, j - 1), &at(vertices, j), &at(vertices, i))
                    && is_left_on(&at(vertices, j + 1), &at(vertices, j), &at(vertices, i))
                {
                    score += 3.0;
                } else {
                    score += 2.0;
                }
            } else {
                score += 1.0;
            }

            if score > highest_score {
                best_index = j;
                highest_score = score;
            }
        }

        (
            copy_range(vertices, i, best_index),
            copy_range(vertices, best_index, i),
        )
    }
}

// Visibility between the vertices `i` and `j`: each must lie inside the
// interior cone of the other, and the open diagonal between them must not
// cross any polygon edge.
fn can_see(vertices: &[Point<Real>], i: isize, j: isize, trace_tests: bool) -> bool {
    if is_reflex(vertices, i) {
        if is_left_on(&at(vertices, i), &at(vertices, i - 1), &at(vertices, j))
            && is_right_on(&at(vertices, i), &at(vertices, i + 1), &at(vertices, j))
        {
            return false;
        }
    } else if is_right_on(&at(vertices, i), &at(vertices, i + 1), &at(vertices, j))
        || is_left_on(&at(vertices, i), &at(vertices, i - 1), &at(vertices, j))
    {
        return false;
    }

    if is_reflex(vertices, j) {
        if is_left_on(&at(vertices, j), &at(vertices, j - 1), &at(vertices, i))
            && is_right_on(&at(vertices, j), &at(vertices, j + 1), &at(vertices, i))
        {
            return false;
        }
    } else if is_right_on(&at(vertices, j), &at(vertices, j + 1), &at(vertices, i))
        || is_left_on(&at(vertices, j), &at(vertices, j - 1), &at(vertices, i))
    {
        return false;
    }

    let p1 = at(vertices, i);
    let p2 = at(vertices, j);

    for k in 0..vertices.len() as isize {
        let q1 = at(vertices, k);
        let q2 = at(vertices, k + 1);

        // Edges incident to either endpoint cannot obstruct the diagonal.
        if p1 == q1 || p1 == q2 || p2 == q1 || p2 == q2 {
            continue;
        }

        if trace_tests {
            trace!("testing diagonal ({i}, {j}) against edge ({k}, {})", k + 1);
        }

        if let Some(p) = segment_intersection(&p1, &p2, &q1, &q2, EPSILON) {
            // A crossing at an edge endpoint is a vertex touch, not an
            // obstruction.
            if p != q1 && p != q2 {
                return false;
            }
        }
    }

    true
}
