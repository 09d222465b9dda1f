//! Ear-clipping triangulation of a single closed contour.
//! Based on <https://github.com/ivanfratric/polypartition>.

use ordered_float::OrderedFloat;

use crate::math::{Point, Real};
use crate::utils::{corner_direction, point_in_triangle, Orientation};

/// Per-vertex state of the clipping loop.
#[derive(Clone, Default)]
struct EarVertex {
    /// Still part of the contour, i.e. not clipped yet.
    active: bool,
    /// The vertex and its two neighbors currently form a clippable ear.
    is_ear: bool,
    /// Cosine of the corner angle; sharper ears are clipped first.
    sharpness: Real,
    /// Index of the previous active vertex.
    prev: usize,
    /// Index of the next active vertex.
    next: usize,
}

// Recomputes `sharpness` and `is_ear` after the neighbors of `idx` changed.
// Fails when the contour is degenerate enough to produce NaNs, or when an
// ear test runs into a fully collinear triangle.
fn update_vertex(idx: usize, state: &mut EarVertex, vertices: &[Point<Real>]) -> bool {
    let p = vertices[idx];
    let prev = vertices[state.prev];
    let next = vertices[state.next];

    let to_prev = (prev - p).normalize();
    let to_next = (next - p).normalize();
    state.sharpness = to_prev.dot(&to_next);
    if state.sharpness.is_nan() {
        return false;
    }

    // An ear tip must be convex and its triangle must not contain any other
    // contour point.
    state.is_ear = corner_direction(&prev, &p, &next) == Orientation::Ccw;
    if state.is_ear {
        for (k, other) in vertices.iter().enumerate() {
            if k == state.prev || k == idx || k == state.next {
                continue;
            }

            match point_in_triangle(other, &prev, &p, &next) {
                Some(true) => {
                    state.is_ear = false;
                    break;
                }
                Some(false) => {}
                None => return false,
            }
        }
    }

    true
}

/// Triangulates the counter-clockwise contour `vertices` by ear clipping,
/// sharpest ear first.
///
/// Returns the triangle index triples, or `None` when the contour winds
/// clockwise or is too degenerate to clip.
pub(crate) fn triangulate_ear_clipping(vertices: &[Point<Real>]) -> Option<Vec<[u32; 3]>> {
    let n = vertices.len();
    if n < 3 {
        return None;
    }

    let mut state = vec![EarVertex::default(); n];
    for (i, info) in state.iter_mut().enumerate() {
        info.active = true;
        info.prev = if i == 0 { n - 1 } else { i - 1 };
        info.next = if i == n - 1 { 0 } else { i + 1 };
        if !update_vertex(i, info, vertices) {
            return None;
        }
    }

    let mut triangles = Vec::with_capacity(n - 2);

    for round in 0..n - 3 {
        // Clip the sharpest remaining ear; no ear means the contour is not
        // simple.
        let ear = state
            .iter()
            .enumerate()
            .filter(|(_, info)| info.active && info.is_ear)
            .max_by_key(|(_, info)| OrderedFloat(info.sharpness))
            .map(|(i, _)| i)?;

        state[ear].active = false;
        let EarVertex { prev, next, .. } = state[ear];

        triangles.push([prev as u32, ear as u32, next as u32]);

        // Bridge the gap left by the clipped tip.
        state[prev].next = next;
        state[next].prev = prev;

        // The final three vertices are necessarily convex; nothing left to
        // update for them.
        if round == n - 4 {
            break;
        }

        if !update_vertex(prev, &mut state[prev], vertices)
            || !update_vertex(next, &mut state[next], vertices)
        {
            return None;
        }
    }

    // The remaining active triple is the last triangle.
    if let Some((i, info)) = state.iter().enumerate().find(|(_, info)| info.active) {
        triangles.push([info.prev as u32, i as u32, info.next as u32]);
    }

    Some(triangles)
}
