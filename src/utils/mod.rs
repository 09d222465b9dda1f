//! Various unsorted geometrical and logical operators.

pub use self::cleanup::remove_collinear_points;
pub use self::orientation::{
    corner_direction, is_left, is_left_on, is_right, is_right_on, point_in_triangle,
    triangle_area, Orientation,
};
pub use self::segments_intersection::{line_intersection, segment_intersection};
pub use self::signed_area::{is_ccw, signed_area};
pub use self::wrap_index::wrap_index;

mod cleanup;
mod orientation;
mod segments_intersection;
mod signed_area;
mod wrap_index;
