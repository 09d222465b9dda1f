//! Decomposition of polygons into convex pieces and flat triangle lists.

pub use self::convex_decomposition::{convex_partition, ConvexPartitionParams};
pub use self::triangulate::{
    triangulate, triangulate_with_indices, TriangulationError, TriangulationParams,
};

mod convex_decomposition;
pub(crate) mod ear_clipping;
mod triangulate;
