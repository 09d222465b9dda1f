mod convex_partition;
mod triangulate;
