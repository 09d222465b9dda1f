use nalgebra::Point2;
use polypart2d::transformation::{convex_partition, ConvexPartitionParams};

fn main() {
    // A plus-shaped polygon with four reflex corners.
    let plus = vec![
        Point2::new(1.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(2.0, 1.0),
        Point2::new(3.0, 1.0),
        Point2::new(3.0, 2.0),
        Point2::new(2.0, 2.0),
        Point2::new(2.0, 3.0),
        Point2::new(1.0, 3.0),
        Point2::new(1.0, 2.0),
        Point2::new(0.0, 2.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
    ];

    let pieces = convex_partition(&plus, &ConvexPartitionParams::default());

    println!("decomposed into {} convex pieces:", pieces.len());
    for (i, piece) in pieces.iter().enumerate() {
        let corners: Vec<_> = piece.iter().map(|p| (p.x, p.y)).collect();
        println!("  piece {i}: {corners:?}");
    }
}
