use approx::assert_relative_eq;
use nalgebra::Point2;
use polypart2d::transformation::{convex_partition, ConvexPartitionParams};
use polypart2d::utils::{is_ccw, signed_area, triangle_area};

// Every consecutive triple of a counter-clockwise convex polygon turns left
// or goes straight. `tolerance` absorbs floating-point noise on computed
// vertices; pieces made of input vertices only are exact.
fn assert_convex(piece: &[Point2<f32>], tolerance: f32) {
    for i in 0..piece.len() {
        let a = piece[i];
        let b = piece[(i + 1) % piece.len()];
        let c = piece[(i + 2) % piece.len()];
        assert!(
            triangle_area(&a, &b, &c) >= -tolerance,
            "reflex corner {b:?} in piece {piece:?}"
        );
    }
}

fn total_area(pieces: &[Vec<Point2<f32>>]) -> f32 {
    pieces.iter().map(|piece| signed_area(piece)).sum()
}

#[test]
fn dart_partition_covers_the_input() {
    let dart = vec![
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 4.0),
        Point2::new(2.0, 2.0),
        Point2::new(0.0, 4.0),
    ];
    let params = ConvexPartitionParams::default();
    let pieces = convex_partition(&dart, &params);

    assert!(pieces.len() >= 2);
    for piece in &pieces {
        assert!(piece.len() <= params.max_polygon_vertices);
        assert!(is_ccw(piece));
        assert_convex(piece, 0.0);
    }
    assert_relative_eq!(total_area(&pieces), signed_area(&dart));
}

#[test]
fn plus_shape_partition() {
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
    let params = ConvexPartitionParams::default();
    let pieces = convex_partition(&plus, &params);

    assert!(pieces.len() >= 3);
    for piece in &pieces {
        assert!(piece.len() >= 3);
        assert!(piece.len() <= params.max_polygon_vertices);
        assert!(is_ccw(piece));
        assert_convex(piece, 1.0e-5);
    }
    assert_relative_eq!(total_area(&pieces), 5.0, max_relative = 1.0e-5);
}

#[test]
fn vertex_cap_is_honored_on_convex_inputs() {
    let mut hexadecagon = Vec::new();
    for k in 0..16 {
        let angle = (k as f32) * std::f32::consts::TAU / 16.0;
        hexadecagon.push(Point2::new(angle.cos(), angle.sin()));
    }

    for max_polygon_vertices in [3, 4, 8] {
        let params = ConvexPartitionParams {
            max_polygon_vertices,
            ..Default::default()
        };
        let pieces = convex_partition(&hexadecagon, &params);

        assert!(pieces.iter().all(|piece| piece.len() <= max_polygon_vertices));
        assert_relative_eq!(
            total_area(&pieces),
            signed_area(&hexadecagon),
            max_relative = 1.0e-5
        );
    }
}

#[test]
fn random_star_polygons_partition_cleanly() {
    for seed in 0..8 {
        let mut rng = oorandom::Rand32::new(seed);
        let mut star = Vec::new();
        for k in 0..24 {
            let angle = (k as f32) * std::f32::consts::TAU / 24.0;
            let radius = 1.0 + rng.rand_float();
            star.push(Point2::new(radius * angle.cos(), radius * angle.sin()));
        }

        let params = ConvexPartitionParams::default();
        let pieces = convex_partition(&star, &params);

        assert!(!pieces.is_empty(), "seed {seed} produced no pieces");
        for piece in &pieces {
            assert!(piece.len() >= 3);
            assert!(piece.len() <= params.max_polygon_vertices);
            assert!(is_ccw(piece));
            assert_convex(piece, 1.0e-3);
        }
        assert_relative_eq!(
            total_area(&pieces),
            signed_area(&star),
            max_relative = 1.0e-3
        );
    }
}
