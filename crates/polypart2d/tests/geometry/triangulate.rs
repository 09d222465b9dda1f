use approx::assert_relative_eq;
use nalgebra::Point2;
use polypart2d::transformation::{triangulate, TriangulationError, TriangulationParams};
use polypart2d::utils::triangle_area;

// Sum of the unsigned areas of the emitted triangles.
fn covered_area(vertices: &[Point2<f32>]) -> f32 {
    vertices
        .chunks(3)
        .map(|t| triangle_area(&t[0], &t[1], &t[2]).abs() * 0.5)
        .sum()
}

#[test]
fn l_shape_is_fully_covered() {
    let outline = vec![
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 0.0),
        Point2::new(3.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 2.0),
        Point2::new(0.0, 2.0),
        // Closing point, dropped by deduplication.
        Point2::new(0.0, 0.0),
    ];
    let vertices = triangulate(&outline, &TriangulationParams::default()).unwrap();

    assert_eq!(vertices.len() % 3, 0);
    assert_eq!(vertices.len() / 3, 4);
    assert_relative_eq!(covered_area(&vertices), 4.0);

    // Every face comes out clockwise.
    for triangle in vertices.chunks(3) {
        assert!(triangle_area(&triangle[0], &triangle[1], &triangle[2]) < 0.0);
    }
}

#[test]
fn below_four_points_is_success_without_triangles() {
    let params = TriangulationParams::default();

    assert_eq!(triangulate(&[], &params), Ok(Vec::new()));
    assert_eq!(
        triangulate(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], &params),
        Ok(Vec::new())
    );
    assert_eq!(
        triangulate(
            &[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
            ],
            &params,
        ),
        Ok(Vec::new())
    );
}

#[test]
fn oversized_contours_are_rejected() {
    let params = TriangulationParams { max_points: 16 };

    let mut contour = Vec::new();
    for k in 0..32 {
        let angle = (k as f32) * std::f32::consts::TAU / 32.0;
        contour.push(Point2::new(angle.cos(), angle.sin()));
    }

    assert_eq!(
        triangulate(&contour, &params),
        Err(TriangulationError::TooManyPoints { given: 32, max: 16 })
    );

    // The same contour passes with the default bound.
    let vertices = triangulate(&contour, &TriangulationParams::default()).unwrap();
    assert_eq!(vertices.len() / 3, 30);
}
