use nalgebra::Point2;
use polypart2d::transformation::{triangulate, TriangulationParams};

fn main() {
    // An L-shaped ground outline, explicitly closed.
    let outline = vec![
        Point2::new(0.0, 0.0),
        Point2::new(3.0, 0.0),
        Point2::new(3.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 2.0),
        Point2::new(0.0, 2.0),
        Point2::new(0.0, 0.0),
    ];

    match triangulate(&outline, &TriangulationParams::default()) {
        Ok(vertices) => {
            println!("triangulated into {} triangles:", vertices.len() / 3);
            for triangle in vertices.chunks(3) {
                let corners: Vec<_> = triangle.iter().map(|p| (p.x, p.y)).collect();
                println!("  {corners:?}");
            }
        }
        Err(err) => println!("triangulation failed: {err}"),
    }
}
