// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape basics.
//!
//! Build a few shapes, test intersections and distances, then map one through a transform.
//!
//! Run:
//! - `cargo run -p sylva_demos --example shapes_basics`

use sylva_geom::{Circle, Path, Point2, Rectangle, Shape, Shape2D, ShapeKind, Transform2D};

fn main() {
    let square = Shape::from(Rectangle::new(0.0, 0.0, 10.0, 10.0));
    let near = Shape::from(Circle::new(Point2::new(12.0, 5.0), 3.0).unwrap());
    let far = Shape::from(Circle::new(Point2::new(15.0, 5.0), 4.0).unwrap());

    println!("square meets near circle: {}", square.intersects(&near));
    println!("square meets far circle: {}", square.intersects(&far));
    assert!(square.intersects(&near));
    assert!(!square.intersects(&far), "a gap of one unit separates them");

    // Distance is zero exactly when the point is contained.
    let p = Point2::new(13.0, 14.0);
    println!("distance from {p:?} to square: {}", square.distance(p));
    assert_eq!(square.distance(p), 5.0);
    assert_eq!(square.closest_point_to(p), Point2::new(10.0, 10.0));

    // A triangle path intersects a rectangle that only covers one corner of it.
    let mut triangle = Path::new();
    triangle.move_to(Point2::new(0.0, 0.0));
    triangle.line_to(Point2::new(10.0, 0.0)).unwrap();
    triangle.line_to(Point2::new(10.0, 10.0)).unwrap();
    triangle.close_path();
    let corner = Shape::from(Rectangle::new(5.0, 5.0, 15.0, 15.0));
    let triangle = Shape::from(triangle);
    println!("triangle meets corner: {}", triangle.intersects(&corner));
    assert!(triangle.intersects(&corner));

    // Transforming any shape yields a path.
    let rotate = Transform2D::from_rotation(core::f64::consts::FRAC_PI_4);
    let diamond = square.create_transformed_shape(&rotate);
    let bounds = diamond.to_bounding_box();
    println!("rotated square bounds: {bounds:?}");
    assert_eq!(Shape::from(diamond).kind(), ShapeKind::Path);

    // Rectangles convert to and from Kurbo.
    let k: kurbo::Rect = Rectangle::new(1.0, 2.0, 3.0, 4.0).into();
    println!("as kurbo: {k:?}");
}
