// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sylva Geom: exact shapes, affine transforms, and intersection predicates.
//!
//! Sylva Geom is the geometry kernel underneath the Sylva spatial trees.
//!
//! - Tuples: [`Point2`]/[`Vector2`] and [`Point3`]/[`Vector3`].
//! - Transforms: [`Transform2D`] (2×3 affine) and [`Transform3D`] (3×4 affine) with
//!   translation, rotation, and scale decomposition, plus [`Quaternion`].
//! - 2D shapes implementing [`Shape2D`]: [`Rectangle`], [`Circle`], [`Ellipse`],
//!   [`Segment`], [`OrientedRectangle`], and [`Path`].
//! - 3D shapes implementing [`Shape3D`]: [`AlignedBox3`] and [`Sphere3`].
//! - A path model: [`PathElement`]s, the [`PathIterator`] protocol, curve flattening
//!   with [`FlatteningPathIter`], and crossing numbers ([`Crossings`]).
//! - Pairwise intersection over the closed [`Shape`] sum via [`Shape::intersects`].
//!
//! Shapes convert to and from their [Kurbo] counterparts where one exists, so they
//! can be handed to renderers that speak Kurbo.
//!
//! ## Boundary conventions
//!
//! - Area shapes are closed: a point on the boundary is contained.
//! - Two area shapes intersect only when their interiors overlap.
//! - Segments and path edges intersect anything they touch.
//! - Empty shapes contain nothing and intersect nothing.
//!
//! ## Example
//!
//! ```rust
//! use sylva_geom::{Circle, Path, Point2, Rectangle, Shape, Shape2D};
//!
//! let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
//! assert!(rect.contains(Point2::new(10.0, 5.0)));
//! assert_eq!(rect.distance(Point2::new(13.0, 14.0)), 5.0);
//!
//! let far = Circle::new(Point2::new(15.0, 5.0), 4.0).unwrap();
//! assert!(!Shape::from(rect).intersects(&Shape::from(far)));
//!
//! let mut triangle = Path::new();
//! triangle.move_to(Point2::new(0.0, 0.0));
//! triangle.line_to(Point2::new(10.0, 0.0)).unwrap();
//! triangle.line_to(Point2::new(10.0, 10.0)).unwrap();
//! triangle.close_path();
//! let window = Rectangle::new(5.0, 5.0, 15.0, 15.0);
//! assert!(Shape::from(window).intersects(&Shape::from(triangle)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable the `libm` feature for targets
//! without `std`.
//!
//! [Kurbo]: kurbo

#![no_std]

extern crate alloc;

pub mod error;
pub mod intersect;
pub mod path;
pub mod shape;
pub mod transform2d;
pub mod transform3d;
pub mod tuple2;
pub mod tuple3;

pub use error::GeomError;
pub use path::Path;
pub use path::crossings::{CrossingOptions, Crossings};
pub use path::element::{PathElement, PathElementKind, WindingRule};
pub use path::flatten::FlatteningPathIter;
pub use path::iter::{Identity, PathIterator, PointMapper};
pub use shape::shape3::{AlignedBox3, Shape3, Shape3D, Sphere3};
pub use shape::{
    Circle, Ellipse, OrientedRectangle, Rectangle, Segment, Shape, Shape2D, ShapeKind,
};
pub use transform2d::Transform2D;
pub use transform3d::{Quaternion, Transform3D};
pub use tuple2::{Point2, Vector2};
pub use tuple3::{Point3, Vector3};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kurbo_rect_round_trips() {
        let r = Rectangle::new(1.0, 2.0, 3.0, 4.0);
        let k: kurbo::Rect = r.into();
        assert_eq!(k, kurbo::Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Rectangle::from(k), r);
    }
}
