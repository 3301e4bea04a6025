// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D shapes and their common capability set.

use alloc::boxed::Box;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::path::iter::PathIterator;
use crate::path::Path;
use crate::transform2d::Transform2D;
use crate::tuple2::{Point2, Vector2};

pub mod circle;
pub mod ellipse;
pub mod oriented;
pub mod rectangle;
pub mod segment;
pub mod shape3;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use oriented::OrientedRectangle;
pub use rectangle::Rectangle;
pub use segment::Segment;

/// Queries every 2D shape answers.
///
/// Distances are measured from a point to the closest point of the shape, so
/// they are zero for contained points.
pub trait Shape2D {
    /// Whether the shape covers no area (or, for open shapes, has no extent).
    fn is_empty(&self) -> bool;

    /// Whether `p` belongs to the shape.
    fn contains(&self, p: Point2) -> bool;

    /// Point of the shape nearest to `p`; `p` itself when contained.
    fn closest_point_to(&self, p: Point2) -> Point2;

    /// Squared Euclidean distance from `p` to the shape.
    fn distance_squared(&self, p: Point2) -> f64 {
        self.closest_point_to(p).distance_squared(p)
    }

    /// Euclidean distance from `p` to the shape.
    fn distance(&self, p: Point2) -> f64 {
        self.distance_squared(p).sqrt()
    }

    /// Manhattan distance from `p` to the closest point of the shape.
    fn distance_l1(&self, p: Point2) -> f64 {
        self.closest_point_to(p).distance_l1(p)
    }

    /// Chebyshev distance from `p` to the closest point of the shape.
    fn distance_linf(&self, p: Point2) -> f64 {
        self.closest_point_to(p).distance_linf(p)
    }

    /// Smallest axis-aligned rectangle enclosing the shape.
    fn to_bounding_box(&self) -> Rectangle;

    /// Move the shape by `v`.
    fn translate(&mut self, v: Vector2);

    /// Outline of the shape, optionally mapped through `transform`.
    fn path_iter(&self, transform: Option<&Transform2D>) -> Box<dyn PathIterator + '_>;

    /// The outline mapped through `transform`, as a standalone path.
    fn create_transformed_shape(&self, transform: &Transform2D) -> Path {
        Path::from_path_iter(self.path_iter(Some(transform)))
    }
}

/// Discriminant of a [`Shape`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Rectangle`].
    Rectangle,
    /// [`Circle`].
    Circle,
    /// [`Ellipse`].
    Ellipse,
    /// [`Segment`].
    Segment,
    /// [`OrientedRectangle`].
    OrientedRectangle,
    /// [`Path`].
    Path,
}

/// Closed sum of the 2D shape kinds.
///
/// Pairwise intersection goes through [`Shape::intersects`], which dispatches
/// to a dedicated routine for every pair of kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle.
    Rectangle(Rectangle),
    /// Circle.
    Circle(Circle),
    /// Axis-aligned ellipse.
    Ellipse(Ellipse),
    /// Line segment.
    Segment(Segment),
    /// Rotated rectangle.
    OrientedRectangle(OrientedRectangle),
    /// Multi-segment path.
    Path(Path),
}

impl Shape {
    /// Kind of the wrapped shape.
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Ellipse(_) => ShapeKind::Ellipse,
            Self::Segment(_) => ShapeKind::Segment,
            Self::OrientedRectangle(_) => ShapeKind::OrientedRectangle,
            Self::Path(_) => ShapeKind::Path,
        }
    }

    /// Whether the two shapes intersect.
    ///
    /// Two areas must share interior points; segments and open paths
    /// intersect anything they touch. Empty shapes intersect nothing.
    pub fn intersects(&self, other: &Self) -> bool {
        crate::intersect::intersects(self, other)
    }

    /// The wrapped shape as a trait object.
    pub fn as_shape2d(&self) -> &dyn Shape2D {
        match self {
            Self::Rectangle(s) => s,
            Self::Circle(s) => s,
            Self::Ellipse(s) => s,
            Self::Segment(s) => s,
            Self::OrientedRectangle(s) => s,
            Self::Path(s) => s,
        }
    }

    fn as_shape2d_mut(&mut self) -> &mut dyn Shape2D {
        match self {
            Self::Rectangle(s) => s,
            Self::Circle(s) => s,
            Self::Ellipse(s) => s,
            Self::Segment(s) => s,
            Self::OrientedRectangle(s) => s,
            Self::Path(s) => s,
        }
    }
}

impl Shape2D for Shape {
    fn is_empty(&self) -> bool {
        self.as_shape2d().is_empty()
    }

    fn contains(&self, p: Point2) -> bool {
        self.as_shape2d().contains(p)
    }

    fn closest_point_to(&self, p: Point2) -> Point2 {
        self.as_shape2d().closest_point_to(p)
    }

    fn distance_squared(&self, p: Point2) -> f64 {
        self.as_shape2d().distance_squared(p)
    }

    fn distance_l1(&self, p: Point2) -> f64 {
        self.as_shape2d().distance_l1(p)
    }

    fn distance_linf(&self, p: Point2) -> f64 {
        self.as_shape2d().distance_linf(p)
    }

    fn to_bounding_box(&self) -> Rectangle {
        self.as_shape2d().to_bounding_box()
    }

    fn translate(&mut self, v: Vector2) {
        self.as_shape2d_mut().translate(v);
    }

    fn path_iter(&self, transform: Option<&Transform2D>) -> Box<dyn PathIterator + '_> {
        self.as_shape2d().path_iter(transform)
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(s: $variant) -> Self {
                    Self::$variant(s)
                }
            }
        )*
    };
}

impl_from_shape!(Rectangle, Circle, Ellipse, Segment, OrientedRectangle, Path);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_delegates_to_variants() {
        let mut s = Shape::from(Rectangle::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(s.kind(), ShapeKind::Rectangle);
        assert!(s.contains(Point2::new(1.0, 1.0)));
        s.translate(Vector2::new(10.0, 0.0));
        assert_eq!(s.to_bounding_box(), Rectangle::new(10.0, 0.0, 12.0, 2.0));
        assert_eq!(s.distance(Point2::new(15.0, 1.0)), 3.0);
    }

    #[test]
    fn transformed_shape_is_a_path() {
        let r = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let p = r.create_transformed_shape(&Transform2D::from_translation(5.0, 5.0));
        assert_eq!(p.to_bounding_box(), Rectangle::new(5.0, 5.0, 6.0, 6.0));
        assert!(p.is_polyline());
        assert!(p.contains(Point2::new(5.5, 5.5)));
    }
}
