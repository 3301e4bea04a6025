// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circles.

use alloc::boxed::Box;

use crate::error::GeomError;
use crate::path::iter::{Identity, PathIterator, PointMapper, ShapePathIter};
use crate::shape::{Rectangle, Shape2D};
use crate::transform2d::Transform2D;
use crate::tuple2::{Point2, Vector2};

/// A closed disk.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Create a circle. Fails on a negative or non-finite radius.
    pub fn new(center: Point2, radius: f64) -> Result<Self, GeomError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeomError::InvalidArgument("circle radius must be finite and non-negative"));
        }
        Ok(Self { center, radius })
    }

    /// Center of the circle.
    pub const fn center(&self) -> Point2 {
        self.center
    }

    /// Radius of the circle.
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Move the center to `center`.
    pub fn set_center(&mut self, center: Point2) {
        self.center = center;
    }

    /// Change the radius. Fails on a negative or non-finite radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), GeomError> {
        *self = Self::new(self.center, radius)?;
        Ok(())
    }

    /// Outline iterator mapping points through `mapper`. A zero radius yields nothing.
    pub fn path_iter_with<M: PointMapper>(&self, mapper: M) -> ShapePathIter<M> {
        if self.is_empty() {
            ShapePathIter::empty(mapper, false)
        } else {
            ShapePathIter::ellipse(self.center, self.radius, self.radius, mapper)
        }
    }
}

impl Shape2D for Circle {
    fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }

    fn contains(&self, p: Point2) -> bool {
        self.center.distance(p) <= self.radius
    }

    fn closest_point_to(&self, p: Point2) -> Point2 {
        let v = p - self.center;
        let len = v.length();
        if len <= self.radius {
            return p;
        }
        self.center + v * (self.radius / len)
    }

    fn distance(&self, p: Point2) -> f64 {
        (self.center.distance(p) - self.radius).max(0.0)
    }

    fn to_bounding_box(&self) -> Rectangle {
        let r = Vector2::new(self.radius, self.radius);
        Rectangle::from_corners(self.center - r, self.center + r)
    }

    fn translate(&mut self, v: Vector2) {
        self.center += v;
    }

    fn path_iter(&self, transform: Option<&Transform2D>) -> Box<dyn PathIterator + '_> {
        match transform {
            Some(t) => Box::new(self.path_iter_with(*t)),
            None => Box::new(self.path_iter_with(Identity)),
        }
    }
}

impl From<Circle> for kurbo::Circle {
    fn from(c: Circle) -> Self {
        Self::new(c.center, c.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_validated() {
        assert!(Circle::new(Point2::ORIGIN, -1.0).is_err());
        assert!(Circle::new(Point2::ORIGIN, f64::NAN).is_err());
        let mut c = Circle::new(Point2::ORIGIN, 1.0).unwrap();
        assert!(c.set_radius(-2.0).is_err());
        assert_eq!(c.radius(), 1.0);
    }

    #[test]
    fn containment_and_distance() {
        let c = Circle::new(Point2::new(1.0, 1.0), 2.0).unwrap();
        assert!(c.contains(Point2::new(3.0, 1.0)));
        assert!(!c.contains(Point2::new(3.1, 1.0)));
        assert_eq!(c.distance(Point2::new(1.0, 6.0)), 3.0);
        assert_eq!(c.distance(Point2::new(1.5, 1.0)), 0.0);
        assert_eq!(c.closest_point_to(Point2::new(1.0, 6.0)), Point2::new(1.0, 3.0));
        assert_eq!(c.to_bounding_box(), Rectangle::new(-1.0, -1.0, 3.0, 3.0));
    }

    #[test]
    fn zero_radius_has_no_outline() {
        let c = Circle::new(Point2::new(4.0, 4.0), 0.0).unwrap();
        assert!(c.is_empty());
        assert_eq!(c.path_iter(None).count(), 0);
        let d = Circle::new(Point2::new(4.0, 4.0), 1.0).unwrap();
        assert_eq!(d.path_iter(None).count(), 6);
    }
}
