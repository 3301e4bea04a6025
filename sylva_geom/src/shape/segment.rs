// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments.

use alloc::boxed::Box;

use crate::path::iter::{Identity, PathIterator, PointMapper, ShapePathIter};
use crate::shape::{Rectangle, Shape2D};
use crate::transform2d::Transform2D;
use crate::tuple2::{Point2, Vector2};

/// Distance under which a point counts as lying on a segment.
pub const SEGMENT_CONTAINS_EPSILON: f64 = 1e-9;

/// Point of `a–b` closest to `p`. A degenerate segment collapses to `a`.
pub(crate) fn closest_point_on_segment(a: Point2, b: Point2, p: Point2) -> Point2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = (p - a).dot(ab) / len_sq;
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        a + ab * t
    }
}

/// Sign of the turn `a → b → c`: positive counter-clockwise (y-up), zero when collinear.
pub(crate) fn orientation(a: Point2, b: Point2, c: Point2) -> f64 {
    (b - a).perp_dot(c - a)
}

/// A straight segment between two points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub p1: Point2,
    /// Second endpoint.
    pub p2: Point2,
}

impl Segment {
    /// Create a segment from its endpoints.
    pub const fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Create a segment from endpoint coordinates.
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Vector from `p1` to `p2`.
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.p1.distance(self.p2)
    }

    /// Squared length of the segment.
    pub fn length_squared(&self) -> f64 {
        self.p1.distance_squared(self.p2)
    }

    /// Outline iterator mapping points through `mapper`. A degenerate segment yields nothing.
    pub fn path_iter_with<M: PointMapper>(&self, mapper: M) -> ShapePathIter<M> {
        if self.is_empty() {
            ShapePathIter::empty(mapper, true)
        } else {
            ShapePathIter::line(self.p1, self.p2, mapper)
        }
    }
}

impl Shape2D for Segment {
    fn is_empty(&self) -> bool {
        self.p1 == self.p2
    }

    fn contains(&self, p: Point2) -> bool {
        self.distance_squared(p) <= SEGMENT_CONTAINS_EPSILON * SEGMENT_CONTAINS_EPSILON
    }

    fn closest_point_to(&self, p: Point2) -> Point2 {
        closest_point_on_segment(self.p1, self.p2, p)
    }

    fn to_bounding_box(&self) -> Rectangle {
        Rectangle::from_corners(self.p1, self.p2)
    }

    fn translate(&mut self, v: Vector2) {
        self.p1 += v;
        self.p2 += v;
    }

    fn path_iter(&self, transform: Option<&Transform2D>) -> Box<dyn PathIterator + '_> {
        match transform {
            Some(t) => Box::new(self.path_iter_with(*t)),
            None => Box::new(self.path_iter_with(Identity)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let s = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(s.closest_point_to(Point2::new(-3.0, 4.0)), Point2::new(0.0, 0.0));
        assert_eq!(s.closest_point_to(Point2::new(4.0, 4.0)), Point2::new(4.0, 0.0));
        assert_eq!(s.closest_point_to(Point2::new(12.0, -1.0)), Point2::new(10.0, 0.0));
        assert_eq!(s.distance(Point2::new(4.0, 3.0)), 3.0);
        assert_eq!(s.distance_l1(Point2::new(13.0, 4.0)), 7.0);
        assert_eq!(s.distance_linf(Point2::new(13.0, 4.0)), 4.0);
    }

    #[test]
    fn contains_tolerates_rounding() {
        let s = Segment::from_coords(0.0, 0.0, 1.0, 1.0);
        assert!(s.contains(Point2::new(0.3, 0.3 + 1e-12)));
        assert!(!s.contains(Point2::new(0.3, 0.31)));
    }

    #[test]
    fn degenerate_segment_has_no_outline() {
        let s = Segment::from_coords(2.0, 2.0, 2.0, 2.0);
        assert!(s.is_empty());
        assert_eq!(s.path_iter(None).count(), 0);
        let t = Segment::from_coords(2.0, 2.0, 3.0, 2.0);
        assert_eq!(t.path_iter(None).count(), 2);
        assert!(t.path_iter(None).is_polyline());
    }
}
