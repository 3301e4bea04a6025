// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned ellipses.

use alloc::boxed::Box;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::error::GeomError;
use crate::path::iter::{Identity, PathIterator, PointMapper, ShapePathIter};
use crate::shape::segment::closest_point_on_segment;
use crate::shape::{Rectangle, Shape2D};
use crate::transform2d::Transform2D;
use crate::tuple2::{Point2, Vector2};

const CLOSEST_POINT_ITERATIONS: usize = 12;

/// Point of the boundary of the ellipse centered at the origin with radii
/// `(rx, ry)` that is closest to `p`.
///
/// Iterates on the first quadrant and mirrors the answer back; converges in a
/// handful of steps for any eccentricity. A flat ellipse degenerates to its
/// major axis.
pub(crate) fn closest_point_on_ellipse_boundary(rx: f64, ry: f64, p: Point2) -> Point2 {
    if rx <= 0.0 || ry <= 0.0 {
        return closest_point_on_segment(Point2::new(-rx, -ry), Point2::new(rx, ry), p);
    }
    let px = p.x.abs();
    let py = p.y.abs();
    let mut tx = core::f64::consts::FRAC_1_SQRT_2;
    let mut ty = core::f64::consts::FRAC_1_SQRT_2;
    for _ in 0..CLOSEST_POINT_ITERATIONS {
        let x = rx * tx;
        let y = ry * ty;
        // Center of curvature of the current estimate.
        let ex = (rx * rx - ry * ry) * tx * tx * tx / rx;
        let ey = (ry * ry - rx * rx) * ty * ty * ty / ry;
        let r = (x - ex).hypot(y - ey);
        let qx = px - ex;
        let qy = py - ey;
        let q = qx.hypot(qy);
        if q == 0.0 {
            break;
        }
        tx = ((qx * r / q + ex) / rx).clamp(0.0, 1.0);
        ty = ((qy * r / q + ey) / ry).clamp(0.0, 1.0);
        let t = tx.hypot(ty);
        tx /= t;
        ty /= t;
    }
    let x = rx * tx;
    let y = ry * ty;
    Point2::new(
        if p.x < 0.0 { -x } else { x },
        if p.y < 0.0 { -y } else { y },
    )
}

/// A closed, axis-aligned ellipse inscribed in its frame rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ellipse {
    frame: Rectangle,
}

impl Ellipse {
    /// Ellipse inscribed in the frame at `(x, y)` of the given size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeomError> {
        Ok(Self {
            frame: Rectangle::from_xywh(x, y, width, height)?,
        })
    }

    /// Ellipse inscribed in the frame spanning two corners, in any order.
    pub fn from_corners(p1: Point2, p2: Point2) -> Self {
        Self {
            frame: Rectangle::from_corners(p1, p2),
        }
    }

    /// Ellipse from its center and radii.
    pub fn from_center(center: Point2, rx: f64, ry: f64) -> Result<Self, GeomError> {
        if rx < 0.0 || ry < 0.0 {
            return Err(GeomError::InvalidArgument("negative ellipse radius"));
        }
        Ok(Self::from_corners(
            Point2::new(center.x - rx, center.y - ry),
            Point2::new(center.x + rx, center.y + ry),
        ))
    }

    /// The frame rectangle.
    pub const fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Center of the ellipse.
    pub fn center(&self) -> Point2 {
        self.frame.center()
    }

    /// Horizontal and vertical radii.
    pub fn radii(&self) -> Vector2 {
        Vector2::new(self.frame.width() * 0.5, self.frame.height() * 0.5)
    }

    /// Outline iterator mapping points through `mapper`. A flat ellipse yields nothing.
    pub fn path_iter_with<M: PointMapper>(&self, mapper: M) -> ShapePathIter<M> {
        if self.is_empty() {
            return ShapePathIter::empty(mapper, false);
        }
        let r = self.radii();
        ShapePathIter::ellipse(self.center(), r.x, r.y, mapper)
    }
}

impl Shape2D for Ellipse {
    fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    fn contains(&self, p: Point2) -> bool {
        if self.is_empty() {
            // Flat ellipses reduce to their major axis.
            return self.frame.contains(p);
        }
        let c = self.center();
        let r = self.radii();
        let nx = (p.x - c.x) / r.x;
        let ny = (p.y - c.y) / r.y;
        nx * nx + ny * ny <= 1.0
    }

    fn closest_point_to(&self, p: Point2) -> Point2 {
        if self.contains(p) {
            return p;
        }
        let c = self.center();
        let r = self.radii();
        c + closest_point_on_ellipse_boundary(r.x, r.y, Point2::ORIGIN + (p - c)).to_vector()
    }

    fn to_bounding_box(&self) -> Rectangle {
        self.frame
    }

    fn translate(&mut self, v: Vector2) {
        self.frame.translate(v);
    }

    fn path_iter(&self, transform: Option<&Transform2D>) -> Box<dyn PathIterator + '_> {
        match transform {
            Some(t) => Box::new(self.path_iter_with(*t)),
            None => Box::new(self.path_iter_with(Identity)),
        }
    }
}

impl From<Ellipse> for kurbo::Ellipse {
    fn from(e: Ellipse) -> Self {
        Self::from_rect(e.frame.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_uses_normalized_radius() {
        let e = Ellipse::from_center(Point2::new(0.0, 0.0), 4.0, 2.0).unwrap();
        assert!(e.contains(Point2::new(4.0, 0.0)));
        assert!(e.contains(Point2::new(0.0, -2.0)));
        assert!(!e.contains(Point2::new(3.0, 1.5)));
        assert_eq!(e.radii(), Vector2::new(4.0, 2.0));
        assert!(Ellipse::new(0.0, 0.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn closest_point_lies_on_boundary() {
        let e = Ellipse::from_center(Point2::new(1.0, 1.0), 5.0, 2.0).unwrap();
        for p in [
            Point2::new(10.0, 1.0),
            Point2::new(1.0, -6.0),
            Point2::new(7.0, 5.0),
            Point2::new(-8.0, -3.0),
        ] {
            let q = e.closest_point_to(p);
            let n = (q.x - 1.0) / 5.0;
            let m = (q.y - 1.0) / 2.0;
            assert!((n * n + m * m - 1.0).abs() < 1e-9, "{q:?} off the ellipse");
            assert!(e.distance(p) <= p.distance(Point2::new(6.0, 1.0)) + 1e-9);
        }
        assert_eq!(e.closest_point_to(Point2::new(10.0, 1.0)), Point2::new(6.0, 1.0));
    }

    #[test]
    fn axis_aligned_queries_hit_vertices() {
        let e = Ellipse::from_center(Point2::ORIGIN, 3.0, 1.0).unwrap();
        let q = e.closest_point_to(Point2::new(0.0, 4.0));
        assert!(q.distance(Point2::new(0.0, 1.0)) < 1e-9);
    }
}
