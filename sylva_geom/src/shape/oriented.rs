// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangles with an arbitrary orientation.

use alloc::boxed::Box;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::error::GeomError;
use crate::path::iter::{Identity, PathIterator, PointMapper, ShapePathIter};
use crate::shape::{Rectangle, Shape2D};
use crate::transform2d::Transform2D;
use crate::tuple2::{Point2, Vector2};

/// A closed rectangle in its own frame.
///
/// The frame is given by a center, a unit first axis `r` and the second axis
/// `s = r.perpendicular()`; the rectangle spans `[-extent_r, extent_r]` along
/// `r` and `[-extent_s, extent_s]` along `s`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrientedRectangle {
    center: Point2,
    axis_r: Vector2,
    extent_r: f64,
    extent_s: f64,
}

impl Default for OrientedRectangle {
    fn default() -> Self {
        Self {
            center: Point2::ORIGIN,
            axis_r: Vector2::new(1.0, 0.0),
            extent_r: 0.0,
            extent_s: 0.0,
        }
    }
}

impl OrientedRectangle {
    /// Create an oriented rectangle. `axis` is normalized here.
    ///
    /// Fails on a zero axis or a negative extent.
    pub fn new(
        center: Point2,
        axis: Vector2,
        extent_r: f64,
        extent_s: f64,
    ) -> Result<Self, GeomError> {
        let axis_r = axis
            .normalized()
            .ok_or(GeomError::InvalidArgument("oriented rectangle axis is zero"))?;
        if extent_r < 0.0 || extent_s < 0.0 {
            return Err(GeomError::InvalidArgument("negative oriented rectangle extent"));
        }
        Ok(Self {
            center,
            axis_r,
            extent_r,
            extent_s,
        })
    }

    /// Smallest rectangle aligned on `axis` that encloses every point.
    pub fn from_points(points: &[Point2], axis: Vector2) -> Result<Self, GeomError> {
        let r = axis
            .normalized()
            .ok_or(GeomError::InvalidArgument("oriented rectangle axis is zero"))?;
        let s = r.perpendicular();
        let (first, rest) = points
            .split_first()
            .ok_or(GeomError::InvalidArgument("no points to enclose"))?;
        let v = first.to_vector();
        let (mut min_r, mut min_s) = (v.dot(r), v.dot(s));
        let (mut max_r, mut max_s) = (min_r, min_s);
        for p in rest {
            let v = p.to_vector();
            let (pr, ps) = (v.dot(r), v.dot(s));
            min_r = min_r.min(pr);
            max_r = max_r.max(pr);
            min_s = min_s.min(ps);
            max_s = max_s.max(ps);
        }
        let cr = (min_r + max_r) * 0.5;
        let cs = (min_s + max_s) * 0.5;
        Ok(Self {
            center: (r * cr + s * cs).to_point(),
            axis_r: r,
            extent_r: (max_r - min_r) * 0.5,
            extent_s: (max_s - min_s) * 0.5,
        })
    }

    /// Center of the rectangle.
    pub const fn center(&self) -> Point2 {
        self.center
    }

    /// Unit first axis.
    pub const fn axis_r(&self) -> Vector2 {
        self.axis_r
    }

    /// Unit second axis, perpendicular to the first.
    pub const fn axis_s(&self) -> Vector2 {
        self.axis_r.perpendicular()
    }

    /// Half-length along the first axis.
    pub const fn extent_r(&self) -> f64 {
        self.extent_r
    }

    /// Half-length along the second axis.
    pub const fn extent_s(&self) -> f64 {
        self.extent_s
    }

    /// Coordinates of `p` in the rectangle's frame.
    pub fn to_local(&self, p: Point2) -> Point2 {
        let d = p - self.center;
        Point2::new(d.dot(self.axis_r), d.dot(self.axis_s()))
    }

    /// World position of frame coordinates `(u, v)`.
    pub fn to_world(&self, local: Point2) -> Point2 {
        self.center + self.axis_r * local.x + self.axis_s() * local.y
    }

    /// The four corners, counter-clockwise in a y-up frame, starting at `(+r, +s)`.
    pub fn corners(&self) -> [Point2; 4] {
        let (er, es) = (self.extent_r, self.extent_s);
        [
            self.to_world(Point2::new(er, es)),
            self.to_world(Point2::new(-er, es)),
            self.to_world(Point2::new(-er, -es)),
            self.to_world(Point2::new(er, -es)),
        ]
    }

    /// Outline iterator mapping points through `mapper`. A flat rectangle yields nothing.
    pub fn path_iter_with<M: PointMapper>(&self, mapper: M) -> ShapePathIter<M> {
        if self.is_empty() {
            ShapePathIter::empty(mapper, true)
        } else {
            ShapePathIter::polygon(self.corners(), mapper)
        }
    }
}

impl Shape2D for OrientedRectangle {
    fn is_empty(&self) -> bool {
        self.extent_r <= 0.0 || self.extent_s <= 0.0
    }

    fn contains(&self, p: Point2) -> bool {
        let l = self.to_local(p);
        l.x.abs() <= self.extent_r && l.y.abs() <= self.extent_s
    }

    fn closest_point_to(&self, p: Point2) -> Point2 {
        let l = self.to_local(p);
        if l.x.abs() <= self.extent_r && l.y.abs() <= self.extent_s {
            return p;
        }
        self.to_world(Point2::new(
            l.x.clamp(-self.extent_r, self.extent_r),
            l.y.clamp(-self.extent_s, self.extent_s),
        ))
    }

    fn to_bounding_box(&self) -> Rectangle {
        let r = self.axis_r;
        let s = self.axis_s();
        let hx = r.x.abs() * self.extent_r + s.x.abs() * self.extent_s;
        let hy = r.y.abs() * self.extent_r + s.y.abs() * self.extent_s;
        let h = Vector2::new(hx, hy);
        Rectangle::from_corners(self.center - h, self.center + h)
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
